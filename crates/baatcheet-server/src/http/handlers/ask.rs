//! Persona question handler.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, Json};
use tracing::{info, warn};

use baatcheet_core::{AskRequest, Persona, Reply};

use crate::http::responses::ApiError;
use crate::state::AppState;

/// POST /{persona route} - forward the conversation to the generator.
///
/// The generator's reply is relayed unchanged.
pub async fn ask(
    state: Arc<AppState>,
    persona: &'static Persona,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<Reply>, ApiError> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(persona = persona.id, error = %rejection, "Invalid JSON in request body");
            return Err(ApiError::MalformedInput {
                message: rejection.body_text(),
            });
        }
    };

    validate_request(&req)?;

    info!(
        persona = persona.id,
        history_len = req.history.len(),
        "Received question"
    );

    let reply = state
        .generator
        .generate(persona.generator_name, &req.question, &req.history)
        .await
        .map_err(|e| {
            warn!(persona = persona.id, error = %e, "Generator failed");
            ApiError::from(e)
        })?;

    Ok(Json(reply))
}

/// Validate request fields before calling the generator.
fn validate_request(req: &AskRequest) -> Result<(), ApiError> {
    if req.question.trim().is_empty() {
        return Err(ApiError::InvalidField {
            field: "question",
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_question() {
        let req = AskRequest {
            question: "  ".to_string(),
            history: Vec::new(),
        };
        assert!(matches!(
            validate_request(&req),
            Err(ApiError::InvalidField { field: "question", .. })
        ));
    }

    #[test]
    fn test_validate_accepts_question() {
        let req = AskRequest {
            question: "kya haal?".to_string(),
            history: Vec::new(),
        };
        assert!(validate_request(&req).is_ok());
    }
}
