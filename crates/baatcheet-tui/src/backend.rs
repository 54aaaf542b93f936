//! Background task talking to the Baatcheet backend.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use baatcheet_client::BackendClient;

use crate::event::{BackendCommand, BackendStatus, UiEvent};

/// Run the backend loop.
///
/// This function runs in a separate thread with its own tokio runtime.
/// Each `Ask` is served on its own task so the loop keeps accepting
/// commands; the session on the UI side decides whether a reply still
/// applies.
pub async fn run_backend(
    client: BackendClient,
    ui_tx: mpsc::Sender<UiEvent>,
    mut cmd_rx: mpsc::Receiver<BackendCommand>,
) {
    info!(backend = %client.base_url(), "Probing backend");

    // Probe on its own task so commands are served while it runs
    {
        let client = client.clone();
        let ui_tx = ui_tx.clone();
        tokio::spawn(async move {
            let status = match client.health().await {
                Ok(true) => BackendStatus::Online,
                Ok(false) => BackendStatus::Offline,
                Err(e) => {
                    warn!(error = %e, "Health check failed");
                    BackendStatus::Offline
                }
            };
            let _ = ui_tx.send(UiEvent::Status(status)).await;
        });
    }

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            BackendCommand::Ask(pending) => {
                debug!(
                    token = %pending.token,
                    persona = pending.persona.id,
                    "Asking backend"
                );
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let result = client
                        .ask(pending.persona, &pending.request)
                        .await
                        .map(|reply| reply.content)
                        .map_err(|e| e.to_string());

                    let status = if result.is_ok() {
                        BackendStatus::Online
                    } else {
                        BackendStatus::Offline
                    };
                    let _ = ui_tx
                        .send(UiEvent::Reply {
                            token: pending.token,
                            result,
                        })
                        .await;
                    let _ = ui_tx.send(UiEvent::Status(status)).await;
                });
            }
            BackendCommand::Quit => {
                info!("Received quit command, shutting down backend");
                break;
            }
        }
    }

    info!("Backend shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use baatcheet_core::{ChatSession, SendStart};
    use tokio::net::TcpListener;

    /// Base URL of a server that accepts connections and never answers.
    async fn silent_backend() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_quit_does_not_wait_for_health_check() {
        let base = silent_backend().await;
        let client = BackendClient::with_timeout(&base, Duration::from_secs(30)).unwrap();

        let (ui_tx, _ui_rx) = mpsc::channel(16);
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        cmd_tx.send(BackendCommand::Quit).await.unwrap();

        let finished =
            tokio::time::timeout(Duration::from_secs(2), run_backend(client, ui_tx, cmd_rx)).await;
        assert!(finished.is_ok(), "backend loop stayed blocked after Quit");
    }

    #[tokio::test]
    async fn test_ask_to_unreachable_backend_reports_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = BackendClient::new(&format!("http://{}", addr));
        let mut session = ChatSession::default();
        let pending = match session.begin_send("hi").unwrap() {
            SendStart::Pending(pending) => pending,
            other => panic!("Expected Pending, got {:?}", other),
        };
        let token = pending.token;

        let (ui_tx, mut ui_rx) = mpsc::channel(16);
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let handle = tokio::spawn(run_backend(client, ui_tx, cmd_rx));
        cmd_tx.send(BackendCommand::Ask(pending)).await.unwrap();

        let reply = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                match ui_rx.recv().await {
                    Some(UiEvent::Reply { token, result }) => break (token, result),
                    Some(UiEvent::Status(_)) => continue,
                    None => panic!("backend closed the channel"),
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(reply.0, token);
        assert!(reply.1.is_err());

        cmd_tx.send(BackendCommand::Quit).await.unwrap();
        handle.await.unwrap();
    }
}
