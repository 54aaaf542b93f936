//! HTTP request handlers.

mod ask;
mod health;

pub use ask::ask;
pub use health::health_check;
