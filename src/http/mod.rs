//! HTTP boundary adapter for the todo service.
//!
//! Translates HTTP requests into service calls and service outcomes into
//! status codes and JSON bodies. The adapter is deliberately thin: no
//! middleware pipeline, no authentication, no pagination. All business
//! rules live in [`crate::todo::services`]; the only validation performed
//! here is request-shape checking that never reaches the core (required
//! title field, boolean `completed` query value).

mod routes;
mod server;

pub use server::{ServerError, serve};

#[cfg(test)]
mod tests;
