//! Unit tests for the todo context.
//!
//! Tests are organised by layer, covering happy paths, error cases, and
//! edge cases for the public surface.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]
