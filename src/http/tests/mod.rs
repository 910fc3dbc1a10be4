//! Unit tests for the HTTP boundary adapter.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]
