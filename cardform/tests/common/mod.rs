// Shared helpers for integration tests in `tests/`.
#![allow(dead_code)]

pub mod fixtures;

pub use cardform::test_support::{fill, filled_controller, valid_store};
