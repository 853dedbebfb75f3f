//! Utilities for cardform: small, reusable text helpers shared by the
//! validator and the preview.

pub mod grouping;
pub mod text;

pub use grouping::*;
pub use text::*;
