// cardform/src/lib.rs

//! cardform
//!
//! Payment-card entry form core: raw field store, synchronous validation,
//! the Editing/Submitted session state, and live card preview data.
#![warn(missing_docs)]

pub mod constants;
pub mod controller;
pub mod error;
pub mod prelude;
pub mod preview;
pub mod render;
pub mod store;
pub mod test_support;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the key enums in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
