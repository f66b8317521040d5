//! Prelude module for saka_date crate.
//!
//! Re-exports commonly used derive macros from derive_more.

pub use derive_more::{Display, From, Into};
