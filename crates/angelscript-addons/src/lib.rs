//! Optional add-ons layered on top of an AngelScript engine.
//!
//! - [`script_builder`]: `#include` resolution and `[metadata]` binding
//!   (feature `script-builder`, on by default).

#[cfg(feature = "script-builder")]
pub mod script_builder;
