//! Shared vocabulary for the AngelScript script builder.
//!
//! This crate holds the pieces every other crate agrees on:
//! - [`TokenClass`] and [`ClassifiedToken`], the output of token classification
//! - entity identifiers ([`TypeId`], [`FunctionId`], [`VarIndex`])
//! - engine return codes and [`ScriptError`]
//! - [`Span`] and [`Diagnostics`] for reporting
//! - the engine service traits in [`engine`]

pub mod diagnostics;
pub mod engine;
pub mod enums;
pub mod error;
pub mod ids;
pub mod span;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use engine::{
    ClassifiedToken, EntityResolver, MessageSink, ModuleBuilder, ScriptEngine, SectionRegistrar,
    TokenClassifier,
};
pub use enums::{ReturnCode, TokenClass};
pub use error::{ScriptError, ScriptResult};
pub use ids::{FunctionId, TypeId, VarIndex};
pub use span::Span;
