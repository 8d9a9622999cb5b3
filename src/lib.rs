//! AngelScript script builder.
//!
//! Sits in front of an AngelScript engine: follows `#include "file"`
//! directives, strips `[metadata]` annotations out of the source while keeping
//! every line and column where it was, and after the engine has built the
//! module binds each annotation to the compiled entity it decorated.
//!
//! The engine is reached through the traits in [`angelscript_core`]; any type
//! implementing [`TokenClassifier`], [`SectionRegistrar`], [`ModuleBuilder`],
//! [`EntityResolver`] and [`MessageSink`] is a [`ScriptEngine`].
//!
//! ```
//! use angelscript_builder::prelude::*;
//!
//! let scan = scan_section(&Tokenizer::new(), "main", "[Editable] int speed = 3;").unwrap();
//!
//! assert_eq!(scan.declarations[0].metadata, "Editable");
//! assert_eq!(scan.declarations[0].signature, "int speed");
//! assert_eq!(scan.rewritten.len(), "[Editable] int speed = 3;".len());
//! ```

pub use angelscript_addons::script_builder;
pub use angelscript_core::{
    ClassifiedToken, Diagnostic, DiagnosticKind, Diagnostics, EntityResolver, FunctionId,
    MessageSink, ModuleBuilder, ReturnCode, ScriptEngine, ScriptError, ScriptResult,
    SectionRegistrar, Span, TokenClass, TokenClassifier, TypeId, VarIndex,
};
pub use angelscript_lexer::Tokenizer;

// Re-export main types
pub mod prelude {
    pub use crate::script_builder::{
        DeclarationKind, FileSystemLoader, IncludeLoader, MemoryLoader, MetadataStats,
        MetadataStore, PendingDeclaration, ScriptBuilder, ScriptBuilderConfig, ScriptBuilderError,
        ScriptBuilderResult, SectionScan, scan_section,
    };
    pub use angelscript_core::{
        ClassifiedToken, Diagnostic, DiagnosticKind, Diagnostics, EntityResolver, FunctionId,
        MessageSink, ModuleBuilder, ReturnCode, ScriptEngine, ScriptError, ScriptResult,
        SectionRegistrar, TokenClass, TokenClassifier, TypeId, VarIndex,
    };
    pub use angelscript_lexer::Tokenizer;
}
