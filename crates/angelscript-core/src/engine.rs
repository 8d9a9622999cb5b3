//! The services a script builder needs from a script engine.
//!
//! The builder never compiles anything itself. It asks the engine to
//! classify tokens, stages rewritten sections with it, asks it to build the
//! module, and finally asks it to map declarations back to compiled entities.
//! Each of those services is its own trait; [`ScriptEngine`] bundles them.

use crate::diagnostics::Diagnostic;
use crate::enums::TokenClass;
use crate::error::ScriptResult;
use crate::ids::{FunctionId, TypeId, VarIndex};

/// Class and byte length of the token at the start of some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub class: TokenClass,
    pub len: usize,
}

impl ClassifiedToken {
    #[inline]
    pub const fn new(class: TokenClass, len: usize) -> Self {
        Self { class, len }
    }
}

/// Splits source text into classified tokens, one token at a time.
///
/// `source` is the remaining text starting at the token to classify; it is
/// never empty. Implementations must report a length of at least one byte.
pub trait TokenClassifier {
    fn classify(&self, source: &str) -> ClassifiedToken;
}

/// Stages script sections for compilation.
pub trait SectionRegistrar {
    /// Add `code` as a section named `section_name` of `module`.
    ///
    /// The engine must keep `code` byte for byte so that positions in its
    /// diagnostics line up with the original file.
    fn add_section(&mut self, module: &str, section_name: &str, code: &str) -> ScriptResult<()>;
}

/// Compiles every staged section of a module.
pub trait ModuleBuilder {
    /// Build `module`, returning the engine's code. Negative values are failures;
    /// compiler messages travel through [`MessageSink`].
    fn build(&mut self, module: &str) -> i32;
}

/// Maps declaration text back to compiled entities of a built module.
pub trait EntityResolver {
    fn type_id_by_decl(&self, module: &str, decl: &str) -> Option<TypeId>;

    fn function_id_by_decl(&self, module: &str, decl: &str) -> Option<FunctionId>;

    fn global_var_index_by_decl(&self, module: &str, decl: &str) -> Option<VarIndex>;
}

/// Receives diagnostics, like the engine's message callback.
pub trait MessageSink {
    fn write_message(&mut self, _diagnostic: &Diagnostic) {}
}

/// Everything the script builder needs from an engine.
pub trait ScriptEngine:
    TokenClassifier + SectionRegistrar + ModuleBuilder + EntityResolver + MessageSink
{
}

impl<T> ScriptEngine for T where
    T: TokenClassifier + SectionRegistrar + ModuleBuilder + EntityResolver + MessageSink + ?Sized
{
}

impl<T: TokenClassifier + ?Sized> TokenClassifier for &T {
    fn classify(&self, source: &str) -> ClassifiedToken {
        (**self).classify(source)
    }
}
