#![allow(dead_code)]

use angelscript_core::{
    ClassifiedToken, Diagnostic, EntityResolver, FunctionId, MessageSink, ModuleBuilder,
    ReturnCode, ScriptError, ScriptResult, SectionRegistrar, TokenClassifier, TypeId, VarIndex,
};
use angelscript_lexer::Tokenizer;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A section handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedSection {
    pub module: String,
    pub name: String,
    pub code: String,
}

/// Engine double: classifies with the real tokenizer, records what it is
/// given, and resolves declarations from fixed tables.
#[derive(Debug, Default)]
pub struct StubEngine {
    tokenizer: Tokenizer,
    pub staged: Vec<StagedSection>,
    pub builds: usize,
    pub build_result: i32,
    pub reject_sections: bool,
    pub messages: Vec<Diagnostic>,
    types: HashMap<String, TypeId>,
    functions: HashMap<String, FunctionId>,
    variables: HashMap<String, VarIndex>,
}

impl StubEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, decl: &str, id: u32) -> Self {
        self.types.insert(decl.to_string(), TypeId::new(id));
        self
    }

    pub fn with_function(mut self, decl: &str, id: u32) -> Self {
        self.functions.insert(decl.to_string(), FunctionId::new(id));
        self
    }

    pub fn with_variable(mut self, decl: &str, index: u32) -> Self {
        self.variables.insert(decl.to_string(), VarIndex::new(index));
        self
    }

    pub fn failing_build(mut self, code: i32) -> Self {
        self.build_result = code;
        self
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.staged.iter().map(|s| s.name.as_str()).collect()
    }
}

impl TokenClassifier for StubEngine {
    fn classify(&self, source: &str) -> ClassifiedToken {
        self.tokenizer.classify(source)
    }
}

impl SectionRegistrar for StubEngine {
    fn add_section(&mut self, module: &str, section_name: &str, code: &str) -> ScriptResult<()> {
        if self.reject_sections {
            return Err(ScriptError::Engine(ReturnCode::InvalidArg));
        }
        self.staged.push(StagedSection {
            module: module.to_string(),
            name: section_name.to_string(),
            code: code.to_string(),
        });
        Ok(())
    }
}

impl ModuleBuilder for StubEngine {
    fn build(&mut self, _module: &str) -> i32 {
        self.builds += 1;
        self.build_result
    }
}

impl EntityResolver for StubEngine {
    fn type_id_by_decl(&self, _module: &str, decl: &str) -> Option<TypeId> {
        self.types.get(decl).copied()
    }

    fn function_id_by_decl(&self, _module: &str, decl: &str) -> Option<FunctionId> {
        self.functions.get(decl).copied()
    }

    fn global_var_index_by_decl(&self, _module: &str, decl: &str) -> Option<VarIndex> {
        self.variables.get(decl).copied()
    }
}

impl MessageSink for StubEngine {
    fn write_message(&mut self, diagnostic: &Diagnostic) {
        self.messages.push(diagnostic.clone());
    }
}

/// Write `content` to `dir/name` and return the full path as a string.
pub fn write_script(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    path.to_string_lossy().into_owned()
}
