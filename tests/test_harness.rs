// tests/test_harness.rs
//! Test harness for end-to-end script builder tests
//!
//! Provides an in-process engine double and helpers for the scripts under
//! `test_scripts/`.

#![allow(dead_code)]

use angelscript_builder::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Engine double that keeps everything it receives.
///
/// Classification is delegated to the real [`Tokenizer`]; declarations
/// resolve from tables filled in by the test.
#[derive(Default)]
pub struct RecordingEngine {
    tokenizer: Tokenizer,
    pub sections: Vec<(String, String)>,
    pub build_result: i32,
    pub messages: Vec<Diagnostic>,
    types: HashMap<String, TypeId>,
    functions: HashMap<String, FunctionId>,
    variables: HashMap<String, VarIndex>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare_type(mut self, decl: &str, id: u32) -> Self {
        self.types.insert(decl.to_string(), TypeId::new(id));
        self
    }

    pub fn declare_function(mut self, decl: &str, id: u32) -> Self {
        self.functions.insert(decl.to_string(), FunctionId::new(id));
        self
    }

    pub fn declare_variable(mut self, decl: &str, index: u32) -> Self {
        self.variables.insert(decl.to_string(), VarIndex::new(index));
        self
    }

    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(section, _)| section == name)
            .map(|(_, code)| code.as_str())
    }
}

impl TokenClassifier for RecordingEngine {
    fn classify(&self, source: &str) -> ClassifiedToken {
        self.tokenizer.classify(source)
    }
}

impl SectionRegistrar for RecordingEngine {
    fn add_section(&mut self, _module: &str, section_name: &str, code: &str) -> ScriptResult<()> {
        self.sections
            .push((section_name.to_string(), code.to_string()));
        Ok(())
    }
}

impl ModuleBuilder for RecordingEngine {
    fn build(&mut self, _module: &str) -> i32 {
        self.build_result
    }
}

impl EntityResolver for RecordingEngine {
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

impl MessageSink for RecordingEngine {
    fn write_message(&mut self, diagnostic: &Diagnostic) {
        self.messages.push(diagnostic.clone());
    }
}

/// Load a test script from the test_scripts directory.
pub fn load_script(filename: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_scripts")
        .join(filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}
