//! Script builder add-on.
//!
//! Assembles a module from a root section and the files it `#include`s,
//! extracts `[...]` metadata annotations, and once the engine has built the
//! module binds each annotation to the compiled type, function or global
//! variable it was attached to.
//!
//! ```
//! use angelscript_addons::script_builder::{MemoryLoader, ScriptBuilderConfig};
//!
//! let builder = ScriptBuilderConfig::new()
//!     .with_include_loader(MemoryLoader::new().with_file("common.as", "int shared;"))
//!     .collect_warnings(false)
//!     .build();
//!
//! assert_eq!(builder.section_count(), 0);
//! ```

mod annotation;
mod cursor;
mod declaration;
mod error;
mod include;
mod metadata;
mod scanner;
mod session;

use angelscript_core::{
    Diagnostic, Diagnostics, FunctionId, MessageSink, ScriptEngine, ScriptError, TokenClassifier,
    TypeId, VarIndex,
};

pub use error::{ScriptBuilderError, ScriptBuilderResult};
pub use include::{FileSystemLoader, IncludeLoader, MemoryLoader};
pub use metadata::{DeclarationKind, MetadataStats, MetadataStore, PendingDeclaration};
pub use scanner::{SectionScan, scan_section};
pub use session::{AssembledSection, BuildSession, IncludedFileSet};

use include::IncludeResolver;

/// Loader type stored by the builder.
pub type BoxedIncludeLoader = Box<dyn IncludeLoader + Send + Sync>;

/// Preprocessor and metadata binder for AngelScript modules.
///
/// One builder drives one build session at a time. Sections are scanned and
/// held by the builder; nothing reaches the engine until
/// [`build_module`](Self::build_module) runs, so a file that fails to load
/// leaves the engine untouched.
pub struct ScriptBuilder {
    include_loader: BoxedIncludeLoader,
    collect_warnings: bool,

    session: BuildSession,
    metadata: MetadataStore,
    diagnostics: Diagnostics,
}

impl ScriptBuilder {
    /// Creates a new ScriptBuilder reading files from disk.
    pub fn new() -> Self {
        Self {
            include_loader: Box::new(FileSystemLoader),
            collect_warnings: true,
            session: BuildSession::default(),
            metadata: MetadataStore::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Replaces how root and included files are read.
    pub fn set_include_loader<L>(&mut self, loader: L)
    where
        L: IncludeLoader + Send + Sync + 'static,
    {
        self.include_loader = Box::new(loader);
    }

    /// Preprocess `path` and everything it includes, then build `module`.
    ///
    /// A file that cannot be read aborts the session before anything is
    /// staged with the engine.
    #[tracing::instrument(level = "debug", skip_all, fields(module = %module, path = %path))]
    pub fn build_from_file<E: ScriptEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        module: &str,
        path: &str,
    ) -> ScriptBuilderResult<()> {
        self.clear_session();
        self.add_section_from_file(engine, path)?;
        self.build_module(engine, module)
    }

    /// Preprocess in-memory `text` named `section_name`, then build `module`.
    #[tracing::instrument(level = "debug", skip_all, fields(module = %module, section = %section_name))]
    pub fn build_from_text<E: ScriptEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        module: &str,
        text: &str,
        section_name: &str,
    ) -> ScriptBuilderResult<()> {
        self.clear_session();
        self.add_section_from_memory(engine, section_name, text)?;
        self.build_module(engine, module)
    }

    /// Adds a script section from a file, following its includes.
    ///
    /// Returns `false` if the file was already part of this session.
    pub fn add_section_from_file<E>(&mut self, engine: &mut E, path: &str) -> ScriptBuilderResult<bool>
    where
        E: TokenClassifier + MessageSink + ?Sized,
    {
        let resolver = IncludeResolver::new(&*engine, &*self.include_loader);
        let result = resolver.load_section(&mut self.session, path);
        self.finish_processing(engine, result)
    }

    /// Adds a script section from memory, following its includes.
    ///
    /// Returns `false` if a section with this name was already added.
    pub fn add_section_from_memory<E>(
        &mut self,
        engine: &mut E,
        section_name: &str,
        code: &str,
    ) -> ScriptBuilderResult<bool>
    where
        E: TokenClassifier + MessageSink + ?Sized,
    {
        if !self.session.memory_sections.insert(section_name.to_string()) {
            return Ok(false);
        }

        let resolver = IncludeResolver::new(&*engine, &*self.include_loader);
        let result = resolver
            .process_section(&mut self.session, code, section_name)
            .map(|()| true);
        self.finish_processing(engine, result)
    }

    /// Stage every assembled section, build the module, and bind metadata.
    ///
    /// If the engine reports a failed build the metadata store is left as it was.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn build_module<E: ScriptEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        module: &str,
    ) -> ScriptBuilderResult<()> {
        tracing::info!(
            module,
            sections = self.session.sections.len(),
            declarations = self.session.declarations.len(),
            "building module"
        );

        for section in &self.session.sections {
            engine.add_section(module, &section.name, &section.code)?;
        }

        ScriptError::from_code(engine.build(module)).map_err(ScriptBuilderError::Compilation)?;

        self.metadata.clear();
        self.metadata
            .bind(&*engine, module, &self.session.declarations);

        let stats = self.metadata.stats();
        tracing::info!(
            module,
            types = stats.types,
            functions = stats.functions,
            variables = stats.variables,
            unresolved = stats.unresolved,
            "module built"
        );
        Ok(())
    }

    /// Resets session state, metadata and diagnostics.
    pub fn clear_session(&mut self) {
        self.session.clear();
        self.metadata.clear();
        self.diagnostics.clear();
    }

    pub fn metadata_for_type(&self, type_id: TypeId) -> &str {
        self.metadata.metadata_for_type(type_id)
    }

    pub fn metadata_for_func(&self, func_id: FunctionId) -> &str {
        self.metadata.metadata_for_func(func_id)
    }

    pub fn metadata_for_var(&self, var_index: VarIndex) -> &str {
        self.metadata.metadata_for_var(var_index)
    }

    pub fn metadata(&self) -> &MetadataStore {
        &self.metadata
    }

    pub fn metadata_stats(&self) -> MetadataStats {
        self.metadata.stats()
    }

    /// Declarations found in the current session, in source order.
    pub fn declarations(&self) -> &[PendingDeclaration] {
        self.session.declarations()
    }

    pub fn included_files(&self) -> impl Iterator<Item = &str> {
        self.session.included_files().iter()
    }

    /// Gets the number of assembled script sections
    pub fn section_count(&self) -> usize {
        self.session.sections().len()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.session.section_names()
    }

    pub fn sections(&self) -> &[AssembledSection] {
        self.session.sections()
    }

    /// Warnings from lenient annotation handling plus load failures.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn finish_processing<S: MessageSink + ?Sized>(
        &mut self,
        sink: &mut S,
        result: ScriptBuilderResult<bool>,
    ) -> ScriptBuilderResult<bool> {
        let warnings = std::mem::take(&mut self.session.warnings);
        if self.collect_warnings {
            self.diagnostics.extend(warnings);
        }

        result.map_err(|err| self.abort_session(sink, err))
    }

    fn abort_session<S: MessageSink + ?Sized>(
        &mut self,
        sink: &mut S,
        err: ScriptBuilderError,
    ) -> ScriptBuilderError {
        if let Some(diagnostic) = load_failure_diagnostic(&err) {
            sink.write_message(&diagnostic);
            self.diagnostics.add_diagnostic(diagnostic);
        }

        tracing::warn!(error = %err, "build session aborted");
        self.session.clear();
        err
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn load_failure_diagnostic(err: &ScriptBuilderError) -> Option<Diagnostic> {
    let (path, what) = match err {
        ScriptBuilderError::FileOpen { path, .. } => (path, "Failed to open script file"),
        ScriptBuilderError::FileRead { path } => (path, "Failed to load script file"),
        ScriptBuilderError::Encoding { path, .. } => (path, "Script file is not valid UTF-8"),
        _ => return None,
    };

    let cwd = std::env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();
    Some(Diagnostic::section_error(
        path,
        format!("{what} in path: '{cwd}'"),
    ))
}

/// Builder pattern for easier ScriptBuilder configuration
pub struct ScriptBuilderConfig {
    include_loader: Option<BoxedIncludeLoader>,
    collect_warnings: bool,
}

impl ScriptBuilderConfig {
    pub fn new() -> Self {
        Self {
            include_loader: None,
            collect_warnings: true,
        }
    }

    pub fn with_include_loader<L>(mut self, loader: L) -> Self
    where
        L: IncludeLoader + Send + Sync + 'static,
    {
        self.include_loader = Some(Box::new(loader));
        self
    }

    /// Whether annotation warnings are kept in [`ScriptBuilder::diagnostics`].
    pub fn collect_warnings(mut self, collect: bool) -> Self {
        self.collect_warnings = collect;
        self
    }

    pub fn build(self) -> ScriptBuilder {
        let mut builder = ScriptBuilder::new();
        if let Some(loader) = self.include_loader {
            builder.include_loader = loader;
        }
        builder.collect_warnings = self.collect_warnings;
        builder
    }
}

impl Default for ScriptBuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}
