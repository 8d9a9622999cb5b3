//! Include resolution.
//!
//! Files are identified by the literal path written in the directive. Two
//! spellings of the same file are two different includes.

use angelscript_core::TokenClassifier;
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;

use super::error::{ScriptBuilderError, ScriptBuilderResult};
use super::scanner::scan_section;
use super::session::BuildSession;

/// Reads the content of a root or included script file.
pub trait IncludeLoader {
    fn load(&self, path: &str) -> io::Result<Vec<u8>>;
}

impl<F> IncludeLoader for F
where
    F: Fn(&str) -> io::Result<Vec<u8>>,
{
    fn load(&self, path: &str) -> io::Result<Vec<u8>> {
        self(path)
    }
}

/// Reads files from disk, relative to the process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemLoader;

impl IncludeLoader for FileSystemLoader {
    fn load(&self, path: &str) -> io::Result<Vec<u8>> {
        std::fs::read(Path::new(path))
    }
}

/// Serves files from memory.
///
/// ```
/// use angelscript_addons::script_builder::{IncludeLoader, MemoryLoader};
///
/// let loader = MemoryLoader::new().with_file("common.as", "int shared;");
/// assert_eq!(loader.load("common.as").unwrap(), b"int shared;");
/// assert!(loader.load("missing.as").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: FxHashMap<String, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), content.into());
    }
}

impl IncludeLoader for MemoryLoader {
    fn load(&self, path: &str) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}"))
        })
    }
}

/// Drives scanning of a section and, recursively, of everything it includes.
pub(crate) struct IncludeResolver<'a, C: ?Sized, L: ?Sized> {
    classifier: &'a C,
    loader: &'a L,
}

impl<'a, C, L> IncludeResolver<'a, C, L>
where
    C: TokenClassifier + ?Sized,
    L: IncludeLoader + ?Sized,
{
    pub fn new(classifier: &'a C, loader: &'a L) -> Self {
        Self { classifier, loader }
    }

    /// Scan `source`, stage it in the session, then load its includes.
    ///
    /// The section is staged before the files it includes.
    pub fn process_section(
        &self,
        session: &mut BuildSession,
        source: &str,
        section_name: &str,
    ) -> ScriptBuilderResult<()> {
        let scan = scan_section(self.classifier, section_name, source)?;

        session.declarations.extend(scan.declarations);
        session.warnings.extend(scan.warnings);
        session.stage(section_name, scan.rewritten);

        for path in &scan.includes {
            self.load_section(session, path)?;
        }
        Ok(())
    }

    /// Load and process a file unless it was already included this session.
    ///
    /// Returns `false` for a repeat include.
    pub fn load_section(&self, session: &mut BuildSession, path: &str) -> ScriptBuilderResult<bool> {
        if !session.included.insert(path) {
            tracing::debug!(path, "skipping file that was already included");
            return Ok(false);
        }

        let bytes = self
            .loader
            .load(path)
            .map_err(|source| ScriptBuilderError::FileOpen {
                path: path.to_string(),
                source,
            })?;
        if bytes.is_empty() {
            return Err(ScriptBuilderError::FileRead {
                path: path.to_string(),
            });
        }

        let source = String::from_utf8(bytes).map_err(|source| ScriptBuilderError::Encoding {
            path: path.to_string(),
            source,
        })?;

        self.process_section(session, &source, path)?;
        Ok(true)
    }
}
