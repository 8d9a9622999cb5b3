use crate::span::Span;
use std::collections::VecDeque;
use std::fmt;

/// A single diagnostic message produced while assembling or building a module.
///
/// Diagnostics carry the message text, the section it refers to, and the
/// location inside that section.
///
/// # Examples
///
/// ```rust
/// use angelscript_core::{Diagnostic, DiagnosticKind};
///
/// let diagnostic = Diagnostic {
///     kind: DiagnosticKind::Error,
///     message: "Failed to open script file".to_string(),
///     section: Some("script.as".to_string()),
///     row: 10,
///     col: 5,
/// };
///
/// assert_eq!(diagnostic.to_string(), "script.as:10:5: error: Failed to open script file");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity level of this diagnostic
    pub kind: DiagnosticKind,
    /// The diagnostic message text
    pub message: String,
    /// The source file or section name where this diagnostic occurred, if available
    pub section: Option<String>,
    /// The line number where this diagnostic occurred (1-based, 0 when unknown)
    pub row: u32,
    /// The column number where this diagnostic occurred (1-based, 0 when unknown)
    pub col: u32,
}

impl Diagnostic {
    /// Creates a warning anchored at `span` inside `section`.
    pub fn warning(section: &str, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            message: message.into(),
            section: Some(section.to_string()),
            row: span.line,
            col: span.col,
        }
    }

    /// Creates an error that refers to a whole section rather than a position in it.
    pub fn section_error(section: &str, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            message: message.into(),
            section: Some(section.to_string()),
            row: 0,
            col: 0,
        }
    }
}

/// The severity level of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A problem that stops the module from being built.
    Error,

    /// Something that was tolerated but probably not what the author meant,
    /// such as an annotation that never closes.
    Warning,
}

/// A collection of diagnostic messages.
///
/// `Diagnostics` accumulates messages in the order they were reported and
/// tracks whether any of them is an error.
///
/// # Examples
///
/// ```rust
/// use angelscript_core::{Diagnostic, DiagnosticKind, Diagnostics};
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.add_diagnostic(Diagnostic {
///     kind: DiagnosticKind::Warning,
///     message: "Unterminated metadata".to_string(),
///     section: Some("main.as".to_string()),
///     row: 3,
///     col: 1,
/// });
///
/// assert_eq!(diagnostics.warning_count(), 1);
/// assert!(!diagnostics.has_errors());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    diagnostics: VecDeque<Diagnostic>,
    has_errors: bool,
}

impl Diagnostics {
    /// Creates a new, empty diagnostics collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a diagnostic to the collection.
    ///
    /// If the diagnostic is an error, this will set the internal error flag.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        if diagnostic.kind == DiagnosticKind::Error {
            self.has_errors = true;
        }
        self.diagnostics.push_back(diagnostic);
    }

    /// Returns `true` if the collection contains any error diagnostics.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Returns `true` if the collection contains no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Removes all diagnostics from the collection.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.has_errors = false;
    }

    /// Returns an iterator over all diagnostics in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Returns an iterator over only the error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Error)
    }

    /// Returns an iterator over only the warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Warning)
    }

    /// Returns the total number of diagnostics in the collection.
    pub fn count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns the number of error diagnostics in the collection.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Returns the number of warning diagnostics in the collection.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }
}

impl fmt::Display for Diagnostic {
    /// The format is: `section:row:col: kind: message` or `row:col: kind: message` if no section.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_str = match self.kind {
            DiagnosticKind::Error => "error",
            DiagnosticKind::Warning => "warning",
        };

        if let Some(section) = &self.section {
            write!(
                f,
                "{}:{}:{}: {}: {}",
                section, self.row, self.col, kind_str, self.message
            )
        } else {
            write!(f, "{}:{}: {}: {}", self.row, self.col, kind_str, self.message)
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diagnostic in iter {
            self.add_diagnostic(diagnostic);
        }
    }
}
