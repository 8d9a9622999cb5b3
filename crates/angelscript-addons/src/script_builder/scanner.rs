//! Section scanner.
//!
//! Walks one section token by token, pulls `[...]` annotations and
//! `#include "..."` directives out of it, and produces a rewritten copy of the
//! same length in which both are replaced by spaces. Statement blocks are
//! skipped wholesale; annotations and includes only count at declaration scope.

use angelscript_core::{Diagnostic, Span, TokenClass, TokenClassifier};

use super::annotation::extract_annotation;
use super::cursor::{Cursor, Token, blank};
use super::declaration::classify_declaration;
use super::error::{ScriptBuilderError, ScriptBuilderResult};
use super::metadata::PendingDeclaration;

/// Everything learned from scanning one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionScan {
    /// The section with annotations and include directives blanked out.
    /// Always the same byte length as the input.
    pub rewritten: String,
    pub declarations: Vec<PendingDeclaration>,
    /// Include paths in the order they appear.
    pub includes: Vec<String>,
    /// Annotations that could not be attached to anything.
    pub warnings: Vec<Diagnostic>,
}

/// Scan a single section. Includes are reported, not followed.
///
/// # Example
///
/// ```
/// use angelscript_addons::script_builder::{DeclarationKind, scan_section};
/// use angelscript_lexer::Tokenizer;
///
/// let scan = scan_section(&Tokenizer::new(), "main", "[Tag] class Foo {}").unwrap();
///
/// assert_eq!(scan.rewritten, "      class Foo {}");
/// assert_eq!(scan.declarations[0].signature, "Foo");
/// assert_eq!(scan.declarations[0].kind, DeclarationKind::Type);
/// ```
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn scan_section<C: TokenClassifier + ?Sized>(
    classifier: &C,
    section_name: &str,
    source: &str,
) -> ScriptBuilderResult<SectionScan> {
    let scanner = Scanner {
        classifier,
        cursor: Cursor::new(classifier, source, 0),
        source,
        section_name,
        output: source.as_bytes().to_vec(),
        declarations: Vec::new(),
        includes: Vec::new(),
        warnings: Vec::new(),
    };
    let scan = scanner.run()?;

    tracing::debug!(
        section = section_name,
        bytes = source.len(),
        declarations = scan.declarations.len(),
        includes = scan.includes.len(),
        "scanned section"
    );

    Ok(scan)
}

/// Skip the statement block whose `{` sits at `open`.
///
/// Returns the offset just past the matching `}`, or the end of the text if
/// the braces never balance.
pub(crate) fn skip_block<C: TokenClassifier + ?Sized>(
    classifier: &C,
    source: &str,
    open: usize,
) -> usize {
    let mut cursor = Cursor::new(classifier, source, open + 1);
    let mut depth = 1usize;

    while depth > 0 {
        let Some(token) = cursor.bump() else {
            break;
        };
        if token.is_punct(b'{') {
            depth += 1;
        } else if token.is_punct(b'}') {
            depth -= 1;
        }
    }

    cursor.pos()
}

/// Try to read `include "path"` after a `#`.
///
/// On success the cursor sits after the closing quote. On failure it sits
/// after whatever tokens were consumed before the mismatch.
fn match_include<C: TokenClassifier + ?Sized>(cursor: &mut Cursor<'_, '_, C>) -> Option<String> {
    cursor.eat(TokenClass::Whitespace);
    cursor
        .eat(TokenClass::Identifier)
        .filter(|name| name.text == "include")?;
    cursor.eat(TokenClass::Whitespace);

    let literal = cursor.peek()?;
    let text = literal.text;
    if literal.class != TokenClass::Literal
        || text.len() <= 2
        || !text.starts_with('"')
        || !text.ends_with('"')
    {
        return None;
    }

    cursor.advance(literal);
    Some(text[1..text.len() - 1].to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    ScanningTopLevel,
    InAnnotation,
    /// A closed annotation is waiting for the declaration it belongs to.
    InDeclaration {
        metadata: String,
        annotation_start: usize,
    },
    InBlock,
}

struct Scanner<'a, 'src, C: ?Sized> {
    classifier: &'a C,
    cursor: Cursor<'a, 'src, C>,
    source: &'src str,
    section_name: &'a str,
    output: Vec<u8>,
    declarations: Vec<PendingDeclaration>,
    includes: Vec<String>,
    warnings: Vec<Diagnostic>,
}

impl<'a, 'src, C: TokenClassifier + ?Sized> Scanner<'a, 'src, C> {
    fn run(mut self) -> ScriptBuilderResult<SectionScan> {
        let mut state = ScanState::ScanningTopLevel;

        loop {
            state = match state {
                ScanState::ScanningTopLevel => match self.cursor.peek() {
                    Some(token) => self.top_level(token),
                    None => break,
                },
                ScanState::InAnnotation => self.annotation(),
                ScanState::InDeclaration {
                    metadata,
                    annotation_start,
                } => self.declaration(metadata, annotation_start),
                ScanState::InBlock => self.block(),
            };
        }

        debug_assert_eq!(self.output.len(), self.source.len());
        let rewritten =
            String::from_utf8(self.output).map_err(|source| ScriptBuilderError::Encoding {
                path: self.section_name.to_string(),
                source,
            })?;

        Ok(SectionScan {
            rewritten,
            declarations: self.declarations,
            includes: self.includes,
            warnings: self.warnings,
        })
    }

    fn top_level(&mut self, token: Token<'src>) -> ScanState {
        if matches!(token.class, TokenClass::Keyword | TokenClass::Unknown) {
            match token.text.as_bytes()[0] {
                b'[' => return ScanState::InAnnotation,
                b'{' => return ScanState::InBlock,
                b'#' => {
                    self.include_directive(token);
                    return ScanState::ScanningTopLevel;
                }
                _ => {}
            }
        }

        self.cursor.advance(token);
        ScanState::ScanningTopLevel
    }

    fn annotation(&mut self) -> ScanState {
        let start = self.cursor.pos();
        let annotation = extract_annotation(self.classifier, self.source, &mut self.output, start);
        self.cursor.set_pos(annotation.end);

        if annotation.closed {
            ScanState::InDeclaration {
                metadata: annotation.metadata,
                annotation_start: start,
            }
        } else {
            self.warn(start, 1, "metadata annotation is never closed");
            ScanState::ScanningTopLevel
        }
    }

    fn declaration(&mut self, metadata: String, annotation_start: usize) -> ScanState {
        match classify_declaration(self.classifier, self.source, self.cursor.pos()) {
            Some(decl) => {
                self.declarations.push(PendingDeclaration {
                    metadata,
                    signature: decl.signature,
                    kind: decl.kind,
                });
                self.cursor.set_pos(decl.end);
            }
            None => {
                let len = self.cursor.pos() - annotation_start;
                self.warn(
                    annotation_start,
                    len,
                    "metadata annotation is not followed by a declaration",
                );
            }
        }
        ScanState::ScanningTopLevel
    }

    fn block(&mut self) -> ScanState {
        let end = skip_block(self.classifier, self.source, self.cursor.pos());
        self.cursor.set_pos(end);
        ScanState::ScanningTopLevel
    }

    fn include_directive(&mut self, hash: Token<'src>) {
        self.cursor.advance(hash);

        if let Some(path) = match_include(&mut self.cursor) {
            blank(&mut self.output, hash.start..self.cursor.pos());
            self.includes.push(path);
        }
    }

    fn warn(&mut self, offset: usize, len: usize, message: &str) {
        let span = Span::locate(self.source, offset, len);
        tracing::warn!(section = self.section_name, %span, "{message}");
        self.warnings
            .push(Diagnostic::warning(self.section_name, span, message));
    }
}
