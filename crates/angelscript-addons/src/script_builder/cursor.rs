use angelscript_core::{TokenClass, TokenClassifier};
use std::ops::Range;

/// A classified token borrowed from the section being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'src> {
    pub class: TokenClass,
    pub start: usize,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Punctuation check on the first byte, the way brackets and braces are matched.
    #[inline]
    pub fn is_punct(&self, byte: u8) -> bool {
        self.class == TokenClass::Keyword && self.text.as_bytes().first() == Some(&byte)
    }
}

/// A cursor over a script section that asks a [`TokenClassifier`] for one
/// token at a time.
///
/// Provides peek/advance semantics. Token lengths reported by the classifier
/// are normalised so the cursor always moves forward: zero becomes one
/// character, lengths past the end are clamped, and lengths that stop inside
/// a UTF-8 sequence are widened to the next character boundary.
pub(crate) struct Cursor<'a, 'src, C: ?Sized> {
    classifier: &'a C,
    source: &'src str,
    pos: usize,
}

impl<'a, 'src, C: TokenClassifier + ?Sized> Cursor<'a, 'src, C> {
    pub fn new(classifier: &'a C, source: &'src str, pos: usize) -> Self {
        Self {
            classifier,
            source,
            pos: pos.min(source.len()),
        }
    }

    /// Current byte offset from start of source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.source.len());
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Classify the token at the cursor without consuming it.
    pub fn peek(&self) -> Option<Token<'src>> {
        if self.is_eof() {
            return None;
        }

        let rest = &self.source[self.pos..];
        let classified = self.classifier.classify(rest);

        let mut len = classified.len.clamp(1, rest.len());
        while !rest.is_char_boundary(len) {
            len += 1;
        }

        Some(Token {
            class: classified.class,
            start: self.pos,
            text: &rest[..len],
        })
    }

    /// Move past a token previously returned by [`peek`](Self::peek).
    #[inline]
    pub fn advance(&mut self, token: Token<'src>) {
        debug_assert_eq!(token.start, self.pos);
        self.pos = token.end();
    }

    /// Consume and return the token at the cursor.
    pub fn bump(&mut self) -> Option<Token<'src>> {
        let token = self.peek()?;
        self.advance(token);
        Some(token)
    }

    /// Consume the next token if it has the given class.
    pub fn eat(&mut self, class: TokenClass) -> Option<Token<'src>> {
        let token = self.peek().filter(|t| t.class == class)?;
        self.advance(token);
        Some(token)
    }

    /// Skip whitespace and comments.
    pub fn skip_trivia(&mut self) {
        while let Some(token) = self.peek() {
            if !token.class.is_trivia() {
                break;
            }
            self.advance(token);
        }
    }
}

/// Overwrite `range` of `buffer` with spaces, keeping line breaks so that
/// line numbers stay put.
pub(crate) fn blank(buffer: &mut [u8], range: Range<usize>) {
    let end = range.end.min(buffer.len());
    let start = range.start.min(end);
    for byte in &mut buffer[start..end] {
        if *byte != b'\n' {
            *byte = b' ';
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angelscript_core::ClassifiedToken;
    use angelscript_lexer::Tokenizer;

    /// Classifier that reports a fixed, possibly bogus, length.
    struct FixedLength(usize);

    impl TokenClassifier for FixedLength {
        fn classify(&self, _source: &str) -> ClassifiedToken {
            ClassifiedToken::new(TokenClass::Unknown, self.0)
        }
    }

    #[test]
    fn zero_length_tokens_still_advance() {
        let classifier = FixedLength(0);
        let mut cursor = Cursor::new(&classifier, "abc", 0);

        let token = cursor.bump().unwrap();
        assert_eq!(token.text, "a");
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn oversized_tokens_are_clamped() {
        let classifier = FixedLength(100);
        let mut cursor = Cursor::new(&classifier, "abc", 1);

        assert_eq!(cursor.bump().unwrap().text, "bc");
        assert!(cursor.is_eof());
        assert_eq!(cursor.bump(), None);
    }

    #[test]
    fn lengths_are_widened_to_char_boundaries() {
        let classifier = FixedLength(1);
        let mut cursor = Cursor::new(&classifier, "éa", 0);

        assert_eq!(cursor.bump().unwrap().text, "é");
        assert_eq!(cursor.bump().unwrap().text, "a");
    }

    #[test]
    fn skip_trivia_stops_at_code() {
        let tokenizer = Tokenizer::new();
        let mut cursor = Cursor::new(&tokenizer, "  // note\n /* x */ class", 0);
        cursor.skip_trivia();

        let token = cursor.peek().unwrap();
        assert_eq!(token.text, "class");
        assert_eq!(token.class, TokenClass::Keyword);
    }

    #[test]
    fn eat_only_consumes_matching_class() {
        let tokenizer = Tokenizer::new();
        let mut cursor = Cursor::new(&tokenizer, "include \"a.as\"", 0);

        assert!(cursor.eat(TokenClass::Whitespace).is_none());
        assert_eq!(cursor.eat(TokenClass::Identifier).unwrap().text, "include");
        assert!(cursor.eat(TokenClass::Whitespace).is_some());
        assert_eq!(cursor.peek().unwrap().class, TokenClass::Literal);
    }

    #[test]
    fn blank_keeps_newlines() {
        let mut buffer = b"[a\nb]".to_vec();
        blank(&mut buffer, 0..5);
        assert_eq!(buffer, b"  \n  ");
    }
}
