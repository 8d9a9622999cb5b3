//! Token classification for AngelScript source.
//!
//! [`Tokenizer`] answers the one question the script builder asks of a lexer:
//! what class is the token at the start of this text, and how long is it.

use angelscript_core::{ClassifiedToken, TokenClass, TokenClassifier};
use logos::Logos;

use crate::raw_token::RawToken;

/// Logos-backed AngelScript token classifier.
///
/// Stateless; a single instance can be shared freely.
///
/// # Example
///
/// ```
/// use angelscript_core::{TokenClass, TokenClassifier};
/// use angelscript_lexer::Tokenizer;
///
/// let token = Tokenizer::new().classify("class Foo {}");
/// assert_eq!(token.class, TokenClass::Keyword);
/// assert_eq!(token.len, 5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split `source` into `(class, lexeme)` pairs covering every byte.
    pub fn tokens<'src>(&self, source: &'src str) -> Tokens<'src> {
        Tokens {
            lexer: RawToken::lexer(source),
        }
    }
}

impl TokenClassifier for Tokenizer {
    fn classify(&self, source: &str) -> ClassifiedToken {
        let mut lexer = RawToken::lexer(source);
        let class = match lexer.next() {
            Some(Ok(raw)) => raw.class(lexer.slice()),
            Some(Err(())) => TokenClass::Unknown,
            None => return ClassifiedToken::new(TokenClass::Unknown, 0),
        };
        ClassifiedToken::new(class, lexer.span().end)
    }
}

/// Iterator returned by [`Tokenizer::tokens`].
pub struct Tokens<'src> {
    lexer: logos::Lexer<'src, RawToken>,
}

impl<'src> Iterator for Tokens<'src> {
    type Item = (TokenClass, &'src str);

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.lexer.next()?;
        let lexeme = self.lexer.slice();
        let class = match raw {
            Ok(raw) => raw.class(lexeme),
            Err(()) => TokenClass::Unknown,
        };
        Some((class, lexeme))
    }
}
