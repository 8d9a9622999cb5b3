//! AngelScript token classifier crate.
//!
//! Provides [`Tokenizer`], a [`TokenClassifier`](angelscript_core::TokenClassifier)
//! for AngelScript source built on `logos`. Engines that have their own lexer
//! can keep using it; this one exists for engines that don't, and for tests.
//!
//! # Example
//!
//! ```
//! use angelscript_core::TokenClass;
//! use angelscript_lexer::Tokenizer;
//!
//! let classes: Vec<TokenClass> = Tokenizer::new()
//!     .tokens("int x;")
//!     .map(|(class, _)| class)
//!     .collect();
//!
//! assert_eq!(
//!     classes,
//!     [TokenClass::Keyword, TokenClass::Whitespace, TokenClass::Identifier, TokenClass::Keyword]
//! );
//! ```

mod raw_token;
mod tokenizer;

pub use raw_token::is_reserved_word;
pub use tokenizer::{Tokenizer, Tokens};
