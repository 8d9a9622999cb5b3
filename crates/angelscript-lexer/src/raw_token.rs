//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output. It only
//! distinguishes what the six token classes need; names are split into
//! reserved words and identifiers afterwards by [`is_reserved_word`].

use angelscript_core::TokenClass;
use logos::{Lexer, Logos};

/// Raw token from logos.
///
/// Nothing is skipped: whitespace and comments are tokens too, because the
/// script builder must account for every byte of the section.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("\u{FEFF}")]
    ByteOrderMark,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Name,

    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[fF]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fF]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[bB][01_]+")]
    #[regex(r"0[oO][0-7_]+")]
    #[regex(r"0[dD][0-9_]+")]
    Number,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    String,

    #[token("\"\"\"", heredoc)]
    Heredoc,

    #[token("{")]
    #[token("}")]
    #[token("(")]
    #[token(")")]
    #[token("[")]
    #[token("]")]
    #[token(";")]
    #[token(",")]
    #[token(".")]
    #[token(":")]
    #[token("::")]
    #[token("?")]
    #[token("@")]
    #[token("~")]
    #[token("!")]
    #[token("=")]
    #[token("==")]
    #[token("!=")]
    #[token("<")]
    #[token("<=")]
    #[token(">")]
    #[token(">=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("**")]
    #[token("++")]
    #[token("--")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("**=")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("&&")]
    #[token("||")]
    #[token("^^")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("<<")]
    #[token(">>")]
    #[token(">>>")]
    #[token("<<=")]
    #[token(">>=")]
    #[token(">>>=")]
    Punct,

    #[token("#")]
    Hash,
}

impl RawToken {
    /// Map the raw token onto the classes the script builder works with.
    pub(crate) fn class(self, lexeme: &str) -> TokenClass {
        match self {
            RawToken::Whitespace | RawToken::ByteOrderMark => TokenClass::Whitespace,
            RawToken::LineComment | RawToken::BlockComment => TokenClass::Comment,
            RawToken::Name if is_reserved_word(lexeme) => TokenClass::Keyword,
            RawToken::Name => TokenClass::Identifier,
            RawToken::Number | RawToken::String | RawToken::Heredoc => TokenClass::Literal,
            RawToken::Punct => TokenClass::Keyword,
            RawToken::Hash => TokenClass::Unknown,
        }
    }
}

/// Consume a block comment body. An unterminated comment runs to the end of input.
fn block_comment(lex: &mut Lexer<RawToken>) -> bool {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
    true
}

/// Consume a heredoc body up to and including the closing `"""`.
fn heredoc(lex: &mut Lexer<RawToken>) -> bool {
    let rest = lex.remainder();
    match rest.find("\"\"\"") {
        Some(end) => {
            lex.bump(end + 3);
            true
        }
        None => false,
    }
}

/// Words the engine treats as keywords rather than identifiers.
pub fn is_reserved_word(word: &str) -> bool {
    matches!(
        word,
        // Types
        "void"
            | "bool"
            | "int"
            | "int8"
            | "int16"
            | "int32"
            | "int64"
            | "uint"
            | "uint8"
            | "uint16"
            | "uint32"
            | "uint64"
            | "float"
            | "double"
            | "auto"
            // Values
            | "true"
            | "false"
            | "null"
            // Control flow
            | "if"
            | "else"
            | "for"
            | "while"
            | "do"
            | "switch"
            | "case"
            | "default"
            | "break"
            | "continue"
            | "return"
            | "try"
            | "catch"
            // Declarations
            | "class"
            | "interface"
            | "enum"
            | "funcdef"
            | "namespace"
            | "mixin"
            | "typedef"
            | "import"
            | "const"
            | "private"
            | "protected"
            // Word operators
            | "and"
            | "or"
            | "xor"
            | "not"
            | "is"
            | "in"
            | "out"
            | "inout"
            | "cast"
    )
}
