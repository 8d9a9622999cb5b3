//! Enumerations shared between the script builder and the engine it drives.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Engine return codes.
///
/// Values follow AngelScript's numbering so codes coming back from a real
/// engine map one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum ReturnCode {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error occurred.
    Error = -1,
    /// Invalid argument provided to function.
    InvalidArg = -5,
    /// Function not found.
    NoFunction = -6,
    /// Invalid declaration syntax.
    InvalidDeclaration = -10,
    /// Module not found.
    NoModule = -15,
    /// Global variable not found.
    NoGlobalVar = -16,
    /// A build is already running on the module.
    BuildInProgress = -25,
    /// Global variable initialisation failed after the build.
    InitGlobalVarsFailed = -26,
    /// The engine ran out of memory.
    OutOfMemory = -27,
    /// The module is referenced by a running context.
    ModuleIsInUse = -28,
}

/// Lexical class of a token, as reported by a [`TokenClassifier`](crate::TokenClassifier).
///
/// The discriminants match AngelScript's `asETokenClass`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum TokenClass {
    /// Anything the classifier does not recognise.
    Unknown = 0,
    /// Reserved words and punctuation such as `class`, `{`, `[` or `=`.
    Keyword = 1,
    /// Numeric, string and character literals.
    Literal = 2,
    /// Names that are not reserved words.
    Identifier = 3,
    /// Line and block comments.
    Comment = 4,
    /// Spaces, tabs and line breaks.
    Whitespace = 5,
}

impl TokenClass {
    /// Whitespace and comments carry no meaning for declaration matching.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenClass::Whitespace | TokenClass::Comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_code_round_trips_known_values() {
        assert_eq!(ReturnCode::try_from(-10), Ok(ReturnCode::InvalidDeclaration));
        assert_eq!(i32::from(ReturnCode::ModuleIsInUse), -28);
    }

    #[test]
    fn return_code_rejects_unknown_values() {
        assert!(ReturnCode::try_from(-999).is_err());
    }

    #[test]
    fn token_class_trivia() {
        assert!(TokenClass::Whitespace.is_trivia());
        assert!(TokenClass::Comment.is_trivia());
        assert!(!TokenClass::Keyword.is_trivia());
        assert_eq!(TokenClass::try_from(3u8), Ok(TokenClass::Identifier));
    }
}
