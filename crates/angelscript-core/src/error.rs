use crate::enums::ReturnCode;
use thiserror::Error;

pub type ScriptResult<T> = Result<T, ScriptError>;

/// Failure reported by the engine the script builder drives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("AngelScript error: {0:?}")]
    Engine(ReturnCode),

    #[error("Unknown error code: {0}")]
    Unknown(i32),
}

impl ScriptError {
    /// Turn a C-style engine return value into a result.
    ///
    /// Non-negative values are success.
    pub fn from_code(code: i32) -> ScriptResult<()> {
        if code >= 0 {
            return Ok(());
        }

        match ReturnCode::try_from(code) {
            Ok(ReturnCode::Success) => Ok(()),
            Ok(return_code) => Err(ScriptError::Engine(return_code)),
            Err(_) => Err(ScriptError::Unknown(code)),
        }
    }

    /// The raw negative code, for callers that speak the C convention.
    pub fn code(&self) -> i32 {
        match self {
            ScriptError::Engine(return_code) => (*return_code).into(),
            ScriptError::Unknown(code) => *code,
        }
    }
}

impl From<ReturnCode> for ScriptError {
    fn from(return_code: ReturnCode) -> Self {
        ScriptError::Engine(return_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_codes_are_success() {
        assert_eq!(ScriptError::from_code(0), Ok(()));
        assert_eq!(ScriptError::from_code(7), Ok(()));
    }

    #[test]
    fn known_negative_codes_map_to_return_code() {
        assert_eq!(
            ScriptError::from_code(-1),
            Err(ScriptError::Engine(ReturnCode::Error))
        );
    }

    #[test]
    fn unknown_negative_codes_are_preserved() {
        let err = ScriptError::from_code(-4242).unwrap_err();
        assert_eq!(err, ScriptError::Unknown(-4242));
        assert_eq!(err.code(), -4242);
    }
}
