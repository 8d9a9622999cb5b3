use angelscript_core::{ReturnCode, ScriptError};
use std::string::FromUtf8Error;

/// Errors that can occur during script building
#[derive(Debug, thiserror::Error)]
pub enum ScriptBuilderError {
    #[error("Failed to open script file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load script file '{path}': no content was read")]
    FileRead { path: String },

    #[error("Script file '{path}' is not valid UTF-8")]
    Encoding {
        path: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Script compilation error: {0}")]
    Compilation(#[source] ScriptError),

    #[error("Engine rejected the request: {0}")]
    Engine(#[from] ScriptError),
}

pub type ScriptBuilderResult<T> = Result<T, ScriptBuilderError>;

impl ScriptBuilderError {
    /// The negative result code a C-style caller would have received.
    pub fn code(&self) -> i32 {
        match self {
            ScriptBuilderError::FileOpen { .. }
            | ScriptBuilderError::FileRead { .. }
            | ScriptBuilderError::Encoding { .. } => ReturnCode::Error.into(),
            ScriptBuilderError::Compilation(err) | ScriptBuilderError::Engine(err) => {
                err.code()
            }
        }
    }

    /// Whether the error came from reading script files rather than from the engine.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            ScriptBuilderError::FileOpen { .. }
                | ScriptBuilderError::FileRead { .. }
                | ScriptBuilderError::Encoding { .. }
        )
    }
}
