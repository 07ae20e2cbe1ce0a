//! Error types for the madlib CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for madlib operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum MadlibError {
    /// User provided invalid arguments or asked for something that doesn't exist.
    #[error("{0}")]
    UserError(String),

    /// A template failed to parse.
    #[error("Template parse failed: {0}")]
    Template(#[from] TemplateError),

    /// The story directory or a story file could not be created, written, or read.
    #[error("Story storage failed: {0}")]
    Storage(String),

    /// The interactive input stream failed.
    #[error("Input failed: {0}")]
    Input(String),
}

impl MadlibError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MadlibError::UserError(_) => exit_codes::USER_ERROR,
            MadlibError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            MadlibError::Storage(_) => exit_codes::STORAGE_FAILURE,
            MadlibError::Input(_) => exit_codes::INPUT_FAILURE,
        }
    }
}

/// Result type alias for madlib operations.
pub type Result<T> = std::result::Result<T, MadlibError>;
