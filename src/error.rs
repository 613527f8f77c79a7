//! Crate-wide error type.
//!
//! Every failure carries the process exit code the binary should use:
//!
//! - `2`: unusable input or artifact (missing, malformed, failed validation, bad form values)
//! - `3`: the artifact asks for a feature the vectorizer does not produce
//! - `4`: internal invariant violation or terminal failure

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Artifact or caller input cannot be used.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// Artifact and vectorizer disagree on the feature schema.
    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
