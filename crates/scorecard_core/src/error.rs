use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl ScorecardError {
    /// Caller misuse that should be surfaced to the user rather than retried.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ScorecardError::InvalidArgument(_) | ScorecardError::Validation(_))
    }
}

impl From<serde_json::Error> for ScorecardError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ScorecardError::Deserialization(err.to_string())
        } else {
            ScorecardError::Serialization(err.to_string())
        }
    }
}

impl From<serde_yaml::Error> for ScorecardError {
    fn from(err: serde_yaml::Error) -> Self {
        ScorecardError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ScorecardError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{}: {}", field, msg),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        messages.sort();
        ScorecardError::Validation(messages.join("; "))
    }
}

pub type Result<T> = std::result::Result<T, ScorecardError>;
