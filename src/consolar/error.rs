use consolar_styles::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsolarError {
    #[error("The {0} command is not supported.")]
    UnsupportedCommand(String),

    #[error("Missing required arguments.")]
    MissingArguments(Vec<String>),

    #[error("Missing required options.")]
    MissingOptions(Vec<String>),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure raised by a command handler; the message is shown as is.
    #[error("{0}")]
    Command(String),
}

impl ConsolarError {
    pub fn command(message: impl Into<String>) -> Self {
        ConsolarError::Command(message.into())
    }

    /// Names reported by a validation failure, empty for other errors.
    pub fn missing(&self) -> &[String] {
        match self {
            ConsolarError::MissingArguments(names) | ConsolarError::MissingOptions(names) => names,
            _ => &[],
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConsolarError::MissingArguments(_) | ConsolarError::MissingOptions(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ConsolarError>;
