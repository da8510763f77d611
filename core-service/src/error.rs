use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Plugin initialization failed: {0}")]
    InitializationFailed(String),

    /// A method call argument is missing or has the wrong type.
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },

    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),

    #[error("Library error: {0}")]
    Library(#[from] core_library::LibraryError),
}

impl CoreError {
    pub(crate) fn invalid_argument(argument: &str, message: impl Into<String>) -> Self {
        CoreError::InvalidArgument {
            argument: argument.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
