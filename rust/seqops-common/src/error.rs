use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// A key selector that cannot be resolved against the sequence elements.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidSelector {
                selector: selector.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn is_invalid_selector(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidSelector { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
