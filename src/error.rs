use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColumnaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid column count: {0}. Must be greater than zero")]
    InvalidColumnCount(usize),

    #[error("Invalid key: key cannot be empty")]
    EmptyKey,

    #[error("Invalid key: value {value} must be between 0 and {max}")]
    KeyValueOutOfRange { value: usize, max: usize },

    #[error("Invalid key: duplicate value {0}")]
    DuplicateKeyValue(usize),

    #[error("Input text cannot be empty")]
    EmptyInput,

    #[error("Invalid key format: {0}")]
    KeyParse(String),

    #[error("Invalid key file: {0}")]
    KeyFile(String),
}

impl ColumnaError {
    /// Short user-facing label for the error, shown ahead of the detail
    /// message when the binary reports a failure.
    pub fn category(&self) -> &'static str {
        match self {
            ColumnaError::Io(_) => "File error",
            ColumnaError::EmptyInput => "Input error",
            ColumnaError::InvalidColumnCount(_)
            | ColumnaError::EmptyKey
            | ColumnaError::KeyValueOutOfRange { .. }
            | ColumnaError::DuplicateKeyValue(_)
            | ColumnaError::KeyParse(_)
            | ColumnaError::KeyFile(_) => "Key error",
        }
    }
}

pub type Result<T> = std::result::Result<T, ColumnaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_carry_detail() {
        let err = ColumnaError::KeyValueOutOfRange { value: 7, max: 2 };
        assert_eq!(
            format!("{}", err),
            "Invalid key: value 7 must be between 0 and 2"
        );

        let err = ColumnaError::DuplicateKeyValue(1);
        assert_eq!(format!("{}", err), "Invalid key: duplicate value 1");
    }

    #[test]
    fn categories_group_related_failures() {
        assert_eq!(ColumnaError::EmptyKey.category(), "Key error");
        assert_eq!(
            ColumnaError::KeyParse("bad token".into()).category(),
            "Key error"
        );
        assert_eq!(ColumnaError::EmptyInput.category(), "Input error");
        let io = ColumnaError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io.category(), "File error");
    }
}
