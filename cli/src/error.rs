use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Reasons a file could not be turned into an array declaration.
#[derive(Debug)]
pub enum ConvertError {
    /// The path does not name an existing file.
    NotFound { path: PathBuf },
    /// Any other failure while reading the input or writing the result.
    Io(std::io::Error),
}

impl ConvertError {
    pub fn from_open_error(path: &Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => ConvertError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConvertError::Io(error),
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::NotFound { path } => write!(f, "File not found: {}", path.display()),
            ConvertError::Io(error) => write!(f, "An error occurred: {error}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::NotFound { .. } => None,
            ConvertError::Io(error) => Some(error),
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(error: std::io::Error) -> Self {
        ConvertError::Io(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn missing_file_message() {
        let err = ConvertError::from_open_error(
            Path::new("/no/such/file"),
            io::ErrorKind::NotFound.into(),
        );
        assert_eq!(err.to_string(), "File not found: /no/such/file");
        assert!(err.source().is_none());
    }

    #[test]
    fn other_errors_carry_the_cause() {
        let err = ConvertError::from_open_error(
            Path::new("locked.bin"),
            io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        );
        assert!(matches!(err, ConvertError::Io(_)));
        assert_eq!(err.to_string(), "An error occurred: Permission denied");
        assert!(err.source().is_some());
    }
}
