use std::path::PathBuf;

pub type Result<T, E = ProfileError> = std::result::Result<T, E>;

/// Errors raised while reading, editing or writing the AWS credentials file
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("unable to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed credentials file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("{0}")]
    NotFound(String),
}

impl ProfileError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProfileError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn section_not_found(section: &str) -> Self {
        ProfileError::NotFound(format!("section \"{}\" not found", section))
    }

    pub fn key_not_found(section: &str, key: &str) -> Self {
        ProfileError::NotFound(format!("{} not found in section \"{}\"", key, section))
    }

    pub fn key_empty(section: &str, key: &str) -> Self {
        ProfileError::NotFound(format!("{} empty in section \"{}\"", key, section))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProfileError::NotFound(_))
    }
}
