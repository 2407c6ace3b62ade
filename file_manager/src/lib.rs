pub mod credentials_file;
pub mod error;
pub mod ini_support;

pub use credentials_file::{AwsCredentials, CredentialsFile};
pub use error::ProfileError;
