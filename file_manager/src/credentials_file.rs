use crate::error::{ProfileError, Result};
use crate::ini_support::{read_ordered, write_ordered_atomic};
use ini::{Ini, Properties};
use std::path::{Path, PathBuf};

/// Name of the section AWS tooling reads as the active credential set.
pub const DEFAULT_PROFILE: &str = "default";

/// Explicit header for the format's top-level section. Keys written before any header land
/// in the same place, so neither is ever reported as a profile.
pub const GENERAL_SECTION: &str = "DEFAULT";

pub const ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
pub const SESSION_TOKEN: &str = "aws_session_token";

/// One credential set as stored in a section.
#[derive(Clone, Debug)]
pub struct AwsCredentials {
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub aws_session_token: Option<String>,
}

#[derive(Debug)]
pub struct CredentialsFile {
    path: PathBuf,
    document: Ini,
}

impl CredentialsFile {
    pub fn default_path(home_dir: &Path) -> PathBuf {
        home_dir.join(".aws").join("credentials")
    }

    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = read_ordered(&path)?;

        Ok(Self { path, document })
    }

    /// Writes the whole document back to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        write_ordered_atomic(&self.document, &self.path)
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.document.section(Some(section)).is_some()
    }

    /// Looks up a value, treating an absent section, an absent key and an empty value
    /// alike as missing.
    pub fn get_value(&self, section: &str, key: &str) -> Result<String> {
        let properties = self
            .document
            .section(Some(section))
            .ok_or_else(|| ProfileError::key_not_found(section, key))?;

        match properties.get(key) {
            None => Err(ProfileError::key_not_found(section, key)),
            Some(value) if value.trim().is_empty() => Err(ProfileError::key_empty(section, key)),
            Some(value) => Ok(value.to_owned()),
        }
    }

    pub fn set_value(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        let properties = self
            .document
            .section_mut(Some(section))
            .ok_or_else(|| ProfileError::section_not_found(section))?;

        properties.insert(key, value);

        Ok(())
    }

    pub fn remove_value(&mut self, section: &str, key: &str) -> Result<Option<String>> {
        let properties = self
            .document
            .section_mut(Some(section))
            .ok_or_else(|| ProfileError::section_not_found(section))?;

        Ok(properties.remove(key))
    }

    pub fn ensure_section(&mut self, section: &str) -> &mut Properties {
        self.document
            .entry(Some(section.to_owned()))
            .or_insert(Properties::new())
    }

    /// Every named profile, in the order the sections appear in the file.
    pub fn profile_names(&self) -> Vec<String> {
        self.document
            .sections()
            .flatten()
            .filter(|name| *name != GENERAL_SECTION && *name != DEFAULT_PROFILE)
            .map(str::to_owned)
            .collect()
    }

    /// Reads the credential set of a section; both keys must be present and non-empty.
    pub fn credentials(&self, section: &str) -> Result<AwsCredentials> {
        let aws_access_key_id = self.get_value(section, ACCESS_KEY_ID)?;
        let aws_secret_access_key = self.get_value(section, SECRET_ACCESS_KEY)?;
        let aws_session_token = match self.get_value(section, SESSION_TOKEN) {
            Ok(token) => Some(token),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };

        Ok(AwsCredentials {
            aws_access_key_id,
            aws_secret_access_key,
            aws_session_token,
        })
    }

    /// Overwrites the credential set of an existing section. A section without a session
    /// token in `credentials` loses any token it had.
    pub fn set_credentials(&mut self, section: &str, credentials: &AwsCredentials) -> Result<()> {
        self.set_value(section, ACCESS_KEY_ID, &credentials.aws_access_key_id)?;
        self.set_value(section, SECRET_ACCESS_KEY, &credentials.aws_secret_access_key)?;

        match &credentials.aws_session_token {
            Some(token) => self.set_value(section, SESSION_TOKEN, token)?,
            None => {
                let _ = self.remove_value(section, SESSION_TOKEN)?;
            }
        }

        Ok(())
    }

    /// Copies the credential set of `from` into `to`, creating `to` when needed.
    ///
    /// Nothing is modified unless `from` holds a complete credential set.
    pub fn copy_credentials(&mut self, from: &str, to: &str) -> Result<AwsCredentials> {
        let credentials = self.credentials(from)?;

        let _ = self.ensure_section(to);
        self.set_credentials(to, &credentials)?;

        Ok(credentials)
    }
}
