use anyhow::Result;
use file_manager::credentials_file::{ACCESS_KEY_ID, DEFAULT_PROFILE};
use file_manager::CredentialsFile;
use std::io::Write;
use tracing::warn;

/// Named profiles paired with their access key id, in file order.
///
/// Profiles whose key cannot be read are logged and left out.
pub fn readable_profiles(credentials: &CredentialsFile) -> Vec<(String, String)> {
    credentials
        .profile_names()
        .into_iter()
        .filter_map(
            |profile_name| match credentials.get_value(&profile_name, ACCESS_KEY_ID) {
                Ok(key) => Some((profile_name, key)),
                Err(e) => {
                    warn!("error reading profile {}: {}", profile_name, e);
                    None
                }
            },
        )
        .collect()
}

pub fn list_profiles<W: Write>(
    credentials: &CredentialsFile,
    names_only: bool,
    out: &mut W,
) -> Result<()> {
    let default_key = credentials.get_value(DEFAULT_PROFILE, ACCESS_KEY_ID)?;

    for (profile_name, key) in readable_profiles(credentials) {
        if names_only {
            writeln!(out, "{}", profile_name)?;
        } else if key == default_key {
            writeln!(out, "* {}", profile_name)?;
        } else {
            writeln!(out, "  {}", profile_name)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn load(contents: &str) -> (TempDir, CredentialsFile) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials");
        fs::write(&path, contents).unwrap();
        let credentials = CredentialsFile::load(&path).unwrap();
        (dir, credentials)
    }

    fn listing(credentials: &CredentialsFile, names_only: bool) -> String {
        let mut out = Vec::new();
        list_profiles(credentials, names_only, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    const SWITCHED: &str = "\
[default]
aws_access_key_id = A2
aws_secret_access_key = S2

[work]
aws_access_key_id = A2
aws_secret_access_key = S2

[profile1]
aws_access_key_id = A1
aws_secret_access_key = S1
";

    #[test]
    fn marks_profile_matching_default() {
        let (_dir, credentials) = load(SWITCHED);

        assert_eq!(listing(&credentials, false), "* work\n  profile1\n");
    }

    #[test]
    fn quiet_listing_prints_bare_names() {
        let (_dir, credentials) = load(SWITCHED);

        assert_eq!(listing(&credentials, true), "work\nprofile1\n");
    }

    #[test]
    fn unreadable_profiles_are_skipped() {
        let (_dir, credentials) = load(
            "\
[default]
aws_access_key_id = A1

[empty]
aws_access_key_id =

[personal]
aws_access_key_id = A1

[secret-only]
aws_secret_access_key = S9
",
        );

        assert_eq!(listing(&credentials, false), "* personal\n");
    }

    #[test]
    fn missing_default_fails_listing() {
        let (_dir, credentials) = load(
            "\
[work]
aws_access_key_id = A2
",
        );

        let mut out = Vec::new();
        let err = list_profiles(&credentials, false, &mut out).unwrap_err();

        assert!(err.to_string().contains("aws_access_key_id not found"));
        assert!(out.is_empty());
    }
}
