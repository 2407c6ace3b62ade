use crate::list::readable_profiles;
use anyhow::Result;
use file_manager::credentials_file::{ACCESS_KEY_ID, DEFAULT_PROFILE};
use file_manager::CredentialsFile;
use std::io::Write;
use tracing::{debug, info};

const ARCHIVE_PREFIX: &str = "profile";

#[derive(Debug, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub profile_name: String,
    pub archived_as: Option<String>,
}

/// Makes `profile_name` the default profile and writes the file back.
///
/// The current default credentials are first saved under a new `profileN` section unless
/// some named profile already holds the same access key id. Both keys of the target are
/// read before anything is changed, so a failed switch leaves the file as it was.
pub fn switch_profile<W: Write>(
    credentials: &mut CredentialsFile,
    profile_name: &str,
    out: &mut W,
) -> Result<SwitchOutcome> {
    let target = credentials.credentials(profile_name)?;

    let archived_as = archive_default(credentials)?;
    credentials.set_credentials(DEFAULT_PROFILE, &target)?;
    credentials.save()?;

    if let Some(archive_name) = &archived_as {
        writeln!(out, "saved default credentials as profile {}", archive_name)?;
    }
    writeln!(out, "switched to profile {}", profile_name)?;

    info!("Default credentials now taken from profile {}", profile_name);

    Ok(SwitchOutcome {
        profile_name: profile_name.to_owned(),
        archived_as,
    })
}

/// Only the access key id decides whether the default is already saved; the secret is
/// needed only when a new `profileN` copy has to be made.
fn archive_default(credentials: &mut CredentialsFile) -> Result<Option<String>> {
    let default_key = credentials.get_value(DEFAULT_PROFILE, ACCESS_KEY_ID)?;

    let saved_in = readable_profiles(credentials)
        .into_iter()
        .find(|(_, key)| *key == default_key);

    if let Some((profile_name, _)) = saved_in {
        debug!("Default credentials already saved as profile {}", profile_name);
        return Ok(None);
    }

    let archive_name = next_archive_name(credentials);
    let _ = credentials.copy_credentials(DEFAULT_PROFILE, &archive_name)?;
    debug!("Archived default credentials as profile {}", archive_name);

    Ok(Some(archive_name))
}

fn next_archive_name(credentials: &CredentialsFile) -> String {
    let mut index = 1;
    loop {
        let candidate = format!("{}{}", ARCHIVE_PREFIX, index);
        if !credentials.has_section(&candidate) {
            return candidate;
        }
        index += 1;
    }
}
