use crate::args::Args;
use anyhow::{bail, Result};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    List,
    Switch(String),
}

/// Everything a run needs, fixed once the command line has been read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub credentials_path: PathBuf,
    pub quiet: bool,
    pub debug: bool,
    pub action: Action,
}

impl Settings {
    pub fn new(args: Args, default_credentials_path: PathBuf) -> Self {
        let action = match args.profile {
            Some(profile) => Action::Switch(profile),
            None => Action::List,
        };

        Self {
            credentials_path: args.credentials.unwrap_or(default_credentials_path),
            quiet: args.quiet,
            debug: args.debug,
            action,
        }
    }
}

pub fn home_dir() -> Result<PathBuf> {
    home_dir_from(std::env::var_os("HOME"))
}

pub fn home_dir_from(value: Option<OsString>) -> Result<PathBuf> {
    match value {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => bail!("$HOME not set"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn settings(argv: &[&str]) -> Settings {
        let args = Args::try_parse_from(argv).unwrap();
        Settings::new(args, PathBuf::from("/home/user/.aws/credentials"))
    }

    #[test]
    fn no_profile_lists() {
        let settings = settings(&["awsp", "--credentials", "/tmp/creds"]);

        assert_eq!(settings.action, Action::List);
        assert_eq!(settings.credentials_path, PathBuf::from("/tmp/creds"));
        assert!(!settings.quiet);
    }

    #[test]
    fn profile_argument_switches() {
        let settings = settings(&["awsp", "-q", "--credentials", "/tmp/creds", "work"]);

        assert_eq!(settings.action, Action::Switch("work".to_string()));
        assert!(settings.quiet);
    }

    #[test]
    fn home_must_be_set() {
        assert!(home_dir_from(None).is_err());
        assert!(home_dir_from(Some(OsString::new())).is_err());
        assert_eq!(
            home_dir_from(Some(OsString::from("/home/user"))).unwrap(),
            PathBuf::from("/home/user")
        );
    }
}
