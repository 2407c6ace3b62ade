use anyhow::{Context, Result};
use clap::Parser;
use file_manager::CredentialsFile;
use shared::args::Args;
use shared::settings::{home_dir, Action, Settings};
use tracing_subscriber::EnvFilter;

mod list;
mod switch;

/// Logs go to stderr so stdout only carries the listing and switch messages
fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(debug)
        .with_line_number(debug)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    let home_dir = home_dir()?;
    let args = Args::parse();
    let settings = Settings::new(args, CredentialsFile::default_path(&home_dir));

    init_tracing(settings.debug);

    run(&settings)
}

fn run(settings: &Settings) -> Result<()> {
    let mut credentials = CredentialsFile::load(&settings.credentials_path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &settings.action {
        Action::List => list::list_profiles(&credentials, settings.quiet, &mut out)
            .context("Unable to list profiles")?,
        Action::Switch(profile_name) => {
            let _ = switch::switch_profile(&mut credentials, profile_name, &mut out)
                .with_context(|| format!("Unable to switch to profile '{}'", profile_name))?;
        }
    }

    Ok(())
}
