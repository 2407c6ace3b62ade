use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "awsp", author, version, about, long_about = None)]
pub struct Args {
    /// The profile to make the default, lists the profiles when omitted
    pub profile: Option<String>,

    /// Path to the AWS credentials file, defaults to ~/.aws/credentials
    #[arg(long, env = "AWS_SHARED_CREDENTIALS_FILE")]
    pub credentials: Option<PathBuf>,

    /// Only display profile names
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Enables verbose logging to the console
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}
