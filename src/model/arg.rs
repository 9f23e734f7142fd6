use clap::Parser;
use std::path::PathBuf;

/// Create a cloud VPC network
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Project that will own the network
    pub project: String,

    /// Name of the network to create
    pub name: String,

    /// Service account credentials JSON path
    #[arg(long, env = "MKNET_CREDS", default_value = "creds.json")]
    pub creds: PathBuf,
}
