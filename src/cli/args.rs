use std::path::PathBuf;

use clap::Parser;

use tfadopt::AdoptError;
use tfadopt::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The Project ID of the Google Cloud project that owns the disks
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project: String,

    /// Emit a terraform.tfstate snapshot instead of resource declarations
    #[arg(long)]
    pub tfstate: bool,

    /// Print a table of adopted disks to stderr
    #[arg(long)]
    pub summary: bool,

    /// Write the generated document to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output of `gcloud compute disks list`; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,
}

impl Cli {
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_tfstate_flag(self.tfstate)
    }

    pub fn validate(&self) -> Result<(), AdoptError> {
        if self.project.trim().is_empty() {
            return Err(AdoptError::Config("project must not be empty".to_string()));
        }
        Ok(())
    }
}
