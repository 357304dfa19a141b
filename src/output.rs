use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::AdoptError;
use crate::resource::Resource;
use crate::terraform::config::render_config;
use crate::terraform::state::{index_by_full_name, wrap_snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// HCL `resource` blocks.
    #[default]
    Config,
    /// A v1 `terraform.tfstate` snapshot.
    State,
}

impl OutputFormat {
    pub fn from_tfstate_flag(tfstate: bool) -> Self {
        if tfstate { Self::State } else { Self::Config }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::State => write!(f, "tfstate"),
        }
    }
}

pub fn render(format: OutputFormat, resources: &[Resource]) -> Result<String, AdoptError> {
    match format {
        OutputFormat::Config => Ok(render_config(resources)),
        OutputFormat::State => Ok(wrap_snapshot(index_by_full_name(resources)).to_json_pretty()?),
    }
}

/// Writes the document followed by a single newline.
pub fn write_document<W: Write>(mut writer: W, document: &str) -> io::Result<()> {
    writeln!(writer, "{document}")?;
    writer.flush()
}

/// Opens the output file, or standard output when no path is given.
pub fn open(path: Option<&Path>) -> Result<Box<dyn Write>, AdoptError> {
    match path {
        Some(p) => {
            tracing::debug!(path = %p.display(), "writing output to file");
            Ok(Box::new(File::create(p)?))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

#[derive(Debug, Tabled)]
struct DiskSummary<'a> {
    #[tabled(rename = "NAME")]
    name: &'a str,
    #[tabled(rename = "ZONE")]
    zone: &'a str,
    #[tabled(rename = "SIZE_GB")]
    size_gb: &'a str,
    #[tabled(rename = "TYPE")]
    disk_type: &'a str,
    #[tabled(rename = "ADDRESS")]
    address: &'a str,
}

impl<'a> From<&'a Resource> for DiskSummary<'a> {
    fn from(resource: &'a Resource) -> Self {
        let attrs = &resource.state.primary.attributes;
        Self {
            name: &attrs.name,
            zone: &attrs.zone,
            size_gb: &attrs.size,
            disk_type: &attrs.disk_type,
            address: &resource.full_name,
        }
    }
}

/// Table of adopted disks, in input order.
pub fn summary_table(resources: &[Resource]) -> String {
    let rows = resources.iter().map(DiskSummary::from);
    Table::new(rows).with(Style::sharp()).to_string()
}
