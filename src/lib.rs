//! tfadopt - adopt existing Google Compute Engine disks into Terraform.
//!
//! Turns `gcloud compute disks list` output into `google_compute_disk` resource
//! declarations and a matching tfstate snapshot that records them as already created.

pub mod input;
pub mod output;
pub mod providers;
pub mod resource;
pub mod terraform;

mod error;

pub use error::AdoptError;
pub use providers::google::{DisksList, GoogleError, from_disks_list};
pub use resource::Resource;
pub use terraform::config::render_config;
pub use terraform::state::{StateSnapshot, index_by_full_name, wrap_snapshot};
