//! Terraform artifacts rendered from adopted resources.

pub mod config;
pub mod state;
