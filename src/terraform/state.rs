use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::resource::{Resource, ResourceState};

pub const STATE_FORMAT_VERSION: u32 = 1;

pub const ROOT_MODULE_PATH: &str = "root";

const JSON_INDENT: &[u8] = b"    ";

/// Minimal tfstate v1 document for first-time adoption.
///
/// Always serial 0 with a single root module. Not suitable for merging into an
/// existing state history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub version: u32,
    pub serial: u64,
    pub modules: Vec<ModuleState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleState {
    pub path: Vec<String>,
    pub outputs: BTreeMap<String, serde_json::Value>,
    pub resources: BTreeMap<String, ResourceState>,
}

impl StateSnapshot {
    /// Serializes with four-space indentation, the layout `terraform` itself writes.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // NOTE: serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn resources(&self) -> impl Iterator<Item = (&String, &ResourceState)> {
        self.modules.iter().flat_map(|m| m.resources.iter())
    }
}

/// Keys each resource's state by its full name. Later duplicates overwrite earlier ones.
pub fn index_by_full_name<'a, I>(resources: I) -> BTreeMap<String, ResourceState>
where
    I: IntoIterator<Item = &'a Resource>,
{
    let mut indexed = BTreeMap::new();
    for resource in resources {
        if indexed
            .insert(resource.full_name.clone(), resource.state.clone())
            .is_some()
        {
            tracing::warn!(
                resource = %resource.full_name,
                "duplicate resource name, keeping the later entry"
            );
        }
    }
    indexed
}

pub fn wrap_snapshot(resources: BTreeMap<String, ResourceState>) -> StateSnapshot {
    StateSnapshot {
        version: STATE_FORMAT_VERSION,
        serial: 0,
        modules: vec![ModuleState {
            path: vec![ROOT_MODULE_PATH.to_string()],
            outputs: BTreeMap::new(),
            resources,
        }],
    }
}
