use serde::{Deserialize, Serialize};

/// One adopted resource: its HCL declaration plus the state entry that marks it as existing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub config: String,
    pub full_name: String,
    pub state: ResourceState,
}

/// A single entry of a v1 tfstate module's `resources` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub primary: InstanceState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceState {
    pub id: String,
    pub attributes: DiskAttributes,
}

// NOTE: Every value is a string, including size, as Terraform v1 state stores flatmapped attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskAttributes {
    pub id: String,
    pub name: String,
    pub self_link: String,
    pub size: String,
    #[serde(rename = "type")]
    pub disk_type: String,
    pub zone: String,
}
