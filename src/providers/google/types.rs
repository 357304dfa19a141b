use super::GoogleError;
use crate::resource::{DiskAttributes, InstanceState, Resource, ResourceState};

pub const DISK_RESOURCE_TYPE: &str = "google_compute_disk";

/// First column of the header row printed by `gcloud compute disks list`.
pub const HEADER_TOKEN: &str = "NAME";

const COMPUTE_API_BASE: &str = "https://www.googleapis.com/compute/v1";

/// One row of `gcloud compute disks list`, columns `NAME ZONE SIZE_GB TYPE STATUS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskRow<'a> {
    pub name: &'a str,
    pub zone: &'a str,
    pub size_gb: &'a str,
    pub disk_type: &'a str,
    // NOTE: Parsed to validate column alignment, never emitted
    pub status: &'a str,
}

impl<'a> DiskRow<'a> {
    pub fn from_line(line: &'a str, line_number: usize) -> Result<Self, GoogleError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields[..] {
            [name, zone, size_gb, disk_type, status] => Ok(Self {
                name,
                zone,
                size_gb,
                disk_type,
                status,
            }),
            _ => Err(GoogleError::MalformedInput {
                line_number,
                line: line.to_string(),
                found: fields.len(),
            }),
        }
    }

    pub fn is_header(&self) -> bool {
        self.name == HEADER_TOKEN
    }

    pub fn has_numeric_size(&self) -> bool {
        !self.size_gb.is_empty() && self.size_gb.chars().all(|c| c.is_ascii_digit())
    }

    pub fn full_name(&self) -> String {
        format!("{}.{}", DISK_RESOURCE_TYPE, self.name)
    }

    pub fn self_link(&self, project: &str) -> String {
        format!(
            "{}/projects/{}/zones/{}/disks/{}",
            COMPUTE_API_BASE, project, self.zone, self.name
        )
    }

    pub fn to_config(&self) -> String {
        format!(
            "resource \"{kind}\" \"{name}\" {{\n    name = \"{name}\"\n    type = \"{disk_type}\"\n    zone = \"{zone}\"\n    size = \"{size}\"\n}}",
            kind = DISK_RESOURCE_TYPE,
            name = self.name,
            disk_type = self.disk_type,
            zone = self.zone,
            size = self.size_gb,
        )
    }

    pub fn to_state(&self, project: &str) -> ResourceState {
        ResourceState {
            resource_type: DISK_RESOURCE_TYPE.to_string(),
            primary: InstanceState {
                id: self.name.to_string(),
                attributes: DiskAttributes {
                    id: self.name.to_string(),
                    name: self.name.to_string(),
                    self_link: self.self_link(project),
                    size: self.size_gb.to_string(),
                    disk_type: self.disk_type.to_string(),
                    zone: self.zone.to_string(),
                },
            },
        }
    }

    pub fn into_resource(self, project: &str) -> Resource {
        Resource {
            config: self.to_config(),
            full_name: self.full_name(),
            state: self.to_state(project),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = "disk-2                                   us-central1-f 100     pd-ssd      READY";

    #[test]
    fn test_from_line_splits_whitespace_runs() {
        let row = DiskRow::from_line(ROW, 1).unwrap();
        assert_eq!(row.name, "disk-2");
        assert_eq!(row.zone, "us-central1-f");
        assert_eq!(row.size_gb, "100");
        assert_eq!(row.disk_type, "pd-ssd");
        assert_eq!(row.status, "READY");
    }

    #[test]
    fn test_from_line_tabs_and_trailing_newline() {
        let row = DiskRow::from_line("disk-9\teurope-west1-b\t10\tpd-balanced\tREADY\n", 4).unwrap();
        assert_eq!(row.name, "disk-9");
        assert_eq!(row.disk_type, "pd-balanced");
    }

    #[test]
    fn test_from_line_too_few_fields() {
        let err = DiskRow::from_line("disk-1 us-central1-f 500 pd-standard", 2).unwrap_err();
        assert_eq!(
            err,
            GoogleError::MalformedInput {
                line_number: 2,
                line: "disk-1 us-central1-f 500 pd-standard".to_string(),
                found: 4,
            }
        );
    }

    #[test]
    fn test_from_line_too_many_fields() {
        let line = "disk-1 us-central1-f zonal 500 pd-standard READY";
        let err = DiskRow::from_line(line, 5).unwrap_err();
        assert!(matches!(err, GoogleError::MalformedInput { found: 6, .. }));
    }

    #[test]
    fn test_from_line_blank() {
        let err = DiskRow::from_line("   ", 1).unwrap_err();
        assert!(matches!(err, GoogleError::MalformedInput { found: 0, .. }));
    }

    #[test]
    fn test_header_detection_is_case_sensitive() {
        let header = DiskRow::from_line("NAME ZONE SIZE_GB TYPE STATUS", 1).unwrap();
        assert!(header.is_header());

        let lower = DiskRow::from_line("name zone 10 pd-ssd READY", 1).unwrap();
        assert!(!lower.is_header());
    }

    #[test]
    fn test_numeric_size() {
        let row = DiskRow::from_line(ROW, 1).unwrap();
        assert!(row.has_numeric_size());

        let row = DiskRow::from_line("disk-1 us-central1-f 1.5TB pd-ssd READY", 1).unwrap();
        assert!(!row.has_numeric_size());
    }

    #[test]
    fn test_self_link() {
        let row = DiskRow::from_line(ROW, 1).unwrap();
        assert_eq!(
            row.self_link("my-project"),
            "https://www.googleapis.com/compute/v1/projects/my-project/zones/us-central1-f/disks/disk-2"
        );
    }

    #[test]
    fn test_to_config_field_order() {
        let row = DiskRow::from_line(ROW, 1).unwrap();
        let want = r#"resource "google_compute_disk" "disk-2" {
    name = "disk-2"
    type = "pd-ssd"
    zone = "us-central1-f"
    size = "100"
}"#;
        assert_eq!(row.to_config(), want);
    }

    #[test]
    fn test_into_resource() {
        let resource = DiskRow::from_line(ROW, 1).unwrap().into_resource("my-project");
        assert_eq!(resource.full_name, "google_compute_disk.disk-2");
        assert_eq!(resource.state.resource_type, "google_compute_disk");
        assert_eq!(resource.state.primary.id, "disk-2");
        assert_eq!(resource.state.primary.attributes.size, "100");
        assert_eq!(resource.state.primary.attributes.disk_type, "pd-ssd");
        assert_eq!(resource.state.primary.attributes.zone, "us-central1-f");
    }
}
