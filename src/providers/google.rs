mod error;
mod types;

pub use error::GoogleError;
pub use types::{DISK_RESOURCE_TYPE, DiskRow, HEADER_TOKEN};

use crate::resource::Resource;

/// Lazily converts `gcloud compute disks list` lines into [`Resource`]s.
///
/// Header rows are skipped wherever they appear. A line that does not split into
/// exactly five columns yields [`GoogleError::MalformedInput`]; iteration may
/// continue past it, so the caller chooses whether to abort or skip.
pub fn from_disks_list<I>(project: &str, lines: I) -> DisksList<'_, I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    DisksList {
        project,
        lines: lines.into_iter(),
        line_number: 0,
    }
}

/// Single-pass iterator returned by [`from_disks_list`].
pub struct DisksList<'p, L> {
    project: &'p str,
    lines: L,
    line_number: usize,
}

impl<L> Iterator for DisksList<'_, L>
where
    L: Iterator,
    L::Item: AsRef<str>,
{
    type Item = Result<Resource, GoogleError>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = line.as_ref();

            let row = match DiskRow::from_line(line, self.line_number) {
                Ok(row) => row,
                Err(e) => return Some(Err(e)),
            };

            if row.is_header() {
                tracing::debug!(line_number = self.line_number, "skipping header row");
                continue;
            }

            if !row.has_numeric_size() {
                tracing::warn!(
                    disk = row.name,
                    size_gb = row.size_gb,
                    "disk size is not numeric, emitting as-is"
                );
            }

            return Some(Ok(row.into_resource(self.project)));
        }
        None
    }
}
