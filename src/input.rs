use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::AdoptError;
use crate::providers::google::from_disks_list;
use crate::resource::Resource;

const STDIN_PATH: &str = "-";

/// Opens a listing file, or standard input when the path is absent or `-`.
pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead>, AdoptError> {
    match path {
        Some(p) if p != Path::new(STDIN_PATH) => {
            let file = File::open(p)?;
            tracing::debug!(path = %p.display(), "reading disk listing from file");
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

/// Streams lines from `reader` through the disks-list parser.
///
/// Stops at the first malformed line or read failure, so no partial result escapes.
pub fn read_resources<R: BufRead>(project: &str, reader: R) -> Result<Vec<Resource>, AdoptError> {
    let mut read_error = None;
    let lines = reader.lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(e) => {
            read_error = Some(e);
            None
        }
    });

    let resources = from_disks_list(project, lines).collect::<Result<Vec<_>, _>>();

    if let Some(e) = read_error {
        return Err(AdoptError::Io(e));
    }
    Ok(resources?)
}
