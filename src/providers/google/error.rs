use thiserror::Error;

/// Errors raised while reading `gcloud compute disks list` output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoogleError {
    /// A line did not split into exactly five whitespace-separated columns.
    #[error("malformed input at line {line_number}: expected 5 fields, found {found}: '{line}'")]
    MalformedInput {
        line_number: usize,
        line: String,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_display() {
        let err = GoogleError::MalformedInput {
            line_number: 3,
            line: "disk-3 us-central1-f 10".to_string(),
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "malformed input at line 3: expected 5 fields, found 3: 'disk-3 us-central1-f 10'"
        );
    }

    #[test]
    fn test_malformed_input_empty_line() {
        let err = GoogleError::MalformedInput {
            line_number: 1,
            line: String::new(),
            found: 0,
        };
        assert!(err.to_string().contains("found 0"));
        assert!(err.to_string().ends_with("''"));
    }
}
