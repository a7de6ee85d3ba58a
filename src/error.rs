use std::path::PathBuf;

use thiserror::Error;

use crate::constants::EXIT_FAILURE;
use crate::report::{parser::ReportParseError, writer::ReportWriteError};

/// Every way a run can fail. The `Display` output is the single line shown to
/// the user.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Usage: {program} <input-file-path> <output-file-path>")]
    Usage { program: String },
    #[error("Error: Input file '{}' not found.", .0.display())]
    InputNotFound(PathBuf),
    #[error("Error: Input file '{}' could not be read: {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error: Failed to load XML file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ReportParseError,
    },
    #[error("Error: Failed to save XML to '{}': {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: ReportWriteError,
    },
    #[error("Error: Failed to save XML to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NormalizeError {
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_single_line() {
        let errors = vec![
            NormalizeError::Usage {
                program: "junit-normalize".into(),
            },
            NormalizeError::InputNotFound(PathBuf::from("missing.xml")),
            NormalizeError::Parse {
                path: PathBuf::from("bad.xml"),
                source: ReportParseError::RootNotFound,
            },
            NormalizeError::Write {
                path: PathBuf::from("out/report.xml"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            },
        ];

        for error in &errors {
            let message = error.to_string();
            assert!(!message.contains('\n'), "{message}");
            assert_eq!(error.exit_code(), EXIT_FAILURE);
        }
        assert_eq!(
            errors[0].to_string(),
            "Usage: junit-normalize <input-file-path> <output-file-path>"
        );
        assert_eq!(
            errors[1].to_string(),
            "Error: Input file 'missing.xml' not found."
        );
        assert_eq!(
            errors[2].to_string(),
            "Error: Failed to load XML file 'bad.xml': no root element found"
        );
    }
}
