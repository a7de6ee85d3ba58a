use std::{
    fs::{self, File},
    io::BufReader,
    path::Path,
};

use crate::error::NormalizeError;
use crate::report::{parser::parse_document, writer::to_bytes, Document};
use crate::transform::{normalize, NormalizeSummary};

pub fn load_report(input: &Path) -> Result<Document, NormalizeError> {
    if !input.is_file() {
        return Err(NormalizeError::InputNotFound(input.to_path_buf()));
    }
    let file = File::open(input).map_err(|source| NormalizeError::InputUnreadable {
        path: input.to_path_buf(),
        source,
    })?;

    parse_document(BufReader::new(file)).map_err(|source| NormalizeError::Parse {
        path: input.to_path_buf(),
        source,
    })
}

pub fn save_report(document: &Document, output: &Path) -> Result<(), NormalizeError> {
    let bytes = to_bytes(document).map_err(|source| NormalizeError::Serialize {
        path: output.to_path_buf(),
        source,
    })?;
    fs::write(output, bytes).map_err(|source| NormalizeError::Write {
        path: output.to_path_buf(),
        source,
    })
}

/// Loads `input`, normalizes it in memory, and only then writes `output`.
pub fn run(input: &Path, output: &Path) -> Result<NormalizeSummary, NormalizeError> {
    log::debug!("Loading report from {:?}", input);
    let mut document = load_report(input)?;

    let summary = normalize(&mut document);
    log::info!("Normalized {:?}: {}", input, summary);

    save_report(&document, output)?;
    log::debug!("Wrote report to {:?}", output);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_run_writes_normalized_report() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("junit.xml");
        let output = temp_dir.path().join("normalized.xml");
        fs::write(
            &input,
            r#"<testsuites><testsuite name="all" tests="1"><testsuite name="Suite"><testsuite name="Suite::nested"><testcase name="t1" class="Suite"/></testsuite></testsuite></testsuite></testsuites>"#,
        )
        .unwrap();

        let summary = run(&input, &output).unwrap();

        assert_eq!(summary.unwrapped_suite.as_deref(), Some("all"));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites name="all" tests="1">
    <testsuite name="Suite">
        <testcase name="t1" classname="Suite"/>
    </testsuite>
</testsuites>
"#
        );
    }

    #[test]
    fn test_run_missing_input() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("missing.xml");
        let output = temp_dir.path().join("normalized.xml");

        let result = run(&input, &output);

        assert!(matches!(result, Err(NormalizeError::InputNotFound(path)) if path == input));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_parse_failure_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("junit.xml");
        let output = temp_dir.path().join("normalized.xml");
        fs::write(&input, "<testsuites><testsuite></testsuites>").unwrap();

        let result = run(&input, &output);

        assert!(matches!(result, Err(NormalizeError::Parse { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_unwritable_output() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("junit.xml");
        let output = temp_dir.path().join("missing-dir").join("normalized.xml");
        fs::write(&input, "<testsuites/>").unwrap();

        let result = run(&input, &output);

        assert!(matches!(result, Err(NormalizeError::Write { .. })));
    }
}
