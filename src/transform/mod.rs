pub mod flatten;
pub mod rename;
pub mod unwrap;

use std::fmt;

use crate::constants::TAG_TEST_CASE;
use crate::report::Document;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    /// `name` of the wrapping suite that was removed, if any.
    pub unwrapped_suite: Option<String>,
    pub flattened_suites: usize,
    pub renamed_test_cases: usize,
    pub test_cases: usize,
}

impl fmt::Display for NormalizeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unwrapped_suite {
            Some(name) => write!(f, "unwrapped outer suite {:?}, ", name)?,
            None => write!(f, "no outer suite, ")?,
        }
        write!(
            f,
            "flattened {} nested suites, renamed class on {} of {} test cases",
            self.flattened_suites, self.renamed_test_cases, self.test_cases
        )
    }
}

/// Rewrites `document` in place into the canonical
/// `<testsuites>/<testsuite>/<testcase>` shape.
pub fn normalize(document: &mut Document) -> NormalizeSummary {
    let root = &mut document.root;

    let unwrapped_suite = unwrap::unwrap_outer_suite(root);
    let flattened_suites = flatten::flatten_suites(root);
    let renamed_test_cases = rename::rename_class_attributes(root);

    NormalizeSummary {
        unwrapped_suite,
        flattened_suites,
        renamed_test_cases,
        test_cases: root.count_descendants(TAG_TEST_CASE),
    }
}
