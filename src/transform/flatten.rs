use crate::constants::{TAG_TEST_CASE, TAG_TEST_SUITE};
use crate::report::{Element, Node};

/// Flattens every top-level suite under `root` so that none of them contains
/// another suite. Returns how many nested suites were removed.
pub fn flatten_suites(root: &mut Element) -> usize {
    root.child_elements_mut()
        .filter(|suite| suite.is_named(TAG_TEST_SUITE))
        .map(flatten_suite)
        .sum()
}

/// Hoists the test cases of every nested suite into `suite`, draining deeper
/// levels first so test cases at any depth survive. The nested suites
/// themselves are dropped along with their attributes and any other children.
///
/// Hoisted test cases are appended after `suite`'s own children, in document
/// order.
pub fn flatten_suite(suite: &mut Element) -> usize {
    let nested_suites = suite.take_child_elements(TAG_TEST_SUITE);

    let mut removed = 0;
    for mut nested_suite in nested_suites {
        removed += 1 + flatten_suite(&mut nested_suite);

        let test_cases = nested_suite.take_child_elements(TAG_TEST_CASE);
        log::debug!(
            "Moving {} test cases from {:?} into {:?}",
            test_cases.len(),
            nested_suite.attribute("name").unwrap_or_default(),
            suite.attribute("name").unwrap_or_default()
        );
        suite.extend_children(test_cases.into_iter().map(Node::Element));
    }
    removed
}
