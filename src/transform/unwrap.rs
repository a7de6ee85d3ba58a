use crate::constants::TAG_TEST_SUITE;
use crate::report::Element;

/// Removes the single suite that wraps every real top-level suite, moving its
/// attributes onto the root and its children to the end of the root's child
/// list. The wrapper's attribute values win over the root's on conflict.
///
/// A root `testsuite` only counts as a wrapper when it is the only suite
/// under the root and itself contains suites. Returns the wrapper's `name`
/// attribute (or an empty string) when one was removed.
pub fn unwrap_outer_suite(root: &mut Element) -> Option<String> {
    let suite_count = root.child_elements_named(TAG_TEST_SUITE).count();
    if suite_count != 1 {
        if suite_count > 1 {
            log::debug!(
                "Found {} top-level suites, leaving the root unwrapped",
                suite_count
            );
        }
        return None;
    }

    let position = root.children().iter().position(|node| {
        node.as_element().is_some_and(|suite| {
            suite.is_named(TAG_TEST_SUITE)
                && suite.child_elements_named(TAG_TEST_SUITE).next().is_some()
        })
    })?;
    let mut wrapper = root.remove_child(position).into_element()?;

    for attribute in wrapper.attributes() {
        root.set_attribute(attribute.name.as_str(), attribute.value.as_str());
    }
    root.extend_children(wrapper.take_children());

    let name = wrapper.attribute("name").unwrap_or_default().to_string();
    log::debug!("Unwrapped outer suite {:?}", name);
    Some(name)
}
