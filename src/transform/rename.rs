use crate::constants::{ATTR_CLASS, ATTR_CLASSNAME, TAG_TEST_CASE};
use crate::report::Element;

/// Moves `class` to `classname` on every test case below `root`, overwriting
/// any `classname` already present. Returns how many test cases changed.
pub fn rename_class_attributes(root: &mut Element) -> usize {
    let mut renamed = 0;
    root.for_each_descendant_mut(TAG_TEST_CASE, &mut |test_case: &mut Element| {
        if let Some(class) = test_case.remove_attribute(ATTR_CLASS) {
            test_case.set_attribute(ATTR_CLASSNAME, class);
            renamed += 1;
        }
    });
    renamed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_class_attributes() {
        let mut root = Element::new("testsuites")
            .with_child(Element::new("testcase").with_attribute("class", "AtRoot"))
            .with_child(
                Element::new("testsuite")
                    .with_child(
                        Element::new("testcase")
                            .with_attribute("name", "t1")
                            .with_attribute("class", "Foo"),
                    )
                    .with_child(
                        Element::new("testcase")
                            .with_attribute("classname", "Stale")
                            .with_attribute("class", "Fresh"),
                    )
                    .with_child(Element::new("testcase").with_attribute("classname", "Kept"))
                    .with_child(Element::new("failure").with_attribute("class", "NotATestCase")),
            );

        assert_eq!(rename_class_attributes(&mut root), 3);

        let root_case = root.child_elements_named("testcase").next().unwrap();
        assert_eq!(root_case.attribute("classname"), Some("AtRoot"));

        let suite = root.child_elements_named("testsuite").next().unwrap();
        let classnames: Vec<_> = suite
            .child_elements_named("testcase")
            .map(|test_case| (test_case.attribute("class"), test_case.attribute("classname")))
            .collect();
        assert_eq!(
            classnames,
            vec![
                (None, Some("Foo")),
                (None, Some("Fresh")),
                (None, Some("Kept")),
            ]
        );
        let failure = suite.child_elements_named("failure").next().unwrap();
        assert_eq!(failure.attribute("class"), Some("NotATestCase"));
    }
}
