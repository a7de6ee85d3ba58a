pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

pub const LOG_FILTER_ENV: &str = "JUNIT_NORMALIZE_LOG";

pub const TAG_REPORT: &str = "testsuites";
pub const TAG_TEST_SUITE: &str = "testsuite";
pub const TAG_TEST_CASE: &str = "testcase";

pub const ATTR_CLASS: &str = "class";
pub const ATTR_CLASSNAME: &str = "classname";
