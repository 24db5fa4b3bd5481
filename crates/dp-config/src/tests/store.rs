use crate::StoreConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

#[test]
fn given_nested_relative_file_when_validate_then_ok() {
    let config = StoreConfig {
        file: "cache/profile.json".into(),
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_parent_traversal_when_validate_then_error() {
    let config = StoreConfig {
        file: "../profile.json".into(),
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err().to_string(), contains_substring(".."));
}

#[test]
fn given_absolute_path_when_validate_then_error() {
    let config = StoreConfig {
        file: "/tmp/profile.json".into(),
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_blank_file_when_validate_then_error() {
    let config = StoreConfig { file: "  ".into() };

    assert_that!(config.validate(), err(anything()));
}
