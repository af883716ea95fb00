//! Compile-fail tests to ensure proper error messages for incorrect usage.
//!
//! These tests verify that the derive macro and the `Anonymise` trait reject:
//! - field types with no `Anonymise` implementation
//! - malformed or empty `#[anonymise]` markers
//! - markers on private fields
//! - unions

#[test]
fn compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
