use crate::common::{VercmpOutput, VercmpTest};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

impl VercmpTest {
    pub fn max(&self, args: &[&str]) -> VercmpOutput {
        self.vercmp(&[&["max"], args].concat())
    }
}

#[test]
fn test_max_text_output() {
    let test = VercmpTest::new();

    for (left, right, expected) in [
        ("1.9.0", "1.10.0", "1.10.0"),
        ("2.1", "2.0.9", "2.1"),
        ("1.0.0", "1.0.0-SNAPSHOT", "1.0.0-SNAPSHOT"),
        ("1.0-ALPHA", "1.0-alpha", "1.0-ALPHA"),
    ] {
        let output = test.max(&[left, right]);
        output.assert_success();
        assert_eq!(output.trimmed_stdout(), expected, "max {left} {right}");
    }
}

#[test]
fn test_max_leading_dash_version() {
    let test = VercmpTest::new();
    let output = test.max(&["-1", "1.0"]);

    output.assert_success();
    assert_eq!(output.trimmed_stdout(), "1.0");
}

#[test]
fn test_max_json_output() {
    let test = VercmpTest::new();
    let output = test.max(&["--format", "json", "2.0", "2.0.0"]);

    output.assert_success();
    assert_snapshot!(output.trimmed_stdout(), @r#"{"left":"2.0","right":"2.0.0","max":"2.0.0"}"#);
}

#[test]
fn test_max_blank_left() {
    let test = VercmpTest::new();
    let output = test.max(&["", "1.0"]);

    output.assert_code(2);
    assert!(output.stderr().contains("`left`"));
}
