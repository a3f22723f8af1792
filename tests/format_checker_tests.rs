/*!
 * End-to-end format checker tests: load a resume file, validate it, and
 * deliver the consolidated report through the injected sink.
 */

use resume_format::{CheckError, CheckerConfig, ResumeFormatChecker};
use std::io::Write;

use test_utils::*;

fn write_resume(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp resume file");
    file.write_all(content.as_bytes())
        .expect("write temp resume file");
    file
}

#[test]
fn test_valid_resume_file_passes() {
    let file = write_resume(".yaml", VALID_RESUME_YAML);
    let sink = RecordingSink::new();
    let checker = ResumeFormatChecker::with_sink(Box::new(sink.clone()));

    let result = checker.check_file(file.path()).expect("file is readable");
    assert!(result, "conforming resume must pass");
    assert!(sink.messages().is_empty(), "nothing is emitted on success");
}

#[test]
fn test_invalid_resume_file_reports_through_sink() {
    let broken = VALID_RESUME_YAML.replace("editing: true", "editing: 'true'");
    let file = write_resume(".yaml", &broken);
    let sink = RecordingSink::new();
    let checker = ResumeFormatChecker::with_sink(Box::new(sink.clone()));

    let result = checker.check_file(file.path()).expect("file is readable");
    assert!(!result, "mistyped editing flag must fail the check");

    let messages = sink.messages();
    assert_eq!(messages.len(), 1, "one composite message per check");
    assert!(
        messages[0].contains("The value for 'editing' in the 'editing' section is of type 'string'.")
    );
    assert!(messages[0].contains("Expected type: 'boolean'."));
}

#[test]
fn test_json_resume_is_supported() {
    let document = valid_resume();
    let json = serde_json::to_string(&document).expect("fixture serializes to JSON");
    let file = write_resume(".json", &json);
    let sink = RecordingSink::new();
    let checker = ResumeFormatChecker::with_sink(Box::new(sink.clone()));

    let result = checker.check_file(file.path()).expect("file is readable");
    assert!(result, "the JSON rendition of the fixture must pass");
    assert!(sink.messages().is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let checker = ResumeFormatChecker::new();
    let result = checker.check_file("/no/such/dir/resume.yaml");
    assert!(matches!(result, Err(CheckError::Io { .. })));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let file = write_resume(".yaml", "basic: [unclosed");
    let checker = ResumeFormatChecker::new();
    let result = checker.check_file(file.path());
    assert!(matches!(result, Err(CheckError::Parse(_))));
}

#[test]
fn test_empty_file_is_rejected() {
    let file = write_resume(".yaml", "");
    let checker = ResumeFormatChecker::new();
    let result = checker.check_file(file.path());
    assert!(matches!(result, Err(CheckError::EmptyDocument)));
}

#[test]
fn test_oversized_document_is_rejected() {
    let file = write_resume(".yaml", VALID_RESUME_YAML);
    let config = CheckerConfig {
        max_document_size: 16,
    };
    let checker = ResumeFormatChecker::new().with_config(config);

    let result = checker.check_file(file.path());
    assert!(matches!(
        result,
        Err(CheckError::DocumentTooLarge { limit: 16, .. })
    ));
}

#[test]
fn test_check_value_skips_loading() {
    let sink = RecordingSink::new();
    let checker = ResumeFormatChecker::with_sink(Box::new(sink.clone()));

    assert!(checker.check_value(&valid_resume()));

    let mut document = valid_resume();
    remove_section(&mut document, "objective");
    assert!(!checker.check_value(&document));
    assert_eq!(sink.messages().len(), 1);
}

#[test]
fn test_multiple_broken_sections_in_one_message() {
    let mut document = valid_resume();
    remove_section(&mut document, "objective");
    set_field(
        &mut document,
        "basic",
        "phone",
        serde_yaml::from_str("5551234567").unwrap(),
    );

    let sink = RecordingSink::new();
    let checker = ResumeFormatChecker::with_sink(Box::new(sink.clone()));
    assert!(!checker.check_value(&document));

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("'objective'"));
    assert!(messages[0].contains("'phone'"));
}
