use fixtures::*;

use pretty_assertions::assert_eq;
use witsml_manifest::{ParseError, extract};

#[test]
fn test_namespaced_sample() {
    ensure_env_logger_initialized();
    let metadata = extract(&read(&namespaced_sample())).expect("sample to parse");

    assert_eq!(metadata.uid, "log-1");
    assert_eq!(metadata.well_uid, "well-1");
    assert_eq!(metadata.wellbore_uid, "wellbore-1");
    assert_eq!(metadata.name.as_deref(), Some("Gamma Ray"));
    assert_eq!(metadata.well_name.as_deref(), Some("Well Alpha"));
    assert_eq!(metadata.wellbore_name.as_deref(), Some("Bore A"));
    assert_eq!(metadata.service_company.as_deref(), Some("ServiceCo"));
    assert_eq!(metadata.run_number.as_deref(), Some("Run-07"));
    assert_eq!(metadata.index_type.as_deref(), Some("date time"));
    assert_eq!(metadata.start_index.as_deref(), Some("2021-01-01T00:00:00Z"));
    assert_eq!(metadata.end_index.as_deref(), Some("2021-01-02T00:00:00Z"));
    assert_eq!(metadata.schema_version.as_deref(), Some("1.4.1.1"));
    assert_eq!(
        metadata.creation_time.map(|ts| ts.to_string()).as_deref(),
        Some("2020-12-31T23:59:59Z")
    );
    assert_eq!(
        metadata.last_change_time.map(|ts| ts.to_string()).as_deref(),
        Some("2021-01-03T10:15:30Z")
    );
}

#[test]
fn test_unqualified_sample() {
    ensure_env_logger_initialized();
    let metadata = extract(&read(&unqualified_sample())).expect("sample to parse");

    assert_eq!(metadata.uid, "log-2");
    assert_eq!(metadata.well_uid, "well-2");
    assert_eq!(metadata.wellbore_uid, "");
    assert_eq!(metadata.name.as_deref(), Some("Deep Resistivity"));
    assert_eq!(metadata.wellbore_name, None);
    assert_eq!(metadata.service_company, None);
    assert_eq!(metadata.run_number, None);
    assert_eq!(metadata.start_index.as_deref(), Some("120.0"));
    assert_eq!(metadata.schema_version.as_deref(), Some("1.3.1.1"));
    assert_eq!(metadata.creation_time, None);
    assert_eq!(
        metadata.last_change_time.map(|ts| ts.to_string()).as_deref(),
        Some("2022-06-01T06:30:00Z")
    );
}

#[test]
fn test_prefixed_sample() {
    ensure_env_logger_initialized();
    let metadata = extract(&read(&prefixed_sample())).expect("sample to parse");

    assert_eq!(metadata.uid, "log-3");
    assert_eq!(metadata.name.as_deref(), Some("Sonic & Density"));
    assert_eq!(metadata.service_company.as_deref(), Some("Acme Wireline"));
    assert_eq!(metadata.end_index.as_deref(), Some("9800"));
    assert_eq!(metadata.creation_time, None);
}

#[test]
fn test_doctype_is_rejected() {
    ensure_env_logger_initialized();
    assert!(matches!(
        extract(&read(&sample_with_doctype())),
        Err(ParseError::DoctypeDisallowed { .. })
    ));
}

#[test]
fn test_undeclared_entity_is_rejected() {
    ensure_env_logger_initialized();
    assert!(matches!(
        extract(&read(&sample_with_undeclared_entity())),
        Err(ParseError::EntityReference { .. })
    ));
}

#[test]
fn test_missing_log_is_rejected() {
    ensure_env_logger_initialized();
    assert!(matches!(
        extract(&read(&sample_without_log())),
        Err(ParseError::MissingLogElement)
    ));
}

#[test]
fn test_truncated_document_is_rejected() {
    ensure_env_logger_initialized();
    assert!(matches!(
        extract(&read(&truncated_sample())),
        Err(ParseError::IllFormed { .. } | ParseError::MalformedXml { .. })
    ));
}

#[test]
fn test_billion_laughs_is_rejected_without_expansion() {
    ensure_env_logger_initialized();
    let xml = r#"<?xml version="1.0"?>
<!DOCTYPE lolz [
 <!ENTITY lol "lol">
 <!ENTITY lol1 "&lol;&lol;&lol;&lol;&lol;&lol;&lol;&lol;&lol;&lol;">
 <!ENTITY lol2 "&lol1;&lol1;&lol1;&lol1;&lol1;&lol1;&lol1;&lol1;&lol1;&lol1;">
]>
<log uid="x"><name>&lol2;</name></log>"#;

    assert!(matches!(
        extract(xml.as_bytes()),
        Err(ParseError::DoctypeDisallowed { .. })
    ));
}

#[test]
fn test_extract_is_deterministic() {
    let bytes = read(&namespaced_sample());
    assert_eq!(extract(&bytes).unwrap(), extract(&bytes).unwrap());
}
