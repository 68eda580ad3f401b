use snug_error::{ErrorDictionary, ErrorKind};

fn defaults() -> ErrorDictionary<i64> {
    ErrorDictionary::new()
        .entry("E1", |_| "f1".to_string())
        .entry("E2", |_| "f2".to_string())
}

#[test]
fn resolve_runs_message_function_with_args() {
    let dictionary =
        ErrorDictionary::new().entry("E002", |args: &[i64]| format!("ERRO: {}", args[0]));

    assert_eq!(dictionary.resolve("E002", &[4]), Some("ERRO: 4".to_string()));
    assert_eq!(dictionary.resolve("E404", &[4]), None);
}

#[test]
fn raise_known_code_is_coded() {
    let err = defaults().raise("E1", &[]);

    assert_eq!(err.kind(), ErrorKind::Coded);
    assert_eq!(err.code(), Some("E1"));
    assert_eq!(err.message(), "f1");
}

#[test]
fn raise_unknown_code_uses_code_as_message() {
    let err = defaults().raise("something broke", &[1, 2]);

    assert_eq!(err.kind(), ErrorKind::AdHoc);
    assert_eq!(err.code(), None);
    assert_eq!(err.name(), "Error");
    assert_eq!(err.message(), "something broke");
}

#[test]
fn merged_call_site_entries_win() {
    let call_site = ErrorDictionary::new().entry("E2", |_: &[i64]| "g2".to_string());
    let merged = defaults().merged(&call_site);

    assert_eq!(merged.resolve("E1", &[]).as_deref(), Some("f1"));
    assert_eq!(merged.resolve("E2", &[]).as_deref(), Some("g2"));
    assert_eq!(merged.len(), 2);
}

#[test]
fn merge_leaves_inputs_untouched() {
    let base = defaults();
    let call_site = ErrorDictionary::new().entry("E3", |_: &[i64]| "g3".to_string());
    let _ = base.merged(&call_site);

    assert!(!base.contains("E3"));
    assert_eq!(call_site.len(), 1);
}

#[test]
fn codes_are_sorted() {
    let dictionary = ErrorDictionary::<i64>::new()
        .entry("E3", |_| String::new())
        .entry("E1", |_| String::new())
        .entry("E2", |_| String::new());

    assert_eq!(dictionary.codes().collect::<Vec<_>>(), vec!["E1", "E2", "E3"]);
    assert_eq!(format!("{:?}", dictionary), r#"{"E1", "E2", "E3"}"#);
}

#[test]
fn collects_from_function_pointers() {
    fn short(_: &[i64]) -> String {
        "too short".to_string()
    }

    fn long(_: &[i64]) -> String {
        "too long".to_string()
    }

    let entries: [(&str, fn(&[i64]) -> String); 2] = [("short", short), ("long", long)];
    let dictionary: ErrorDictionary<i64> = entries.into_iter().collect();

    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.raise("long", &[]).message(), "too long");
}

#[test]
fn later_entry_replaces_earlier_one() {
    let dictionary = ErrorDictionary::<i64>::new()
        .entry("E1", |_| "first".to_string())
        .entry("E1", |_| "second".to_string());

    assert_eq!(dictionary.len(), 1);
    assert_eq!(dictionary.resolve("E1", &[]).as_deref(), Some("second"));
}
