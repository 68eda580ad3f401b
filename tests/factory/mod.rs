use serde_json::Value;
use snug_error::{
    check, Check, CheckResult, Checker, CheckerConfig, CheckerFactory, CheckContext,
    ErrorDictionary, NamedError,
};
use std::sync::{Arc, Mutex};

fn raise_e1(ctx: &CheckContext<'_, Value>, _: &[Value]) -> CheckResult {
    ctx.throw("E1", &[])
}

fn raise_e2(ctx: &CheckContext<'_, Value>, _: &[Value]) -> CheckResult {
    ctx.throw("E2", &[])
}

fn defaults() -> ErrorDictionary<Value> {
    ErrorDictionary::new()
        .entry("E1", |_| "f1".to_string())
        .entry("E2", |_| "f2".to_string())
}

fn message_of(checker: &Checker<Value>, code: &str) -> String {
    let cursor = checker.call([]);
    cursor.error(code).unwrap().call(&[]).unwrap_err().message().to_string()
}

#[test]
fn default_dictionary_is_used_when_call_site_has_none() {
    let factory = CheckerFactory::create(CheckerConfig::new().dictionary(defaults()));
    let checker = factory.checker(vec![check!("E1" => raise_e1)]);

    assert_eq!(message_of(&checker, "E1"), "f1");
    assert_eq!(checker.dictionary().map(ErrorDictionary::len), Some(2));
}

#[test]
fn call_site_dictionary_is_used_when_factory_has_none() {
    let factory = CheckerFactory::<Value>::default();
    let call_site = ErrorDictionary::new().entry("E1", |_: &[Value]| "g1".to_string());
    let checker = factory.checker_with(call_site, vec![check!("E1" => raise_e1)]);

    assert_eq!(message_of(&checker, "E1"), "g1");
}

#[test]
fn call_site_entries_override_defaults() {
    let factory = CheckerFactory::create(CheckerConfig::new().dictionary(defaults()));
    let call_site = ErrorDictionary::new().entry("E2", |_: &[Value]| "g2".to_string());
    let checker =
        factory.checker_with(call_site, vec![check!("E1" => raise_e1), check!("E2" => raise_e2)]);

    assert_eq!(message_of(&checker, "E1"), "f1");
    assert_eq!(message_of(&checker, "E2"), "g2");
    assert_eq!(factory.dictionary().and_then(|d| d.resolve("E2", &[])).as_deref(), Some("f2"));
}

#[test]
fn no_dictionary_anywhere_leaves_codes_literal() {
    let checker = snug_error::checker(vec![check!("E1" => raise_e1)]);

    assert!(checker.dictionary().is_none());
    assert_eq!(message_of(&checker, "E1"), "E1");
}

#[test]
fn on_error_sees_every_recorded_failure() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let observed = Arc::clone(&seen);
    let factory = CheckerFactory::create(
        CheckerConfig::new()
            .dictionary(defaults())
            .on_error(move |err: &NamedError| {
                observed.lock().unwrap().push(err.name().to_string());
            }),
    );
    let cursor = factory.checker(vec![check!(raise_e1), check!(raise_e2)]).call([]);

    let _ = cursor.next(&[]);
    let _ = cursor.error("raise_e2").unwrap().call(&[]);
    let _ = cursor.next(&[]);
    let _ = cursor.next(&[]);
    let _ = cursor.error("missing");

    assert_eq!(*seen.lock().unwrap(), vec!["E1", "E2", "E2", "ExhaustedError"]);
    assert_eq!(cursor.error_count(), 4);
}

#[test]
fn on_error_does_not_change_the_failure() {
    let factory = CheckerFactory::create(CheckerConfig::new().on_error(|_| {}));
    let cursor = factory.checker(vec![check!(raise_e1)]).call([]);

    let err = cursor.next(&[]).unwrap_err();

    assert_eq!(err.message(), "E1");
    assert_eq!(cursor.last_error(), Some(err));
}

#[test]
#[should_panic(expected = "observer blew up")]
fn on_error_panic_propagates_to_caller() {
    let factory =
        CheckerFactory::create(CheckerConfig::new().on_error(|_| panic!("observer blew up")));
    let cursor = factory.checker(vec![check!(raise_e1)]).call([]);

    let _ = cursor.next(&[]);
}

#[test]
fn factory_can_be_reused_across_chains() {
    let factory = CheckerFactory::create(CheckerConfig::new().dictionary(defaults()));
    let first = factory.clone().checker(vec![check!(raise_e1)]);
    let second = factory.checker(vec![Check::new(raise_e2)]);

    assert_eq!(first.call([]).next(&[]).unwrap_err().message(), "f1");
    assert_eq!(second.call([]).next(&[]).unwrap_err().message(), "f2");
}

#[test]
fn checkers_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let checker = CheckerFactory::create(CheckerConfig::new().dictionary(defaults()))
        .checker(vec![check!(raise_e1)]);
    assert_send_sync(&checker);

    let worker = checker.clone();
    let message = std::thread::spawn(move || {
        worker.call([]).next(&[]).unwrap_err().message().to_string()
    })
    .join()
    .unwrap();

    assert_eq!(message, "f1");
}

#[test]
fn config_debug_hides_closures() {
    let config = CheckerConfig::new().dictionary(defaults()).on_error(|_| {});

    assert_eq!(
        format!("{:?}", config),
        r#"CheckerConfig { dictionary: Some({"E1", "E2"}), on_error: true }"#
    );
}
