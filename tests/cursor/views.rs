use crate::support::{step, Log};
use serde_json::Value;
use snug_error::{checker, Check, Position};

fn three(log: &Log) -> Vec<Check<Value>> {
    vec![step(log, "a", true), step(log, "b", false), step(log, "namedCheck", true)]
}

#[test]
fn message_is_visible_to_the_dispatched_check() {
    let log = Log::default();
    let cursor = checker(three(&log)).call([]);

    cursor.message("hello").next(&[]).unwrap();

    assert_eq!(log.entries(), vec!["a:hello"]);
}

#[test]
fn message_stays_on_the_view_it_was_bound_to() {
    let log = Log::default();
    let cursor = checker(vec![
        step(&log, "a", true),
        step(&log, "b", true),
        step(&log, "c", true),
        step(&log, "d", true),
    ])
    .call([]);

    let first = cursor.message("x");
    let second = cursor.message("y");

    first.next(&[]).unwrap();
    second.next(&[]).unwrap();
    cursor.next(&[]).unwrap();
    first.next(&[]).unwrap();

    assert_eq!(log.entries(), vec!["a:x", "b:y", "c:", "d:x"]);
    assert!(cursor.bound_message().is_empty());
}

#[test]
fn message_views_share_counter_and_history() {
    let log = Log::default();
    let cursor = checker(three(&log)).call([]);

    cursor.message("first").next(&[]).unwrap();
    assert!(cursor.message("second").next(&[]).is_err());

    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.error_count(), 1);
    assert_eq!(cursor.message("other").errors(), cursor.errors());
}

#[test]
fn number_and_list_messages_show_first_value() {
    let log = Log::default();
    let cursor = checker(vec![step(&log, "a", true), step(&log, "b", true)]).call([]);

    cursor.message(42).next(&[]).unwrap();
    cursor.message(["one", "two"]).next(&[]).unwrap();

    assert_eq!(log.entries(), vec!["a:42", "b:one"]);
}

#[test]
fn pinned_view_reruns_the_same_check() {
    let log = Log::default();
    let cursor = checker(three(&log)).call([]);

    let pinned = cursor.error(1).unwrap();
    for _ in 0..3 {
        assert!(pinned.call(&[]).is_err());
    }

    assert_eq!(pinned.index(), 1);
    assert_eq!(log.entries(), vec!["b:", "b:", "b:"]);
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.error_count(), 3);
}

#[test]
fn pinning_index_zero_never_advances() {
    let log = Log::default();
    let cursor = checker(three(&log)).call([]);

    let pinned = cursor.error(0).unwrap();
    pinned.call(&[]).unwrap();
    pinned.call(&[]).unwrap();

    assert_eq!(log.entries(), vec!["a:", "a:"]);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn named_jump_runs_entry_without_prior_next() {
    let log = Log::default();
    let cursor = checker(three(&log)).call([]);

    cursor.error("namedCheck").unwrap().call(&[]).unwrap();

    assert_eq!(log.entries(), vec!["namedCheck:"]);
    assert_eq!(cursor.position(), 0);

    // The auto-advancing cursor still starts from the top.
    cursor.next(&[]).unwrap();
    assert_eq!(log.entries(), vec!["namedCheck:", "a:"]);
}

#[test]
fn unknown_name_is_rejected_without_recording() {
    let log = Log::default();
    let cursor = checker(three(&log)).call([]);

    let err = cursor.error("doesNotExist").unwrap_err();

    assert_eq!(err.token(), &Position::from("doesNotExist"));
    assert_eq!(err.to_string(), "Invalid position: doesNotExist");
    assert!(cursor.errors().is_empty());
    assert!(log.entries().is_empty());
}

#[test]
fn index_outside_chain_is_rejected() {
    let cursor = checker(three(&Log::default())).call([]);

    assert!(cursor.error(3).is_err());
    assert!(cursor.error(Position::Index(2)).is_ok());
    assert_eq!(cursor.error_count(), 0);
}

#[test]
fn pinned_view_keeps_first_bound_message() {
    let log = Log::default();
    let cursor = checker(three(&log)).call([]);

    let pinned = cursor.message(["x", "y"]).error("a").unwrap();
    pinned.call(&[]).unwrap();
    cursor.error("a").unwrap().call(&[]).unwrap();

    assert_eq!(log.entries(), vec!["a:x", "a:"]);
    assert_eq!(pinned.cursor().bound_message().len(), 1);
}

#[test]
fn check_all_runs_every_check_with_the_bound_message() {
    let log = Log::default();
    let cursor = checker(vec![step(&log, "a", true), step(&log, "b", true)]).call([]);

    cursor.message("all").check_all(&[]).unwrap();

    assert_eq!(log.entries(), vec!["a:all", "b:all"]);
    assert_eq!(cursor.position(), 2);
}

#[test]
fn check_all_stops_at_first_failure() {
    let log = Log::default();
    let cursor = checker(three(&log)).call([]);

    let err = cursor.check_all(&[]).unwrap_err();

    assert_eq!(err.name(), "b");
    assert_eq!(log.entries(), vec!["a:", "b:"]);
    assert_eq!(cursor.error_count(), 1);
}

#[test]
fn check_all_counts_from_the_current_position() {
    let log = Log::default();
    let cursor = checker(vec![step(&log, "a", true), step(&log, "b", true)]).call([]);

    cursor.next(&[]).unwrap();
    let err = cursor.check_all(&[]).unwrap_err();

    assert!(err.is_exhausted());
    assert_eq!(log.entries(), vec!["a:", "b:"]);
}

#[test]
fn failure_history_spans_every_view() {
    let log = Log::default();
    let cursor = checker(three(&log)).call([]);

    let _ = cursor.error("b").unwrap().call(&[]);
    let _ = cursor.message("m").error(1).unwrap().call(&[]);
    let _ = cursor.check_all(&[]);

    let history = cursor.errors();
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|err| err.name() == "b"));
}

#[test]
fn check_can_jump_through_methods() {
    let log = Log::default();
    let cursor = checker(vec![
        Check::new(|ctx, args: &[Value]| ctx.methods().error("target")?.call(args)),
        step(&log, "target", true),
    ])
    .call([]);

    cursor.next(&[]).unwrap();

    assert_eq!(log.entries(), vec!["target:"]);
    assert_eq!(cursor.position(), 1);
}

#[test]
fn bad_jump_inside_a_check_is_recorded() {
    let cursor = checker(vec![Check::new(|ctx, args: &[Value]| {
        ctx.methods().error("nowhere")?.call(args)
    })])
    .call([]);

    let err = cursor.next(&[]).unwrap_err();

    assert_eq!(err.message(), "Invalid position: nowhere");
    assert_eq!(cursor.error_count(), 1);
}

#[test]
fn methods_view_carries_no_message() {
    let log = Log::default();
    let cursor = checker(vec![
        Check::new(|ctx, args: &[Value]| {
            assert!(ctx.message().is_some());
            ctx.methods().next(args)
        }),
        step(&log, "b", true),
    ])
    .call([]);

    cursor.message("outer").next(&[]).unwrap();

    assert_eq!(log.entries(), vec!["b:"]);
}
