use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn unreadable(path: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .with_message(format!("could not read `{path}`"))
        .with_path(path)
}

#[test]
fn test_empty_queue() {
    let queue = DiagnosticQueue::new();
    assert!(queue.is_empty());
    assert!(!queue.has_errors());
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_counts_by_severity() {
    let mut queue = DiagnosticQueue::new();
    queue.push(Diagnostic::warning(ErrorCode::E0002).with_message("unknown character `#`"));
    assert!(!queue.has_errors());
    assert_eq!(queue.warning_count(), 1);

    queue.push(unreadable("missing.oak"));
    assert!(queue.has_errors());
    assert_eq!(queue.error_count(), 1);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_preserves_arrival_order() {
    let mut queue = DiagnosticQueue::new();
    queue.extend([unreadable("a.oak"), unreadable("b.oak")]);
    let paths: Vec<_> = queue.iter().filter_map(|d| d.path.as_deref()).collect();
    assert_eq!(paths, vec!["a.oak", "b.oak"]);
}

#[test]
fn test_flush_empties_queue() {
    let mut queue = DiagnosticQueue::new();
    queue.push(unreadable("a.oak"));
    let drained = queue.flush();
    assert_eq!(drained.len(), 1);
    assert!(queue.is_empty());
    assert!(!queue.has_errors());
    assert_eq!(queue.error_count(), 0);
}
