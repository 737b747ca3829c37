#![allow(clippy::unwrap_used)]

use super::*;
use oak_eval::buffer_handler;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_max_depth() {
    assert_eq!(parse_max_depth("250"), Some(250));
    assert_eq!(parse_max_depth(" 12 "), Some(12));
    assert_eq!(parse_max_depth("0"), None);
    assert_eq!(parse_max_depth("-3"), None);
    assert_eq!(parse_max_depth("deep"), None);
}

#[test]
fn test_default_options() {
    let options = RunOptions::default();
    assert_eq!(options.max_call_depth, DEFAULT_MAX_CALL_DEPTH);
    assert_eq!(options.color, ColorMode::Auto);
}

#[test]
fn test_parse_source_keeps_lex_errors() {
    let program = parse_source("class A { def main() { print(1 $); } }").unwrap();
    assert_eq!(program.class.name, "A");
    assert_eq!(program.lex_errors, vec![LexError { found: '$', line: 1 }]);
}

#[test]
fn test_parse_source_reports_first_syntax_error() {
    let err = parse_source("class A { def main() { print(1) } }").unwrap_err();
    let (error, lex_errors) = match err {
        PipelineError::Parse { error, lex_errors } => (error, lex_errors),
        other => panic!("expected a parse failure, got {other:?}"),
    };
    assert_eq!(error.line, 1);
    assert_eq!(error.found, "'}'");
    assert!(lex_errors.is_empty());
}

#[test]
fn test_parse_failure_keeps_lex_errors() {
    let err = parse_source("class A {
 def main() {
  var x = 5 @ 3;
 }
}").unwrap_err();
    let (error, lex_errors) = match err {
        PipelineError::Parse { error, lex_errors } => (error, lex_errors),
        other => panic!("expected a parse failure, got {other:?}"),
    };
    assert_eq!(lex_errors, vec![LexError { found: '@', line: 3 }]);
    assert_eq!(error.line, 3);
    assert_eq!(error.message, "expected ';'");
    assert_eq!(error.found, "'3'");
}

#[test]
fn test_run_source_uses_print_handler() {
    let handler = buffer_handler();
    let options = RunOptions::default().with_print_handler(handler.clone());
    let outcome = run_source("class A { def main() { print(6 * 7); } }", &options).unwrap();
    assert_eq!(outcome, RunOutcome::default());
    assert_eq!(handler.get_output(), "42\n");
}

#[test]
fn test_pipeline_error_wraps_phase() {
    let options = RunOptions::default().with_print_handler(buffer_handler());
    let err = run_source("class A {", &options).unwrap_err();
    assert!(matches!(err, PipelineError::Parse { .. }));

    let err = run_source("class A { def main() { print(1 / 0); } }", &options).unwrap_err();
    assert!(matches!(err, PipelineError::Eval(_)));
}
