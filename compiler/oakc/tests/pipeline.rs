//! Whole-program tests through the driver pipeline.
//!
//! Programs run with output captured by a buffer print handler.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use oak_diagnostic::ErrorCode;
use oak_eval::{buffer_handler, ErrorCategory, EvalError, EvalErrorKind};
use oak_lexer::{render_tokens, tokenize};
use oakc::problem::{pipeline_diagnostics, pipeline_error};
use oakc::{parse_source, run_program, run_source, PipelineError, RunOptions, RunOutcome};
use pretty_assertions::assert_eq;

fn options() -> RunOptions {
    RunOptions::default().with_print_handler(buffer_handler())
}

fn run(source: &str) -> Result<String, PipelineError> {
    let options = options();
    run_source(source, &options)?;
    Ok(options.print_handler.get_output())
}

fn run_main(body: &str) -> String {
    run(&format!("class Main {{ def main() {{ {body} }} }}")).expect("program should run")
}

fn eval_error(source: &str) -> EvalError {
    match run(source) {
        Err(PipelineError::Eval(err)) => err,
        other => panic!("expected runtime failure, got {other:?}"),
    }
}

fn main_error(body: &str) -> EvalError {
    eval_error(&format!("class Main {{ def main() {{ {body} }} }}"))
}

#[test]
fn relexing_rendered_tokens_is_idempotent() {
    let source = r#"
        class Main {
            // comment
            def main() {
                var s = "text with // no comment";
                for (var i = 0; i < 3; i++) { s += "!"; }
                print(s >>> 1 <= 2 ** 3);
            }
        }
    "#;
    let first = tokenize(source);
    let second = tokenize(&render_tokens(&first.tokens));
    let kinds_and_text = |out: &oak_lexer::LexOutput| {
        out.tokens
            .iter()
            .map(|t| (t.kind, t.text.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(kinds_and_text(&first), kinds_and_text(&second));
}

#[test]
fn division_and_modulo_by_zero_are_arithmetic_errors() {
    for body in [
        "print(1 / 0);",
        "print(1 % 0);",
        "print(1.0 / 0.0);",
        "print(1.5 % 0.0);",
    ] {
        let err = main_error(body);
        assert_eq!(err.category(), ErrorCategory::Arithmetic, "{body}");
    }
}

#[test]
fn string_concatenation_takes_precedence() {
    assert_eq!(run_main(r#"print("a" + 1); print(1 + "a");"#), "a1\n1a\n");
}

#[test]
fn lists_are_shared_through_aliases() {
    assert_eq!(
        run_main("var x = list(1, 2); var y = 0; y = x; x.append(3); print(y); print(y.length);"),
        "[1, 2, 3]\n3\n"
    );
}

#[test]
fn classic_for_loop_counts() {
    assert_eq!(
        run_main("for (var i = 0; i < 3; i = i + 1) { print(i); }"),
        "0\n1\n2\n"
    );
}

#[test]
fn list_length_and_out_of_bounds() {
    assert_eq!(run_main("var xs = list(1, 2, 3); print(xs.length);"), "3\n");

    let err = main_error("print([1, 2, 3][5]);");
    assert_eq!(err.category(), ErrorCategory::Runtime);
    assert!(matches!(err.kind, EvalErrorKind::IndexOutOfBounds { .. }));
}

#[test]
fn assignment_updates_and_undeclared_assignment_fails() {
    assert_eq!(run_main("var x = 5; x = x + 1; print(x);"), "6\n");

    let options = options();
    let err = run_source(
        "class Main { def main() { print(1); y = 2; print(2); } }",
        &options,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Eval(EvalError {
            kind: EvalErrorKind::UndeclaredAssignment { .. },
            ..
        })
    ));
    assert_eq!(options.print_handler.get_output(), "1\n");
}

#[test]
fn recursion_keeps_locals_per_call() {
    let source = "
        class Main {
            def fact(n) {
                var local = n;
                if (n <= 1) { return 1; }
                var rest = fact(n - 1);
                return local * rest;
            }
            def main() {
                print(fact(10));
            }
        }
    ";
    assert_eq!(run(source).unwrap(), "3628800\n");
}

#[test]
fn runaway_recursion_overflows_and_interpreter_stays_usable() {
    let options = options().with_max_call_depth(200);
    let mut interpreter = options.interpreter();

    let runaway = parse_source("class R { def down() { down(); } def main() { down(); } }").unwrap();
    let err = run_program(&mut interpreter, runaway).unwrap_err();
    let PipelineError::Eval(err) = &err else {
        panic!("expected stack overflow, got {err:?}");
    };
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 200 });
    assert_eq!(interpreter.call_depth(), 0);

    let fine = parse_source("class Ok { def main() { print(\"still here\"); } }").unwrap();
    run_program(&mut interpreter, fine).unwrap();
    assert_eq!(options.print_handler.get_output(), "still here\n");
}

#[test]
fn default_depth_limit_catches_runaway_recursion() {
    let err = eval_error("class R { def main() { main(); } }");
    assert_eq!(err.category(), ErrorCategory::StackOverflow);
    assert_eq!(
        pipeline_error(&PipelineError::Eval(err)).code,
        ErrorCode::E6003
    );
}

#[test]
fn lex_errors_are_not_fatal() {
    let options = options();
    let outcome = run_source("class Main { def main() { print(1 # + 1); } }", &options).unwrap();
    assert_eq!(outcome.lex_errors.len(), 1);
    assert_eq!(options.print_handler.get_output(), "2\n");
}

#[test]
fn clean_program_has_empty_outcome() {
    let outcome = run_source("class Main { def main() { } }", &options()).unwrap();
    assert_eq!(outcome, RunOutcome::default());
}

#[test]
fn syntax_error_maps_to_e1001() {
    let err = run("class Main { def main() { print(1) } }").unwrap_err();
    assert!(matches!(err, PipelineError::Parse { .. }));
    let diag = pipeline_error(&err);
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.line, Some(1));
}

#[test]
fn syntax_error_still_reports_skipped_characters() {
    let err = run("class Main {
 def main() {
  var x = 5 @ 3;
 }
}").unwrap_err();
    let diagnostics = pipeline_diagnostics(&err);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].code, ErrorCode::E0002);
    assert_eq!(diagnostics[0].message, "unknown character '@' skipped");
    assert_eq!(diagnostics[0].line, Some(3));
    assert_eq!(diagnostics[1].code, ErrorCode::E1001);
    assert_eq!(diagnostics[1].message, "expected ';'");
    assert_eq!(diagnostics[1].line, Some(3));
}

#[test]
fn runtime_error_reports_line_and_call_stack() {
    let source = "class Calc {
    def divide(a, b) {
        return a / b;
    }
    def main() {
        print(divide(1, 0));
    }
}";
    let err = eval_error(source);
    assert_eq!(err.line, Some(3));
    assert_eq!(err.backtrace, vec!["Calc.divide", "Calc.main"]);

    let diag = pipeline_error(&PipelineError::Eval(err));
    assert_eq!(diag.code, ErrorCode::E6002);
    assert_eq!(diag.line, Some(3));
    assert_eq!(diag.notes, vec!["call stack:\n  0: Calc.divide\n  1: Calc.main"]);
}

#[test]
fn control_flow_program() {
    let source = r#"
        class Main {
            def classify(n) {
                return n % 15 == 0 ? "FizzBuzz" : n % 3 == 0 ? "Fizz" : n % 5 == 0 ? "Buzz" : "" + n;
            }
            def main() {
                var out = list();
                var i = 1;
                while (true) {
                    if (i > 15) { break; }
                    out.append(classify(i));
                    i++;
                }
                print(out);
                for (var word : out) {
                    if (word.length() < 5) { continue; }
                    print(word);
                }
            }
        }
    "#;
    assert_eq!(
        run(source).unwrap(),
        "[1, 2, Fizz, 4, Buzz, Fizz, 7, 8, Fizz, Buzz, 11, Fizz, 13, 14, FizzBuzz]\nFizzBuzz\n"
    );
}
