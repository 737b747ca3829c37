#![allow(clippy::unwrap_used)]

use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E6002)
        .with_message("division by zero")
        .with_line(4)
        .with_note("backtrace: Calc.divide <- Calc.main")
        .with_suggestion("check the divisor before dividing")
}

fn render(mode: ColorMode, diagnostic: &Diagnostic) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    emitter.emit(diagnostic);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

fn summary(errors: usize, warnings: usize) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(errors, warnings);
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    assert_eq!(
        render(ColorMode::Never, &sample_diagnostic()),
        "error[E6002]: division by zero\n\
         \x20 --> line 4\n\
         \x20 = note: backtrace: Calc.divide <- Calc.main\n\
         \x20 = help: check the divisor before dividing\n\n"
    );
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(ColorMode::Always, &sample_diagnostic());
    assert!(text.contains(colors::ERROR));
    assert!(text.contains(colors::RESET));
    assert!(text.contains("division by zero"));
}

#[test]
fn test_auto_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
}

#[test]
fn test_path_location() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("could not read source file")
        .with_path("prog.oak");
    assert_eq!(
        render(ColorMode::Never, &diag),
        "error[E0001]: could not read source file\n  --> prog.oak\n\n"
    );
}

#[test]
fn test_no_location() {
    let diag = Diagnostic::error(ErrorCode::E6001).with_message("no `main` method found");
    assert_eq!(
        render(ColorMode::Never, &diag),
        "error[E6001]: no `main` method found\n\n"
    );
}

#[test]
fn test_emit_all() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_all(&[
        Diagnostic::warning(ErrorCode::E0002).with_message("unknown character `$`"),
        Diagnostic::warning(ErrorCode::E0002).with_message("unknown character `#`"),
    ]);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(text.matches("warning[E0002]").count(), 2);
}

#[test]
fn test_summary() {
    assert_eq!(summary(0, 0), "");
    assert_eq!(summary(1, 0), "error: aborting due to previous error\n");
    assert_eq!(summary(3, 0), "error: aborting due to 3 previous errors\n");
    assert_eq!(
        summary(1, 2),
        "error: aborting due to previous error; 2 warnings emitted\n"
    );
    assert_eq!(summary(0, 1), "warning: 1 warning emitted\n");
}
