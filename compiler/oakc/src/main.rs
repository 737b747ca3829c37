//! Oak interpreter CLI.

use std::process::ExitCode;

use oak_diagnostic::ErrorCode;
use oakc::commands::{lex_file, parse_file, parse_file_args, run_file, FileArgs, FileCommand};
use oakc::{init_tracing, RunOptions};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let command = &args[1];

    let file_command = match command.as_str() {
        "run" => Some(FileCommand::Run),
        "lex" => Some(FileCommand::Lex),
        "parse" => Some(FileCommand::Parse),
        _ => None,
    };
    if let Some(file_command) = file_command {
        return match parse_file_args(file_command, &args[2..], RunOptions::from_env()) {
            Ok(FileArgs { path, options }) => match file_command {
                FileCommand::Run => run_file(&path, &options),
                FileCommand::Lex => lex_file(&path, options.color),
                FileCommand::Parse => parse_file(&path, options.color),
            },
            Err(err) => {
                eprintln!("error: {err}");
                eprintln!("{}", file_command.usage());
                ExitCode::FAILURE
            }
        };
    }

    match command.as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("Oak {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("Oak interpreter");
    eprintln!();
    eprintln!("Usage: oak <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file.oak>      Run an Oak program");
    eprintln!("  lex <file.oak>      Tokenize and print one token per line");
    eprintln!("  parse <file.oak>    Parse and print the syntax tree");
    eprintln!("  help                Show this help message");
    eprintln!("  version             Show version information");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --max-depth=N       Call depth limit (default: 10000, env: OAK_MAX_DEPTH)");
    eprintln!("  --color=<mode>      Diagnostic colors: auto, always, never");
    eprintln!();
    eprintln!("Error codes:");
    for code in ErrorCode::ALL {
        eprintln!("  {code}               {}", code.description());
    }
    eprintln!();
    eprintln!("Logging:");
    eprintln!("  RUST_LOG=oak_eval=debug oak run main.oak");
    eprintln!("  OAK_LOG_TREE=1 RUST_LOG=debug oak run main.oak   # indented span tree");
}
