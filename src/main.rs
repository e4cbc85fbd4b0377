use std::{env, fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{debug, LevelFilter};
use monkey::{
    errors::errors::{ErrorTip, ParseError},
    lexer::lexer::tokenize,
    parser::parser::parse,
};
use rustyline::{error::ReadlineError, DefaultEditor};

const PROMPT: &str = ">> ";

/// Parses Monkey source and prints the canonical form of the program.
/// Without a file it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to parse once instead of starting the prompt.
    file: Option<PathBuf>,

    /// Print the token stream instead of the parsed program.
    #[arg(short, long)]
    tokens: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match &args.file {
        Some(path) => {
            let source = match fs::read_to_string(path) {
                Ok(source) => source,
                Err(err) => {
                    eprintln!("Failed to read '{}': {}", path.display(), err);
                    return ExitCode::FAILURE;
                }
            };

            if run(&source, args.tokens) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        None => repl(args.tokens),
    }
}

/// Lexes or parses one chunk of source and prints the result.
/// Returns false when the parser reported diagnostics.
fn run(source: &str, show_tokens: bool) -> bool {
    if show_tokens {
        for token in tokenize(source) {
            println!("{}", token);
        }
        return true;
    }

    let (program, errors) = parse(source);
    if !errors.is_empty() {
        print_parse_errors(&errors);
        return false;
    }

    println!("{}", program);
    true
}

fn repl(show_tokens: bool) -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("Failed to start the prompt: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let user = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("there"));
    print!("{}", greeting(&user));

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(err) = editor.add_history_entry(line.as_str()) {
                    debug!("history not updated: {}", err);
                }
                run(&line, show_tokens);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{:?}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn greeting(user: &str) -> String {
    format!(
        "Hello {}! This is the Monkey programming language!\nEnter commands\n",
        user
    )
}

fn print_parse_errors(errors: &[ParseError]) {
    println!("parser errors:");
    for error in errors {
        match error.get_tip() {
            ErrorTip::None => println!("\t{}", error),
            tip => println!("\t{} ({})", error, tip),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_names_user() {
        assert_eq!(
            greeting("ada"),
            "Hello ada! This is the Monkey programming language!\nEnter commands\n"
        );
    }

    #[test]
    fn test_run_reports_diagnostics() {
        assert!(run("let x = 1;", false));
        assert!(!run("let x 1;", false));
        assert!(run("let x 1;", true));
    }
}
