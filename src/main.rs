use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use mathlet::{eval_line, interpreter::evaluator::env::Environment, run_source};

/// mathlet is an easy to use interpreter for arithmetic expressions with
/// scoped definitions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mathlet to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the last value a
    /// mathlet script produced.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The script to run. When omitted, mathlet starts an interactive
    /// session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = run_source(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}

/// Reads lines from standard input and evaluates them until end of input.
///
/// Definitions persist across lines; expressions print their value. Errors
/// are reported without ending the session.
fn repl() {
    let mut env = Environment::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        match eval_line(&line, &mut env) {
            Ok(Some(value)) => println!("= {value}"),
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }
    }
}
