//! Spark interpreter CLI.
//!
//! `spark FILE` evaluates every datum in the file and prints each value.
//! Without a file, reads programs line by line from stdin.

use std::io::{self, BufRead, Write};

use sparkc::{init_tracing, Session, SparkError, DEFAULT_MAX_CALL_DEPTH};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let mut max_depth = Some(DEFAULT_MAX_CALL_DEPTH);
    let mut path: Option<&str> = None;

    for arg in args.iter().skip(1) {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            match value.parse::<usize>() {
                Ok(n) => max_depth = Some(n),
                Err(_) => {
                    eprintln!("error: invalid --max-depth value `{value}`");
                    std::process::exit(2);
                }
            }
        } else if arg == "--no-depth-limit" {
            max_depth = None;
        } else if arg == "--help" || arg == "-h" {
            print_usage();
            return;
        } else if !arg.starts_with('-') && path.is_none() {
            path = Some(arg.as_str());
        } else {
            eprintln!("error: unexpected argument `{arg}`");
            print_usage();
            std::process::exit(2);
        }
    }

    let session = Session::new().with_max_call_depth(max_depth);
    match path {
        Some(path) => run_file(&session, path),
        None => repl(&session),
    }
}

fn print_usage() {
    eprintln!("Usage: spark [options] [FILE]");
    eprintln!();
    eprintln!("Evaluates FILE, or starts a REPL on stdin when no file is given.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --max-depth=<n>     Maximum closure call depth (default: {DEFAULT_MAX_CALL_DEPTH})");
    eprintln!("  --no-depth-limit    Disable the call depth limit");
    eprintln!("  -h, --help          Show this message");
}

fn run_file(session: &Session, path: &str) {
    let src = match std::fs::read_to_string(path) {
        Ok(src) => src,
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            std::process::exit(1);
        }
    };

    let trees = match session.read_all(&src) {
        Ok(trees) => trees,
        Err(err) => {
            report(&err);
            std::process::exit(1);
        }
    };

    for tree in &trees {
        match session.eval_datum(tree) {
            Ok(value) => println!("{value}"),
            Err(err) => {
                report(&err);
                std::process::exit(1);
            }
        }
    }
}

fn repl(session: &Session) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("spark> ");
        if io::stdout().flush().is_err() {
            return;
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("error: {e}");
                return;
            }
            None => {
                println!();
                return;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":quit" {
            return;
        }
        match session.eval_all(line) {
            Ok(values) => {
                for value in values {
                    println!("{value}");
                }
            }
            Err(err) => report(&err),
        }
    }
}

fn report(err: &SparkError) {
    eprintln!("error: {err}");
    if let Some(backtrace) = err.as_eval().and_then(|e| e.backtrace.as_ref()) {
        eprint!("{backtrace}");
    }
}
