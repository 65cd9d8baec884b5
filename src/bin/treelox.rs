//! Interactive Lox prompt.
//!
//! Reads one line at a time from standard input until end of input,
//! running each line through scan → parse → evaluate. Diagnostics go to
//! stderr; when a line produced any scanner or parser diagnostic it is
//! reported and *not* evaluated. Empty lines are ignored. End of input
//! exits cleanly with status 0.

use std::io::{self, BufRead, Write};

use treelox::{evaluate, parse, scan};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut input = String::new();
    loop {
        stdout.write_all(b"> ")?;
        stdout.flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        if input.trim().is_empty() {
            continue;
        }
        run(&input);
    }

    Ok(())
}

fn run(source: &str) {
    let (tokens, scan_diagnostics) = scan(source);

    let mut had_diagnostic = !scan_diagnostics.is_empty();
    for diagnostic in &scan_diagnostics {
        eprintln!("{}", diagnostic);
    }

    let mut statements = Vec::new();
    for result in parse(tokens) {
        match result {
            Ok(statement) => statements.push(statement),
            Err(diagnostic) => {
                had_diagnostic = true;
                eprintln!("{}", diagnostic);
            }
        }
    }

    if had_diagnostic {
        return;
    }

    if let Err(error) = evaluate(&statements, |line| println!("{}", line)) {
        eprintln!("{}", error);
    }
}
