//! `yson-fmt` — pretty-print a YSON document snapshot.
//!
//! Usage:
//!   yson-fmt [indent]
//!
//! The snapshot is read from stdin. The optional first argument is the
//! number of spaces per indentation level (default 2).

use docboard_yson::format_with_indent;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let indent = match args.get(1) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("First argument must be an indent width.");
                std::process::exit(1);
            }
        },
        None => 2,
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let formatted = format_with_indent(buf.trim(), indent);
    io::stdout().write_all(formatted.as_bytes()).unwrap();
    io::stdout().write_all(b"\n").unwrap();
}
