//! Inspect parse errors.

use turtle_lang::{ParseErrorKind, run};

fn main() {
    let inputs = [
        "DOWN. FORW 0.",
        "COLOR 00FF00.",
        "REP 3 \"FORW 1.",
        "DOWN.\nLEFT 90\nFORW 1.",
    ];

    for input in inputs {
        match run(input) {
            Ok(segments) => println!("{input:?}: {} segment(s)", segments.len()),
            Err(err) => {
                println!("{input:?}: {err}");
                if let ParseErrorKind::Lexical(kind) = &err.kind {
                    println!("  lexical error: {kind}");
                }
                println!("  Syntaxfel på rad {}", err.line());
            }
        }
    }
}
