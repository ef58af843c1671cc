#![allow(dead_code)]

use turtle_lang::{ParseError, format, parse_str, render, run};

/// Run a program that must be valid and return its rendered output.
pub fn output(input: &str) -> String {
    let segments = run(input).unwrap_or_else(|e| {
        panic!("run failed: {e}\n--- input ---\n{input}");
    });
    render(&segments)
}

/// Run a program that must be invalid and return the error.
pub fn error(input: &str) -> ParseError {
    match run(input) {
        Ok(segments) => panic!(
            "expected a syntax error, got {} segment(s)\n--- input ---\n{input}",
            segments.len()
        ),
        Err(e) => e,
    }
}

/// Format a parsed program, re-parse it, and assert the AST survived.
pub fn roundtrip(input: &str) {
    let original = parse_str(input).expect("parse failed");
    let formatted = format(&original);
    let reparsed = parse_str(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });
    assert_eq!(
        original, reparsed,
        "round-trip mismatch\n--- formatted ---\n{formatted}"
    );
}

/// Split an output line into its color and four coordinates.
pub fn parse_line(line: &str) -> (String, [f64; 4]) {
    let mut fields = line.split(' ');
    let color = fields.next().expect("color field").to_string();
    let mut coords = [0.0; 4];
    for slot in &mut coords {
        *slot = fields
            .next()
            .expect("coordinate field")
            .parse()
            .expect("coordinate is a float");
    }
    assert!(fields.next().is_none(), "trailing fields in {line:?}");
    (color, coords)
}
