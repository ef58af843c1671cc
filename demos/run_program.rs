//! Run a turtle program and print the segments it draws.

fn main() {
    let input = "\
% A square with a red side
DOWN.
REP 4 \"FORW 1. LEFT 90.\"
COLOR #FF0000. FORW 1.
";

    let program = turtle_lang::parse_str(input).expect("parse failed");
    println!("Statements: {}", program.statement_count());

    let segments = turtle_lang::interpret(&program);
    println!("Segments: {}", segments.len());
    print!("{}", turtle_lang::render(&segments));

    println!("\nFormatted source:\n{}", turtle_lang::format(&program));
}
