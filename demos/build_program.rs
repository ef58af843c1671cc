//! Build a turtle program with the builder API.

use turtle_lang::{Color, Program};

fn main() {
    let star = Program::new()
        .down()
        .color("#FFA500".parse::<Color>().expect("valid color"))
        .rep(5, Program::new().forw(10).right(144));

    println!("{}", turtle_lang::format(&star));
    for segment in turtle_lang::interpret(&star) {
        println!("{segment}");
    }
}
