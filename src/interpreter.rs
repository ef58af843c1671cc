//! Tree-walking interpreter that drives the turtle and collects the
//! segments it draws.

use std::f64::consts::PI;
use std::fmt;

use crate::ast::{Color, MoveDirection, Node, Program, TurnDirection};
use crate::stack::ensure_sufficient_stack;

/// Coordinates are rounded to this many decimal places after each move.
const ROUNDING_SCALE: f64 = 1e10;

/// Coordinates within this distance of zero become exactly `0.0`.
const ZERO_TOLERANCE: f64 = 1e-10;

/// A point on the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };
}

/// One line drawn with the pen down.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub color: Color,
    pub from: Point,
    pub to: Point,
}

/// `<COLOR> <x1> <y1> <x2> <y2>` with four decimals per coordinate.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.4} {:.4} {:.4} {:.4}",
            self.color, self.from.x, self.from.y, self.to.x, self.to.y
        )
    }
}

/// Pen-carrying cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Turtle {
    pub position: Point,
    /// Degrees counter-clockwise from the positive x axis, in `[0, 360)`.
    pub heading: f64,
    pub pen_down: bool,
    pub color: Color,
}

impl Default for Turtle {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            heading: 0.0,
            pen_down: false,
            color: Color::default(),
        }
    }
}

/// Walks statements against a single turtle.
///
/// State carries over between calls to [`Interpreter::execute`], so a
/// program can be fed in fragments.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    turtle: Turtle,
    segments: Vec<Segment>,
}

impl Interpreter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    /// Segments drawn so far, in draw order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Execute statements in order.
    pub fn execute(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.execute_node(node);
        }
    }

    fn execute_node(&mut self, node: &Node) {
        match node {
            Node::Move {
                direction,
                distance,
            } => {
                let distance = f64::from(*distance);
                match direction {
                    MoveDirection::Forward => self.step(distance),
                    MoveDirection::Back => self.step(-distance),
                }
            }
            Node::Turn { direction, degrees } => {
                let degrees = f64::from(*degrees);
                let heading = match direction {
                    TurnDirection::Left => self.turtle.heading + degrees,
                    TurnDirection::Right => self.turtle.heading - degrees,
                };
                self.turtle.heading = heading.rem_euclid(360.0);
            }
            Node::PenState { down } => self.turtle.pen_down = *down,
            Node::SetColor(color) => self.turtle.color = color.clone(),
            Node::Repeat { count, body } => {
                tracing::trace!(count, "repeat");
                for _ in 0..*count {
                    ensure_sufficient_stack(|| self.execute(body));
                }
            }
        }
    }

    // Unfused arithmetic keeps output identical across targets with and
    // without FMA.
    #[allow(clippy::suboptimal_flops)]
    fn step(&mut self, distance: f64) {
        let theta = PI * self.turtle.heading / 180.0;
        let from = self.turtle.position;
        let to = Point {
            x: snap(from.x + distance * theta.cos()),
            y: snap(from.y + distance * theta.sin()),
        };

        if self.turtle.pen_down {
            self.segments.push(Segment {
                color: self.turtle.color.clone(),
                from,
                to,
            });
        }
        self.turtle.position = to;
    }
}

/// Round to 10 decimals and flush near-zero noise (and `-0.0`) to `0.0`.
fn snap(value: f64) -> f64 {
    let rounded = (value * ROUNDING_SCALE).round() / ROUNDING_SCALE;
    if rounded.abs() > ZERO_TOLERANCE {
        rounded
    } else {
        0.0
    }
}

/// Run a program on a fresh turtle and return the drawn segments.
#[must_use]
#[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
pub fn interpret(program: &Program) -> Vec<Segment> {
    let mut interpreter = Interpreter::new();
    interpreter.execute(&program.statements);
    tracing::debug!(segments = interpreter.segments.len(), "interpreted");
    interpreter.into_segments()
}

/// Render segments as output text, one `\n`-terminated line each.
#[must_use]
pub fn render(segments: &[Segment]) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    for segment in segments {
        let _ = writeln!(out, "{segment}");
    }
    out
}
