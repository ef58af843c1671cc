use crate::ast::{Color, MoveDirection, Node, Program, TurnDirection};

impl Program {
    /// Create an empty program.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Append a statement.
    #[must_use]
    pub fn statement(mut self, node: Node) -> Self {
        self.statements.push(node);
        self
    }

    /// Append `FORW distance.`.
    #[must_use]
    pub fn forw(self, distance: u32) -> Self {
        self.statement(Node::forw(distance))
    }

    /// Append `BACK distance.`.
    #[must_use]
    pub fn back(self, distance: u32) -> Self {
        self.statement(Node::back(distance))
    }

    /// Append `LEFT degrees.`.
    #[must_use]
    pub fn left(self, degrees: u32) -> Self {
        self.statement(Node::left(degrees))
    }

    /// Append `RIGHT degrees.`.
    #[must_use]
    pub fn right(self, degrees: u32) -> Self {
        self.statement(Node::right(degrees))
    }

    /// Append `DOWN.`.
    #[must_use]
    pub fn down(self) -> Self {
        self.statement(Node::PenState { down: true })
    }

    /// Append `UP.`.
    #[must_use]
    pub fn up(self) -> Self {
        self.statement(Node::PenState { down: false })
    }

    /// Append `COLOR #RRGGBB.`.
    #[must_use]
    pub fn color(self, color: Color) -> Self {
        self.statement(Node::SetColor(color))
    }

    /// Append a repeat whose body is the statements of `body`.
    #[must_use]
    pub fn rep(self, count: u32, body: Self) -> Self {
        self.statement(Node::Repeat {
            count,
            body: body.statements,
        })
    }
}

impl Node {
    #[must_use]
    pub const fn forw(distance: u32) -> Self {
        Self::Move {
            direction: MoveDirection::Forward,
            distance,
        }
    }

    #[must_use]
    pub const fn back(distance: u32) -> Self {
        Self::Move {
            direction: MoveDirection::Back,
            distance,
        }
    }

    #[must_use]
    pub const fn left(degrees: u32) -> Self {
        Self::Turn {
            direction: TurnDirection::Left,
            degrees,
        }
    }

    #[must_use]
    pub const fn right(degrees: u32) -> Self {
        Self::Turn {
            direction: TurnDirection::Right,
            degrees,
        }
    }
}
