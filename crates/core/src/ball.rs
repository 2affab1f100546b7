//! Ball position and heading.

use crate::types::Board;

/// Direction of travel along one axis.
///
/// The ball always moves exactly one cell per tick on each axis, so only the
/// sign is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Negative,
    Positive,
}

impl Heading {
    pub fn flip(self) -> Self {
        match self {
            Heading::Negative => Heading::Positive,
            Heading::Positive => Heading::Negative,
        }
    }

    /// Per-tick displacement (`-1.0` or `1.0`).
    pub fn as_f64(self) -> f64 {
        match self {
            Heading::Negative => -1.0,
            Heading::Positive => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub dx: Heading,
    pub dy: Heading,
}

impl Ball {
    pub fn new(x: f64, y: f64, dx: Heading, dy: Heading) -> Self {
        Self { x, y, dx, dy }
    }

    /// A ball served from the middle of `board`, heading down and to the right.
    pub fn served(board: &Board) -> Self {
        let (x, y) = board.center();
        Self::new(x, y, Heading::Positive, Heading::Positive)
    }

    /// Move one step along the current heading.
    pub fn advance(&mut self) {
        self.x += self.dx.as_f64();
        self.y += self.dy.as_f64();
    }

    pub fn bounce_x(&mut self) {
        self.dx = self.dx.flip();
    }

    pub fn bounce_y(&mut self) {
        self.dy = self.dy.flip();
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.dx.as_f64(), self.dy.as_f64())
    }
}
