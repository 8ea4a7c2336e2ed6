/// What a cell currently represents. Travels with the cell when the body shifts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Empty,
    Apple,
    Head,
    Body,
    Tail,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Blue,
    Green,
    Purple,
}

/// A square on the playfield, positioned in pixels with y growing upward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub role: Role,
    pub color: Color,
}

impl Cell {
    pub fn new(x: i32, y: i32, size: i32, role: Role, color: Color) -> Self {
        Cell { x, y, size, role, color }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Position equality only; role and color are presentation state.
    pub fn same_position(&self, other: &Cell) -> bool {
        self.x == other.x && self.y == other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_equality_ignores_role_and_color() {
        let a = Cell::new(45, 90, 45, Role::Head, Color::Blue);
        let b = Cell::new(45, 90, 45, Role::Apple, Color::Green);
        let c = Cell::new(90, 45, 45, Role::Head, Color::Blue);

        assert!(a.same_position(&b));
        assert!(!a.same_position(&c));
        assert_ne!(a, b);
    }
}
