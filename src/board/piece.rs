//! Piece colors and the pieces themselves.
//!
//! A piece occupies one cell and carries exactly one color. Capture never
//! removes a piece from the board; it recolors the piece in place.

use serde::{Deserialize, Serialize};

/// The color of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

/// Both colors in declaration order.
pub const ALL_COLORS: [Color; 2] = [Color::Black, Color::White];

impl Color {
    /// Returns the opposing color.
    pub const fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Returns the single-character notation glyph.
    pub const fn glyph(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }

    /// Parses a color from its notation glyph.
    pub fn from_glyph(c: char) -> Option<Color> {
        match c {
            'B' => Some(Color::Black),
            'W' => Some(Color::White),
            _ => None,
        }
    }
}

/// A colored token occupying one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
}

impl Piece {
    /// Creates a piece of the given color.
    pub const fn new(color: Color) -> Self {
        Piece { color }
    }

    /// Returns the piece's current color.
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Recolors the piece to the opposing color in place.
    pub fn flip(&mut self) {
        self.color = self.color.opposite();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for color in ALL_COLORS {
            assert_eq!(color.opposite().opposite(), color);
            assert_ne!(color.opposite(), color);
        }
    }

    #[test]
    fn glyph_roundtrip() {
        for color in ALL_COLORS {
            assert_eq!(Color::from_glyph(color.glyph()), Some(color));
        }
        assert_eq!(Color::from_glyph('x'), None);
        assert_eq!(Color::from_glyph('.'), None);
    }

    #[test]
    fn flip_toggles_color_in_place() {
        let mut piece = Piece::new(Color::Black);
        piece.flip();
        assert_eq!(piece.color(), Color::White);
        piece.flip();
        assert_eq!(piece.color(), Color::Black);
    }
}
