//! Core value types shared by the board model, move generation and game flow.

use std::fmt;

use crate::chess_errors::ChessErrors;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind; color is carried separately on the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may be rewritten to on the last rank.
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        !matches!(self, PieceKind::Pawn | PieceKind::King)
    }

    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A board coordinate. Row 0 is White's back rank, column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    column: u8,
}

impl Square {
    /// Checked constructor; `row` and `column` must both be in `0..8`.
    pub fn new(row: u8, column: u8) -> Result<Self, ChessErrors> {
        if row > 7 || column > 7 {
            return Err(ChessErrors::InvalidRowOrColumn((row, column)));
        }
        Ok(Self { row, column })
    }

    /// Unchecked constructor for compile-time constants.
    pub(crate) const fn at(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Shift by a row/column delta, `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let column = self.column as i8 + d_column;
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Self {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// Iterate all 64 squares, a1 first, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |column| Square { row, column }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.column),
            char::from(b'1' + self.row)
        )
    }
}

/// Where a piece currently is. Captured pieces stay in the arena so their
/// identity survives for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    OnBoard(Square),
    Captured,
}

impl Placement {
    #[inline]
    pub fn square(self) -> Option<Square> {
        match self {
            Placement::OnBoard(square) => Some(square),
            Placement::Captured => None,
        }
    }
}

/// Stable handle of a piece inside a board's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
