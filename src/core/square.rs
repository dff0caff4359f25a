use crate::chess::piece::PieceId;

/// One cell of the 8×8 grid.
///
/// A cell is occupied exactly when it holds a piece id, so the two can never
/// disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Square(Option<PieceId>);

impl Square {
    pub const EMPTY: Square = Square(None);

    #[inline]
    pub fn holding(id: PieceId) -> Square {
        Square(Some(id))
    }

    #[inline]
    pub fn is_occupied(self) -> bool {
        self.0.is_some()
    }

    #[inline]
    pub fn piece(self) -> Option<PieceId> {
        self.0
    }

    /// Empties the cell, returning what it held.
    #[inline]
    pub(crate) fn take(&mut self) -> Option<PieceId> {
        self.0.take()
    }

    #[inline]
    pub(crate) fn set(&mut self, id: Option<PieceId>) {
        self.0 = id;
    }
}
