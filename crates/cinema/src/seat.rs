use serde::{Deserialize, Serialize};
use std::fmt;

/// Seat coordinates (zero-based row and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatId {
    pub row: usize,
    pub column: usize,
}

impl SeatId {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, seat {}", self.row, self.column)
    }
}

/// A single seat. Coordinates are fixed at creation, only occupancy changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    id: SeatId,
    taken: bool,
}

impl Seat {
    pub(crate) fn new(row: usize, column: usize) -> Self {
        Self {
            id: SeatId::new(row, column),
            taken: false,
        }
    }

    pub fn id(&self) -> SeatId {
        self.id
    }

    pub fn row(&self) -> usize {
        self.id.row
    }

    pub fn column(&self) -> usize {
        self.id.column
    }

    pub fn is_available(&self) -> bool {
        !self.taken
    }

    pub fn is_taken(&self) -> bool {
        self.taken
    }

    pub(crate) fn take(&mut self) {
        self.taken = true;
    }

    pub(crate) fn release(&mut self) {
        self.taken = false;
    }
}
