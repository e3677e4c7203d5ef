use crate::{
    constants::{AVAILABLE_MARK, TAKEN_MARK},
    error::{CinemaError, Result},
    seat::{Seat, SeatId},
};
use log::debug;
use std::fmt;

/// Seat grid of a single auditorium.
///
/// Rows may have different lengths. The shape is fixed at construction;
/// afterwards only the occupancy of individual seats changes.
///
/// Block operations cover the half-open column range
/// `[start.column, start.column + amount)`, i.e. exactly `amount` seats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Auditorium {
    rows: Vec<Vec<Seat>>, // rows[row][column]
}

impl Auditorium {
    /// Builds a grid with one row per entry, each holding that many seats.
    pub fn new(row_lengths: &[usize]) -> Self {
        let rows: Vec<Vec<Seat>> = row_lengths
            .iter()
            .enumerate()
            .map(|(row, &len)| (0..len).map(|column| Seat::new(row, column)).collect())
            .collect();
        Self { rows }
    }

    /// Builds a grid from untrusted row lengths (e.g. a layout file).
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if any length is negative.
    pub fn from_lengths(row_lengths: &[i64]) -> Result<Self> {
        let lengths = row_lengths
            .iter()
            .enumerate()
            .map(|(row, &len)| {
                usize::try_from(len).map_err(|_| {
                    CinemaError::InvalidConfiguration(format!(
                        "row {row} has invalid length {len}"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(&lengths))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self, row: usize) -> Result<usize> {
        self.row(row).map(<[Seat]>::len)
    }

    pub fn total_seats(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Seat]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// All seats in row/column order
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flatten()
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.rows.get(id.row)?.get(id.column)
    }

    pub fn is_available(&self, id: SeatId) -> Result<bool> {
        self.seat(id)
            .map(Seat::is_available)
            .ok_or(CinemaError::OutOfRange {
                row: id.row,
                column: id.column,
                amount: 1,
            })
    }

    pub fn count_available_seats(&self) -> usize {
        self.seats().filter(|seat| seat.is_available()).count()
    }

    /// Lowest-column available seat of `row`, `None` if the row is full.
    ///
    /// # Errors
    /// Returns `RowOutOfRange` if `row` is not a row of this auditorium.
    pub fn find_first_available_seat_in_row(&self, row: usize) -> Result<Option<SeatId>> {
        Ok(self
            .row(row)?
            .iter()
            .find(|seat| seat.is_available())
            .map(Seat::id))
    }

    /// First available seat scanning rows front to back.
    pub fn find_first_available_seat(&self) -> Option<SeatId> {
        self.seats().find(|seat| seat.is_available()).map(Seat::id)
    }

    /// First seat of the leftmost run of `amount` available seats in `row`.
    ///
    /// An `amount` of zero is satisfied by the first seat of the row,
    /// whatever its state; an empty row yields `None`.
    ///
    /// # Errors
    /// Returns `RowOutOfRange` if `row` is not a row of this auditorium.
    pub fn find_contiguous_block_in_row(&self, row: usize, amount: usize) -> Result<Option<SeatId>> {
        Ok(scan_row(self.row(row)?, amount))
    }

    /// First qualifying block scanning rows front to back.
    pub fn find_contiguous_block(&self, amount: usize) -> Option<SeatId> {
        self.rows.iter().find_map(|seats| scan_row(seats, amount))
    }

    /// Marks `amount` seats taken starting at `start`, moving right.
    ///
    /// Seats in the range are not re-checked: a seat that is already taken
    /// stays taken. An absent `start` is a no-op, so the result of a search
    /// can be passed straight in.
    ///
    /// # Errors
    /// Returns `RowOutOfRange` or `OutOfRange` if the block does not fit in
    /// the row. Nothing is modified in that case.
    pub fn take_block(&mut self, start: impl Into<Option<SeatId>>, amount: usize) -> Result<()> {
        let Some(start) = start.into() else {
            return Ok(());
        };
        self.block_mut(start, amount)?.iter_mut().for_each(Seat::take);
        debug!("Took {amount} seats from {start}");
        Ok(())
    }

    /// Marks `amount` seats available starting at `start`, moving right.
    ///
    /// Same range and no-op rules as [`Auditorium::take_block`].
    ///
    /// # Errors
    /// Returns `RowOutOfRange` or `OutOfRange` if the block does not fit in
    /// the row. Nothing is modified in that case.
    pub fn release_block(&mut self, start: impl Into<Option<SeatId>>, amount: usize) -> Result<()> {
        let Some(start) = start.into() else {
            return Ok(());
        };
        self.block_mut(start, amount)?
            .iter_mut()
            .for_each(Seat::release);
        debug!("Released {amount} seats from {start}");
        Ok(())
    }

    /// Finds the first block of `amount` available seats and takes it.
    ///
    /// Returns the first seat of the reserved block, or `None` when no row
    /// can hold the group (or `amount` is zero). Nothing changes on `None`.
    pub fn reserve_block(&mut self, amount: usize) -> Option<SeatId> {
        if amount == 0 {
            return None;
        }
        let start = self.find_contiguous_block(amount)?;
        self.block_mut(start, amount)
            .ok()?
            .iter_mut()
            .for_each(Seat::take);
        debug!("Reserved {amount} seats from {start}");
        Some(start)
    }

    fn row(&self, row: usize) -> Result<&[Seat]> {
        self.rows
            .get(row)
            .map(Vec::as_slice)
            .ok_or(CinemaError::RowOutOfRange {
                row,
                rows: self.rows.len(),
            })
    }

    fn block_mut(&mut self, start: SeatId, amount: usize) -> Result<&mut [Seat]> {
        let rows = self.rows.len();
        let seats = self
            .rows
            .get_mut(start.row)
            .ok_or(CinemaError::RowOutOfRange {
                row: start.row,
                rows,
            })?;
        let end = start
            .column
            .checked_add(amount)
            .filter(|&end| end <= seats.len())
            .ok_or(CinemaError::OutOfRange {
                row: start.row,
                column: start.column,
                amount,
            })?;
        Ok(&mut seats[start.column..end])
    }
}

/// Running count of free seats, reset on every taken seat.
fn scan_row(seats: &[Seat], amount: usize) -> Option<SeatId> {
    if amount == 0 {
        return seats.first().map(Seat::id);
    }
    let mut run = 0usize;
    for seat in seats {
        if seat.is_taken() {
            run = 0;
            continue;
        }
        run += 1;
        if run == amount {
            return Some(SeatId::new(seat.row(), seat.column() + 1 - amount));
        }
    }
    None
}

impl fmt::Display for Auditorium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, seats) in self.rows.iter().enumerate() {
            write!(f, "{row:>3} |")?;
            for seat in seats {
                let mark = if seat.is_taken() {
                    TAKEN_MARK
                } else {
                    AVAILABLE_MARK
                };
                write!(f, "{mark}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
