use crate::{
    config::PlaneConfig,
    error::{Result, SeatingError},
    passenger::PassengerId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seat coordinate (0-based row, row letter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Seat {
    pub row: usize,
    pub letter: char,
}

impl Seat {
    pub fn new(row: usize, letter: char) -> Self {
        Self { row, letter }
    }
}

impl fmt::Display for Seat {
    /// Rows are shown 1-based, e.g. `1A`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row + 1, self.letter)
    }
}

/// Fixed grid of seats, each empty or holding one passenger.
///
/// Occupants are stored row-major in `cells[row * width + col]`.
#[derive(Debug, Clone)]
pub struct SeatMap {
    rows: usize,
    letters: Vec<char>,
    cells: Vec<Option<PassengerId>>,
}

impl SeatMap {
    /// Builds an empty grid from a validated configuration
    pub fn new(config: &PlaneConfig) -> Result<Self> {
        config.validate()?;
        let letters = config.active_letters().to_vec();
        Ok(Self {
            rows: config.rows,
            cells: vec![None; config.rows * letters.len()],
            letters,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn width(&self) -> usize {
        self.letters.len()
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Column position of a letter within a row
    pub fn letter_index(&self, letter: char) -> Option<usize> {
        self.letters.iter().position(|&l| l == letter)
    }

    fn cell_index(&self, seat: Seat) -> Option<usize> {
        if seat.row >= self.rows {
            return None;
        }
        self.letter_index(seat.letter)
            .map(|col| seat.row * self.width() + col)
    }

    pub fn contains(&self, seat: Seat) -> bool {
        self.cell_index(seat).is_some()
    }

    /// Returns false for seats outside the grid.
    pub fn is_free(&self, seat: Seat) -> bool {
        self.cell_index(seat)
            .is_some_and(|idx| self.cells[idx].is_none())
    }

    pub fn occupant(&self, seat: Seat) -> Option<PassengerId> {
        self.cell_index(seat).and_then(|idx| self.cells[idx])
    }

    /// Places a passenger. An occupied seat is never overwritten.
    pub fn occupy(&mut self, seat: Seat, passenger: PassengerId) -> Result<()> {
        let idx = self
            .cell_index(seat)
            .ok_or(SeatingError::UnknownSeat { seat })?;
        if self.cells[idx].is_some() {
            return Err(SeatingError::SeatOccupied { seat });
        }
        self.cells[idx] = Some(passenger);
        Ok(())
    }

    /// Seats of one row, left to right
    pub fn row_seats(&self, row: usize) -> impl Iterator<Item = Seat> + '_ {
        self.letters.iter().map(move |&letter| Seat::new(row, letter))
    }

    /// All seats in row-major order
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        (0..self.rows).flat_map(move |row| self.row_seats(row))
    }

    pub fn free_seats(&self) -> Vec<Seat> {
        self.seats().filter(|&seat| self.is_free(seat)).collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
