use crate::{
    error::{Result, SeatingError},
    seat_map::Seat,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, path::Path};

const ENV_SEED: &str = "SEAT_PLANNER_SEED";

pub const DEFAULT_ROWS: usize = 4;
pub const DEFAULT_SEATS_PER_ROW: usize = 6;
pub const DEFAULT_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Aircraft layout and allocation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaneConfig {
    pub rows: usize,
    pub seats_per_row: usize,
    /// Ordered row letters; only the first `seats_per_row` are used
    pub letters: Vec<char>,
    pub priority_seats: Vec<Seat>,
    /// Seed for the fallback shuffle (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seats_per_row: DEFAULT_SEATS_PER_ROW,
            letters: DEFAULT_LETTERS.to_vec(),
            priority_seats: vec![
                Seat::new(0, 'A'),
                Seat::new(0, 'F'),
                Seat::new(1, 'C'),
                Seat::new(1, 'D'),
            ],
            seed: None,
        }
    }
}

impl PlaneConfig {
    /// Loads a TOML config file. Missing keys fall back to the reference plane.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| SeatingError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Applies `SEAT_PLANNER_SEED` on top of the current settings.
    pub fn apply_env(mut self) -> Result<Self> {
        if let Ok(seed) = env::var(ENV_SEED)
            && !seed.trim().is_empty()
        {
            let parsed = seed.trim().parse::<u64>().map_err(|_| {
                SeatingError::InvalidConfiguration(format!("{ENV_SEED} is not a u64: {seed}"))
            })?;
            self.seed = Some(parsed);
        }
        Ok(self)
    }

    /// Letters actually used by the generated grid
    pub fn active_letters(&self) -> &[char] {
        let end = self.seats_per_row.min(self.letters.len());
        &self.letters[..end]
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.seats_per_row
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(SeatingError::InvalidConfiguration(
                "rows must be at least 1".to_string(),
            ));
        }
        if self.seats_per_row == 0 {
            return Err(SeatingError::InvalidConfiguration(
                "seats_per_row must be at least 1".to_string(),
            ));
        }
        if self.seats_per_row > self.letters.len() {
            return Err(SeatingError::InvalidConfiguration(format!(
                "seats_per_row ({}) exceeds available letters ({})",
                self.seats_per_row,
                self.letters.len()
            )));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.letters.iter().find(|l| !seen.insert(**l)) {
            return Err(SeatingError::InvalidConfiguration(format!(
                "duplicate row letter: {dup}"
            )));
        }

        let letters = self.active_letters();
        for seat in &self.priority_seats {
            if seat.row >= self.rows || !letters.contains(&seat.letter) {
                return Err(SeatingError::InvalidConfiguration(format!(
                    "priority seat {seat} lies outside the {}x{} grid",
                    self.rows, self.seats_per_row
                )));
            }
        }
        Ok(())
    }
}
