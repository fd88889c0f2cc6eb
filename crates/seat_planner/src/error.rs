use crate::seat_map::Seat;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatingError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to parse configuration file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Seat {seat} is already occupied")]
    SeatOccupied { seat: Seat },

    #[error("Seat {seat} is not part of the seat map")]
    UnknownSeat { seat: Seat },

    #[error("Passenger {name} already has seat {seat}")]
    AlreadyAssigned { name: String, seat: Seat },

    #[error("Seat allocation has already been run")]
    AllocationAlreadyRun,

    #[error("Seat allocation has not been run yet")]
    AllocationIncomplete,

    #[error("Duplicate passenger name: {0}")]
    DuplicatePassenger(String),

    #[error("Passenger name is empty")]
    InvalidPassengerName,

    #[error("Invalid CSV header: {0}")]
    CsvHeader(String),

    #[error("Invalid CSV row {row}: expected at least 2 columns, got {got}")]
    CsvRow { row: usize, got: usize },

    #[error("Invalid priority flag at row {row}: {value}")]
    PriorityParse { row: usize, value: String },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SeatingError>;
