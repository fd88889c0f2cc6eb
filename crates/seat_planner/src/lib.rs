pub mod allocate;
pub mod config;
pub mod error;
pub mod passenger;
pub mod report;
pub mod roster;
pub mod seat_map;

pub use allocate::{AllocationSummary, Assignment, Assignments, SeatingRun, Stage};
pub use config::PlaneConfig;
pub use error::{Result, SeatingError};
pub use passenger::{Passenger, PassengerId, Registry, SurnameGroup};
pub use seat_map::{Seat, SeatMap};
