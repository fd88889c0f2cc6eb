use super::{Assignments, Stage, seat_passenger};
use crate::{
    error::Result,
    passenger::{PassengerId, Registry},
    seat_map::SeatMap,
};
use log::debug;
use rand::{Rng, seq::SliceRandom};

/// Pairs still-unseated passengers with the remaining free seats in random
/// order.
///
/// `unassigned` is consumed in the given order. When there are more
/// passengers than free seats the surplus keeps no seat.
///
/// Returns the number of passengers seated.
pub fn allocate<R>(
    seat_map: &mut SeatMap,
    assignments: &mut Assignments,
    registry: &Registry,
    unassigned: &[PassengerId],
    rng: &mut R,
) -> Result<usize>
where
    R: Rng + ?Sized,
{
    let mut free = seat_map.free_seats();
    free.shuffle(rng);

    let mut seated = 0;
    for (&id, seat) in unassigned.iter().zip(free) {
        seat_passenger(seat_map, assignments, registry, id, seat, Stage::Fallback)?;
        if let Some(p) = registry.get(id) {
            debug!("Fallback seat {seat} -> {}", p.name());
        }
        seated += 1;
    }

    if seated < unassigned.len() {
        debug!(
            "{} passengers could not be seated",
            unassigned.len() - seated
        );
    }
    Ok(seated)
}
