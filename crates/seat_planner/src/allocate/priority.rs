use super::{Assignments, Stage, seat_passenger};
use crate::{
    error::Result,
    passenger::{PassengerId, Registry},
    seat_map::{Seat, SeatMap},
};
use log::debug;
use std::{cmp::Reverse, collections::BinaryHeap};

/// Seats paid-priority passengers in the designated priority seats.
///
/// Passengers are served by input position (earliest first); seats are
/// visited in row order, then by letter position within the row. Priority
/// passengers who find no free priority seat are left for later stages.
///
/// Returns the number of passengers seated.
pub fn allocate(
    seat_map: &mut SeatMap,
    assignments: &mut Assignments,
    registry: &Registry,
    priority_seats: &[Seat],
) -> Result<usize> {
    let mut queue: BinaryHeap<Reverse<PassengerId>> = registry
        .priority_ids()
        .filter(|&id| !assignments.contains(id))
        .map(Reverse)
        .collect();

    let mut seats = priority_seats.to_vec();
    seats.sort_by_key(|s| (s.row, seat_map.letter_index(s.letter).unwrap_or(usize::MAX)));
    seats.dedup();

    let mut seated = 0;
    for seat in seats {
        if queue.is_empty() {
            break;
        }
        if !seat_map.is_free(seat) {
            continue;
        }
        let Some(Reverse(id)) = queue.pop() else {
            break;
        };
        seat_passenger(seat_map, assignments, registry, id, seat, Stage::Priority)?;
        if let Some(p) = registry.get(id) {
            debug!("Priority seat {seat} -> {}", p.name());
        }
        seated += 1;
    }

    debug!("{} priority passengers left without a priority seat", queue.len());
    Ok(seated)
}
