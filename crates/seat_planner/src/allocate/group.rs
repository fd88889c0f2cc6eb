use super::{Assignments, Stage, seat_passenger};
use crate::{
    error::Result,
    passenger::{PassengerId, Registry},
    seat_map::{Seat, SeatMap},
};
use log::debug;

/// First run of `size` contiguous free seats within a single row.
///
/// Rows are scanned top to bottom and each row left to right. Returns
/// `None` when no row has such a run.
pub fn find_horizontal_block(seat_map: &SeatMap, size: usize) -> Option<Vec<Seat>> {
    let width = seat_map.width();
    if size == 0 || size > width {
        return None;
    }

    let letters = seat_map.letters();
    for row in 0..seat_map.rows() {
        for start in 0..=(width - size) {
            let block: Vec<Seat> = letters[start..start + size]
                .iter()
                .map(|&l| Seat::new(row, l))
                .collect();
            if block.iter().all(|&s| seat_map.is_free(s)) {
                return Some(block);
            }
        }
    }
    None
}

/// Seats each surname group together in one row.
///
/// Members already seated by an earlier stage are dropped from their group
/// first. A group that does not fit in any row is left entirely unseated;
/// groups are never split across rows here.
///
/// Returns the number of passengers seated.
pub fn allocate(
    seat_map: &mut SeatMap,
    assignments: &mut Assignments,
    registry: &Registry,
) -> Result<usize> {
    let mut seated = 0;

    for group in registry.groups() {
        let members: Vec<PassengerId> = group
            .members
            .iter()
            .copied()
            .filter(|&id| !assignments.contains(id))
            .collect();
        if members.is_empty() {
            continue;
        }

        let Some(block) = find_horizontal_block(seat_map, members.len()) else {
            debug!(
                "No row has {} free seats together for the {} group",
                members.len(),
                group.surname
            );
            continue;
        };

        for (&id, &seat) in members.iter().zip(&block) {
            seat_passenger(seat_map, assignments, registry, id, seat, Stage::Group)?;
        }
        debug!(
            "Group {} seated in row {} ({} seats)",
            group.surname,
            block[0].row + 1,
            block.len()
        );
        seated += members.len();
    }

    Ok(seated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::PlaneConfig, passenger::Passenger};

    fn registry(names: &[&str]) -> Registry {
        Registry::new(
            names
                .iter()
                .map(|n| Passenger::new(*n, false).unwrap())
                .collect(),
        )
        .unwrap()
    }

    fn plane(rows: usize, seats_per_row: usize) -> SeatMap {
        SeatMap::new(&PlaneConfig {
            rows,
            seats_per_row,
            priority_seats: vec![],
            ..PlaneConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_find_block_leftmost_first() {
        let mut map = plane(2, 6);
        map.occupy(Seat::new(0, 'B'), PassengerId::new(0)).unwrap();

        let block = find_horizontal_block(&map, 3).unwrap();
        assert_eq!(
            block,
            vec![Seat::new(0, 'C'), Seat::new(0, 'D'), Seat::new(0, 'E')]
        );
    }

    #[test]
    fn test_find_block_moves_to_next_row() {
        let mut map = plane(2, 4);
        map.occupy(Seat::new(0, 'B'), PassengerId::new(0)).unwrap();
        map.occupy(Seat::new(0, 'D'), PassengerId::new(1)).unwrap();

        let block = find_horizontal_block(&map, 2).unwrap();
        assert_eq!(block, vec![Seat::new(1, 'A'), Seat::new(1, 'B')]);
    }

    #[test]
    fn test_find_block_too_large() {
        let map = plane(3, 6);
        assert!(find_horizontal_block(&map, 7).is_none());
        assert!(find_horizontal_block(&map, 0).is_none());
        assert_eq!(find_horizontal_block(&map, 6).unwrap().len(), 6);
    }

    #[test]
    fn test_group_seated_contiguously_in_order() {
        let reg = registry(&["Daniel Johnson", "Eli Johnson", "Faye Johnson"]);
        let mut map = plane(2, 6);
        let mut assignments = Assignments::new(reg.len());

        let seated = allocate(&mut map, &mut assignments, &reg).unwrap();

        assert_eq!(seated, 3);
        let seats: Vec<Seat> = (0..3)
            .map(|i| assignments.seat_of(PassengerId::new(i)).unwrap())
            .collect();
        assert_eq!(
            seats,
            vec![Seat::new(0, 'A'), Seat::new(0, 'B'), Seat::new(0, 'C')]
        );
    }

    #[test]
    fn test_oversized_group_left_unseated() {
        let reg = registry(&["A Kim", "B Kim", "C Kim", "D Lee"]);
        let mut map = plane(2, 2);
        let mut assignments = Assignments::new(reg.len());

        let seated = allocate(&mut map, &mut assignments, &reg).unwrap();

        // The Kim group needs 3 seats in a 2-wide plane; Lee still gets a seat
        assert_eq!(seated, 1);
        for i in 0..3 {
            assert!(!assignments.contains(PassengerId::new(i)));
        }
        assert_eq!(
            assignments.seat_of(PassengerId::new(3)),
            Some(Seat::new(0, 'A'))
        );
    }

    #[test]
    fn test_group_not_split_across_fragmented_rows() {
        let reg = registry(&["X Filler", "A Kim", "B Kim", "C Kim"]);
        let mut map = plane(2, 4);
        let mut assignments = Assignments::new(reg.len());
        // Leave at most two adjacent free seats in each row
        map.occupy(Seat::new(0, 'C'), PassengerId::new(10)).unwrap();
        map.occupy(Seat::new(1, 'B'), PassengerId::new(11)).unwrap();

        let seated = allocate(&mut map, &mut assignments, &reg).unwrap();

        assert_eq!(seated, 1);
        assert_eq!(
            assignments.seat_of(PassengerId::new(0)),
            Some(Seat::new(0, 'A'))
        );
        for i in 1..4 {
            assert!(!assignments.contains(PassengerId::new(i)));
        }
    }

    #[test]
    fn test_already_seated_members_are_filtered() {
        let reg = registry(&["Bob Smith", "Carol Smith", "Dan Smith"]);
        let mut map = plane(2, 6);
        let mut assignments = Assignments::new(reg.len());
        seat_passenger(
            &mut map,
            &mut assignments,
            &reg,
            PassengerId::new(1),
            Seat::new(0, 'A'),
            Stage::Priority,
        )
        .unwrap();

        let seated = allocate(&mut map, &mut assignments, &reg).unwrap();

        assert_eq!(seated, 2);
        assert_eq!(
            assignments.seat_of(PassengerId::new(0)),
            Some(Seat::new(0, 'B'))
        );
        assert_eq!(
            assignments.seat_of(PassengerId::new(2)),
            Some(Seat::new(0, 'C'))
        );
        assert_eq!(
            assignments.get(PassengerId::new(1)).unwrap().stage,
            Stage::Priority
        );
    }
}
