//! Allocation run: priority seats first, then surname blocks, then a
//! random fill of whatever is left.

pub mod fallback;
pub mod group;
pub mod priority;

use crate::{
    config::PlaneConfig,
    error::{Result, SeatingError},
    passenger::{Passenger, PassengerId, Registry},
    seat_map::{Seat, SeatMap},
};
use log::{info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;

/// Allocation stage that produced an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Priority,
    Group,
    Fallback,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Priority => "Priority",
            Stage::Group => "Group",
            Stage::Fallback => "Fallback",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub seat: Seat,
    pub stage: Stage,
}

/// Passenger → seat record. Append-only: an entry is never replaced.
#[derive(Debug, Clone, Default)]
pub struct Assignments {
    slots: Vec<Option<Assignment>>,
}

impl Assignments {
    pub fn new(passenger_count: usize) -> Self {
        Self {
            slots: vec![None; passenger_count],
        }
    }

    pub fn get(&self, id: PassengerId) -> Option<Assignment> {
        self.slots.get(id.index()).copied().flatten()
    }

    pub fn seat_of(&self, id: PassengerId) -> Option<Seat> {
        self.get(id).map(|a| a.seat)
    }

    pub fn contains(&self, id: PassengerId) -> bool {
        self.get(id).is_some()
    }

    /// Number of seated passengers
    pub fn assigned_count(&self) -> usize {
        self.iter().count()
    }

    pub fn count_by_stage(&self, stage: Stage) -> usize {
        self.iter().filter(|(_, a)| a.stage == stage).count()
    }

    /// Seated passengers in input order
    pub fn iter(&self) -> impl Iterator<Item = (PassengerId, Assignment)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, a)| a.map(|a| (PassengerId::new(i), a)))
    }
}

/// Occupies `seat` and records the assignment.
///
/// Shared by every stage; a passenger that already holds a seat or a seat
/// that is already taken is an error and leaves both structures untouched.
pub(crate) fn seat_passenger(
    seat_map: &mut SeatMap,
    assignments: &mut Assignments,
    registry: &Registry,
    id: PassengerId,
    seat: Seat,
    stage: Stage,
) -> Result<()> {
    if let Some(existing) = assignments.get(id) {
        let name = registry
            .get(id)
            .map(|p| p.name().to_string())
            .unwrap_or_default();
        return Err(SeatingError::AlreadyAssigned {
            name,
            seat: existing.seat,
        });
    }
    seat_map.occupy(seat, id)?;
    if let Some(slot) = assignments.slots.get_mut(id.index()) {
        *slot = Some(Assignment { seat, stage });
    }
    Ok(())
}

/// Per-stage counts of one allocation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationSummary {
    pub priority: usize,
    pub group: usize,
    pub fallback: usize,
    pub unassigned: usize,
}

impl AllocationSummary {
    pub fn seated(&self) -> usize {
        self.priority + self.group + self.fallback
    }
}

/// One flight's allocation. Owns its seat map and assignment record.
#[derive(Debug, Clone)]
pub struct SeatingRun {
    config: PlaneConfig,
    registry: Registry,
    seat_map: SeatMap,
    assignments: Assignments,
    completed: bool,
}

impl SeatingRun {
    /// Validates the configuration and passenger list; nothing is seated yet.
    pub fn new(config: PlaneConfig, passengers: Vec<Passenger>) -> Result<Self> {
        let seat_map = SeatMap::new(&config)?;
        let registry = Registry::new(passengers)?;
        let assignments = Assignments::new(registry.len());
        Ok(Self {
            config,
            registry,
            seat_map,
            assignments,
            completed: false,
        })
    }

    /// Runs all stages, shuffling with the configured seed or a fresh
    /// thread-local generator.
    pub fn allocate(&mut self) -> Result<AllocationSummary> {
        match self.config.seed {
            Some(seed) => self.allocate_with_rng(&mut StdRng::seed_from_u64(seed)),
            None => self.allocate_with_rng(&mut rand::thread_rng()),
        }
    }

    pub fn allocate_with_rng<R>(&mut self, rng: &mut R) -> Result<AllocationSummary>
    where
        R: Rng + ?Sized,
    {
        if self.completed {
            return Err(SeatingError::AllocationAlreadyRun);
        }
        info!(
            "Allocating {} passengers to {} seats",
            self.registry.len(),
            self.seat_map.capacity()
        );

        let priority = priority::allocate(
            &mut self.seat_map,
            &mut self.assignments,
            &self.registry,
            &self.config.priority_seats,
        )?;
        let group = group::allocate(&mut self.seat_map, &mut self.assignments, &self.registry)?;

        let remaining = self.unassigned();
        let fallback = fallback::allocate(
            &mut self.seat_map,
            &mut self.assignments,
            &self.registry,
            &remaining,
            rng,
        )?;

        self.completed = true;

        let unassigned = self.unassigned();
        for id in &unassigned {
            if let Some(p) = self.registry.get(*id) {
                warn!("No seat available for {}", p.name());
            }
        }

        let summary = AllocationSummary {
            priority,
            group,
            fallback,
            unassigned: unassigned.len(),
        };
        info!(
            "Allocation complete: {} priority, {} group, {} fallback, {} unassigned",
            summary.priority, summary.group, summary.fallback, summary.unassigned
        );
        Ok(summary)
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn config(&self) -> &PlaneConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn seat_map(&self) -> &SeatMap {
        &self.seat_map
    }

    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    /// Passengers without a seat, in input order
    pub fn unassigned(&self) -> Vec<PassengerId> {
        self.registry
            .iter()
            .map(|(id, _)| id)
            .filter(|&id| !self.assignments.contains(id))
            .collect()
    }
}
