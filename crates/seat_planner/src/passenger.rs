use crate::error::{Result, SeatingError};
use std::{collections::HashMap, fmt};

/// Position of a passenger in the input list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassengerId(usize);

impl PassengerId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    name: String,
    surname: String,
    priority: bool,
}

impl Passenger {
    /// The surname is the last whitespace-separated token of the name.
    pub fn new(name: impl Into<String>, priority: bool) -> Result<Self> {
        let name = name.into().trim().to_string();
        let surname = name
            .split_whitespace()
            .last()
            .ok_or(SeatingError::InvalidPassengerName)?
            .to_string();
        Ok(Self {
            name,
            surname,
            priority,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn is_priority(&self) -> bool {
        self.priority
    }

    /// First three characters of the surname, uppercased
    pub fn tag(&self) -> String {
        self.surname
            .chars()
            .take(3)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.priority { "Priority" } else { "Standard" };
        write!(f, "{} ({kind})", self.name)
    }
}

/// Passengers sharing a surname, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurnameGroup {
    pub surname: String,
    pub members: Vec<PassengerId>,
}

/// Input passenger list plus its surname grouping.
///
/// Groups are kept in first-seen order so that block placement is
/// reproducible for the same input.
#[derive(Debug, Clone)]
pub struct Registry {
    passengers: Vec<Passenger>,
    groups: Vec<SurnameGroup>,
}

impl Registry {
    pub fn new(passengers: Vec<Passenger>) -> Result<Self> {
        let groups = group_by_surname(&passengers)?;
        Ok(Self { passengers, groups })
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id.index())
    }

    /// Passengers with their ids, in input order
    pub fn iter(&self) -> impl Iterator<Item = (PassengerId, &Passenger)> {
        self.passengers
            .iter()
            .enumerate()
            .map(|(i, p)| (PassengerId::new(i), p))
    }

    pub fn groups(&self) -> &[SurnameGroup] {
        &self.groups
    }

    pub fn priority_ids(&self) -> impl Iterator<Item = PassengerId> + '_ {
        self.iter().filter(|(_, p)| p.is_priority()).map(|(id, _)| id)
    }
}

fn group_by_surname(passengers: &[Passenger]) -> Result<Vec<SurnameGroup>> {
    let mut names: HashMap<&str, PassengerId> = HashMap::with_capacity(passengers.len());
    let mut group_index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<SurnameGroup> = Vec::new();

    for (i, p) in passengers.iter().enumerate() {
        let id = PassengerId::new(i);
        if names.insert(p.name(), id).is_some() {
            return Err(SeatingError::DuplicatePassenger(p.name().to_string()));
        }

        match group_index.get(p.surname()) {
            Some(&g) => groups[g].members.push(id),
            None => {
                group_index.insert(p.surname(), groups.len());
                groups.push(SurnameGroup {
                    surname: p.surname().to_string(),
                    members: vec![id],
                });
            }
        }
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str, priority: bool) -> Passenger {
        Passenger::new(name, priority).unwrap()
    }

    #[test]
    fn test_surname_is_last_token() {
        assert_eq!(p("Mary Ann  Lee", false).surname(), "Lee");
        assert_eq!(p("Cher", true).surname(), "Cher");
        assert_eq!(p("  Bob Smith  ", false).name(), "Bob Smith");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            Passenger::new("   ", false),
            Err(SeatingError::InvalidPassengerName)
        ));
    }

    #[test]
    fn test_tag() {
        assert_eq!(p("Bob Smith", false).tag(), "SMI");
        assert_eq!(p("Uma Red", false).tag(), "RED");
        assert_eq!(p("Al Li", false).tag(), "LI");
    }

    #[test]
    fn test_display() {
        assert_eq!(p("Alice Bryant", true).to_string(), "Alice Bryant (Priority)");
        assert_eq!(p("Bob Smith", false).to_string(), "Bob Smith (Standard)");
    }

    #[test]
    fn test_groups_preserve_first_seen_order() {
        let registry = Registry::new(vec![
            p("Bob Smith", false),
            p("Daniel Johnson", false),
            p("Carol Smith", false),
            p("Alice Bryant", true),
            p("Eli Johnson", false),
        ])
        .unwrap();

        let surnames: Vec<&str> = registry.groups().iter().map(|g| g.surname.as_str()).collect();
        assert_eq!(surnames, vec!["Smith", "Johnson", "Bryant"]);

        let smith: Vec<usize> = registry.groups()[0].members.iter().map(|id| id.index()).collect();
        assert_eq!(smith, vec![0, 2]);
        let johnson: Vec<usize> = registry.groups()[1].members.iter().map(|id| id.index()).collect();
        assert_eq!(johnson, vec![1, 4]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Registry::new(vec![p("Bob Smith", false), p("Bob Smith", true)]);
        assert!(matches!(result, Err(SeatingError::DuplicatePassenger(name)) if name == "Bob Smith"));
    }

    #[test]
    fn test_priority_ids_in_input_order() {
        let registry = Registry::new(vec![
            p("A One", true),
            p("B Two", false),
            p("C Three", true),
        ])
        .unwrap();
        let ids: Vec<usize> = registry.priority_ids().map(|id| id.index()).collect();
        assert_eq!(ids, vec![0, 2]);
    }
}
