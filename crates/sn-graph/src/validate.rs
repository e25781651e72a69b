//! Network validation logic.

use std::collections::{HashMap, HashSet};

use sn_core::{MemberId, SnError, SnResult};

use crate::person::Person;

/// Validate the arena, the name index and every friend list.
pub(crate) fn validate_network(
    people: &[Person],
    by_name: &HashMap<String, MemberId>,
) -> SnResult<()> {
    // Arena slots must match the ids stored in them
    for (i, person) in people.iter().enumerate() {
        if person.id.slot() != i {
            return Err(SnError::invariant(format!(
                "{} stored in slot {} but has id {}",
                person.name, i, person.id
            )));
        }
    }

    // Name index and arena must describe the same members
    if by_name.len() != people.len() {
        return Err(SnError::invariant(format!(
            "name index has {} entries for {} members",
            by_name.len(),
            people.len()
        )));
    }
    for person in people {
        if by_name.get(&person.name) != Some(&person.id) {
            return Err(SnError::invariant(format!(
                "{} is missing from the name index",
                person.name
            )));
        }
    }

    for person in people {
        let mut seen: HashSet<MemberId> = HashSet::with_capacity(person.friends.len());
        for &friend in &person.friends {
            // No dangling handles
            let Some(other) = people.get(friend.slot()) else {
                return Err(SnError::IndexOob {
                    what: "friend id",
                    index: friend.slot(),
                    len: people.len(),
                });
            };

            if friend == person.id {
                return Err(SnError::invariant(format!(
                    "{} is listed as their own friend",
                    person.name
                )));
            }

            if !seen.insert(friend) {
                return Err(SnError::invariant(format!(
                    "{} lists {} more than once",
                    person.name, other.name
                )));
            }

            // Symmetry
            if !other.friends.contains(&person.id) {
                return Err(SnError::invariant(format!(
                    "{} lists {} as a friend but not the other way around",
                    person.name, other.name
                )));
            }
        }
    }

    Ok(())
}
