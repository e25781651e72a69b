//! The social network: owner of every person and every friendship.

use std::collections::HashMap;

use sn_core::{MemberId, SnResult};
use tracing::debug;

use crate::error::{NetworkError, NetworkResult};
use crate::person::Person;
use crate::validate;

/// A registry of people keyed by name.
///
/// People live in an arena (`people[i].id().slot() == i`) in the order they
/// were added; friendships are stored as `MemberId` handles on both endpoints.
/// The only way to create a person or an edge is through this type, which keeps
/// the friendship relation symmetric and free of dangling handles.
#[derive(Debug, Clone, Default)]
pub struct SocialNetwork {
    pub(crate) people: Vec<Person>,
    pub(crate) by_name: HashMap<String, MemberId>,
}

impl SocialNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new person and return their id.
    ///
    /// Adding a name that is already registered leaves the network unchanged
    /// and returns `NetworkError::DuplicateMember`.
    pub fn add_member(&mut self, name: impl Into<String>) -> NetworkResult<MemberId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            debug!(%name, "member already registered");
            return Err(NetworkError::DuplicateMember { name });
        }

        let id = MemberId::for_len(self.people.len()).ok_or(NetworkError::CapacityExhausted {
            len: self.people.len(),
        })?;
        debug!(%name, %id, "member added");
        self.by_name.insert(name.clone(), id);
        self.people.push(Person::new(id, name));
        Ok(id)
    }

    /// Make `a` and `b` friends with each other.
    ///
    /// Both names must already be members. `a` is checked first; if it is
    /// unknown the call returns without looking at `b`. Nothing is mutated on
    /// any error path. Befriending an existing friend returns
    /// `NetworkError::DuplicateFriendship` with the graph untouched; a pair
    /// listed on only one side is refused with
    /// `NetworkError::AsymmetricFriendship`.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> NetworkResult<()> {
        let a_id = self.require(a)?;
        let b_id = self.require(b)?;
        if a_id == b_id {
            debug!(name = a, "self friendship refused");
            return Err(NetworkError::SelfFriendship { name: a.to_string() });
        }

        let a_has_b = self.people[a_id.slot()].is_friend(b_id);
        let b_has_a = self.people[b_id.slot()].is_friend(a_id);
        match (a_has_b, b_has_a) {
            (false, false) => {
                self.people[a_id.slot()].add_friend(b_id)?;
                self.people[b_id.slot()].add_friend(a_id)?;
                debug!(a, b, "friendship added");
                Ok(())
            }
            (true, true) => {
                debug!(a, b, "friendship already exists");
                Err(NetworkError::DuplicateFriendship {
                    a: a.to_string(),
                    b: b.to_string(),
                })
            }
            _ => Err(NetworkError::AsymmetricFriendship {
                a: a.to_string(),
                b: b.to_string(),
            }),
        }
    }

    fn require(&self, name: &str) -> NetworkResult<MemberId> {
        self.id_of(name).ok_or_else(|| NetworkError::UnknownMember {
            name: name.to_string(),
        })
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn id_of(&self, name: &str) -> Option<MemberId> {
        self.by_name.get(name).copied()
    }

    /// Get a person by id (returns None if the id belongs to another network).
    pub fn person(&self, id: MemberId) -> Option<&Person> {
        self.people.get(id.slot())
    }

    pub fn person_by_name(&self, name: &str) -> Option<&Person> {
        self.id_of(name).and_then(|id| self.person(id))
    }

    /// All people in insertion order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Names of `name`'s friends in the order the friendships were made.
    pub fn friends_of(&self, name: &str) -> Option<Vec<&str>> {
        let person = self.person_by_name(name)?;
        Some(self.friend_names(person).collect())
    }

    /// Resolve a person's friend handles to names.
    pub fn friend_names<'a>(&'a self, person: &'a Person) -> impl Iterator<Item = &'a str> + 'a {
        person
            .friends()
            .iter()
            .filter_map(|&id| self.person(id))
            .map(Person::name)
    }

    /// True when both names are members and friends of each other.
    pub fn are_friends(&self, a: &str, b: &str) -> bool {
        match (self.person_by_name(a), self.id_of(b)) {
            (Some(person), Some(b_id)) => person.is_friend(b_id),
            _ => false,
        }
    }

    /// Number of undirected friendships.
    pub fn friendship_count(&self) -> usize {
        self.people.iter().map(Person::degree).sum::<usize>() / 2
    }

    /// Check every structural invariant of the network.
    pub fn validate(&self) -> SnResult<()> {
        validate::validate_network(&self.people, &self.by_name)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const NAMES: [&str; 6] = ["Alice", "Bob", "Charlie", "Diana", "Eve", "Frank"];

    #[derive(Debug, Clone)]
    enum Op {
        Member(usize),
        Friendship(usize, usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        // Index 6 is deliberately out of NAMES so unknown members show up.
        prop_oneof![
            (0..NAMES.len()).prop_map(Op::Member),
            (0..=NAMES.len(), 0..=NAMES.len()).prop_map(|(a, b)| Op::Friendship(a, b)),
        ]
    }

    fn name(i: usize) -> &'static str {
        NAMES.get(i).copied().unwrap_or("Ghost")
    }

    fn apply(network: &mut SocialNetwork, ops: &[Op]) {
        for op in ops {
            let _ = match *op {
                Op::Member(i) => network.add_member(name(i)).map(|_| ()),
                Op::Friendship(a, b) => network.add_friendship(name(a), name(b)),
            };
        }
    }

    proptest! {
        #[test]
        fn invariants_hold_after_any_sequence(ops in prop::collection::vec(op(), 0..60)) {
            let mut network = SocialNetwork::new();
            apply(&mut network, &ops);

            prop_assert!(network.validate().is_ok());
            for a in network.people() {
                for b in network.people() {
                    prop_assert_eq!(a.is_friend(b.id()), b.is_friend(a.id()));
                }
            }
        }

        #[test]
        fn repeated_friendships_change_nothing(
            pairs in prop::collection::vec((0..NAMES.len(), 0..NAMES.len()), 0..30),
            repeats in 1_usize..4,
        ) {
            let mut network = SocialNetwork::new();
            for n in NAMES {
                network.add_member(n).unwrap();
            }
            let ops: Vec<Op> = pairs.iter().map(|&(a, b)| Op::Friendship(a, b)).collect();
            apply(&mut network, &ops);
            let once = network.people().to_vec();

            for _ in 0..repeats {
                apply(&mut network, &ops);
            }
            prop_assert_eq!(network.people(), once.as_slice());
        }

        #[test]
        fn failed_friendship_mutates_nothing(a in 0..=NAMES.len(), b in 0..=NAMES.len()) {
            let mut network = SocialNetwork::new();
            for n in &NAMES[..3] {
                network.add_member(*n).unwrap();
            }
            network.add_friendship("Alice", "Bob").unwrap();
            let before = network.people().to_vec();

            if network.add_friendship(name(a), name(b)).is_err() {
                prop_assert_eq!(network.people(), before.as_slice());
            }
        }
    }
}
