//! Text rendering of a network.

use std::fmt;

use crate::network::SocialNetwork;
use crate::person::Person;

/// Placeholder shown for a member without friends.
pub const NO_FRIENDS: &str = "No friends";

impl SocialNetwork {
    /// One line per member, in insertion order: `"{name}: {friend}, {friend}"`.
    pub fn render(&self) -> Vec<String> {
        self.people.iter().map(|p| self.render_person(p)).collect()
    }

    /// The rendered line of a single member, if present.
    pub fn render_member(&self, name: &str) -> Option<String> {
        self.person_by_name(name).map(|p| self.render_person(p))
    }

    fn render_person(&self, person: &Person) -> String {
        let friends: Vec<&str> = self.friend_names(person).collect();
        if friends.is_empty() {
            format!("{}: {}", person.name(), NO_FRIENDS)
        } else {
            format!("{}: {}", person.name(), friends.join(", "))
        }
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.render().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
