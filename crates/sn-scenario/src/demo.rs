//! Built-in demonstration scenario.

use crate::schema::{FriendshipDef, Scenario};

/// Six people, eight friendships, then a repeated member and a friendship
/// with someone who was never added.
pub fn demo() -> Scenario {
    let mut scenario = Scenario::new("Demo network");
    scenario.members = ["Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Alice"]
        .into_iter()
        .map(String::from)
        .collect();
    scenario.friendships = [
        ("Alice", "Bob"),
        ("Alice", "Charlie"),
        ("Bob", "Diana"),
        ("Charlie", "Diana"),
        ("Charlie", "Eve"),
        ("Diana", "Frank"),
        ("Eve", "Frank"),
        ("Alice", "Frank"),
        ("Alice", "George"),
    ]
    .into_iter()
    .map(|(a, b)| FriendshipDef::new(a, b))
    .collect();
    scenario
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply, validate_scenario};
    use sn_graph::{NetworkError, SocialNetwork};

    #[test]
    fn demo_is_valid() {
        assert!(validate_scenario(&demo()).is_ok());
    }

    #[test]
    fn demo_reports_both_edge_cases() {
        let mut network = SocialNetwork::new();
        let report = apply(&demo(), &mut network);

        assert_eq!(network.len(), 6);
        assert_eq!(report.members_added, 6);
        assert_eq!(report.friendships_added, 8);

        let errors: Vec<&NetworkError> = report.issues.iter().map(|i| i.error()).collect();
        assert_eq!(
            errors,
            vec![
                &NetworkError::DuplicateMember {
                    name: "Alice".into()
                },
                &NetworkError::UnknownMember {
                    name: "George".into()
                },
            ]
        );
        assert_eq!(network.person_by_name("Alice").unwrap().degree(), 3);
    }
}
