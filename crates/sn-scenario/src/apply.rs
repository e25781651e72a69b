//! Driving a network from a scenario.

use std::fmt;

use sn_graph::{NetworkError, SocialNetwork};
use tracing::debug;

use crate::schema::Scenario;

/// A non-fatal condition hit while applying one scenario entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Member { index: usize, error: NetworkError },
    Friendship { index: usize, error: NetworkError },
}

impl Issue {
    pub fn error(&self) -> &NetworkError {
        match self {
            Issue::Member { error, .. } | Issue::Friendship { error, .. } => error,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Member { index, error } => write!(f, "members[{index}]: {error}"),
            Issue::Friendship { index, error } => write!(f, "friendships[{index}]: {error}"),
        }
    }
}

/// Outcome of `apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub members_added: usize,
    pub friendships_added: usize,
    pub issues: Vec<Issue>,
}

impl ApplyReport {
    /// True when every entry was applied without any issue.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Add every member, then every friendship, in file order.
///
/// Each failed entry is recorded as an `Issue` and skipped; the rest of the
/// scenario is still applied.
pub fn apply(scenario: &Scenario, network: &mut SocialNetwork) -> ApplyReport {
    let mut report = ApplyReport::default();

    for (index, name) in scenario.members.iter().enumerate() {
        match network.add_member(name.as_str()) {
            Ok(_) => report.members_added += 1,
            Err(error) => {
                debug!(index, %error, "member skipped");
                report.issues.push(Issue::Member { index, error });
            }
        }
    }

    for (index, pair) in scenario.friendships.iter().enumerate() {
        match network.add_friendship(&pair.0, &pair.1) {
            Ok(()) => report.friendships_added += 1,
            Err(error) => {
                debug!(index, %error, "friendship skipped");
                report.issues.push(Issue::Friendship { index, error });
            }
        }
    }

    debug!(
        scenario = %scenario.name,
        members = report.members_added,
        friendships = report.friendships_added,
        issues = report.issues.len(),
        "scenario applied"
    );
    report
}
