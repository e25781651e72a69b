//! Scenario validation logic.
//!
//! Only malformed input is rejected here. Duplicate members and friendships
//! naming unknown people are legitimate scenario content: they surface as
//! issues when the scenario is applied.

use crate::schema::{LATEST_VERSION, Scenario};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported version: {version} (expected {})", LATEST_VERSION)]
    UnsupportedVersion { version: u32 },

    #[error("Empty member name at members[{index}]")]
    EmptyMemberName { index: usize },

    #[error("Empty member name in friendships[{index}]")]
    EmptyFriendshipName { index: usize },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    for (index, name) in scenario.members.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyMemberName { index });
        }
    }

    for (index, pair) in scenario.friendships.iter().enumerate() {
        if pair.0.trim().is_empty() || pair.1.trim().is_empty() {
            return Err(ValidationError::EmptyFriendshipName { index });
        }
    }

    Ok(())
}
