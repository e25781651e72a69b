//! Network-level error types.

use sn_core::SnError;

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Conditions reported by network mutations.
///
/// None of these are fatal: every variant leaves the network exactly as it was
/// before the call that produced it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A member with this name is already registered.
    #[error("{name} already exists in the network")]
    DuplicateMember { name: String },

    /// A friendship endpoint names nobody in the network.
    #[error("{name} does not exist in the network")]
    UnknownMember { name: String },

    /// The two members are already friends.
    #[error("{a} and {b} are already friends")]
    DuplicateFriendship { a: String, b: String },

    /// A member cannot befriend themselves.
    #[error("{name} cannot be friends with themselves")]
    SelfFriendship { name: String },

    /// Only one of the two members lists the other; the network is corrupt.
    #[error("friendship between {a} and {b} is one-sided")]
    AsymmetricFriendship { a: String, b: String },

    /// The arena has run out of member ids.
    #[error("network is full ({len} members)")]
    CapacityExhausted { len: usize },
}

impl NetworkError {
    /// True for requests that were already satisfied (duplicates), false for
    /// requests that were refused.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            NetworkError::DuplicateMember { .. } | NetworkError::DuplicateFriendship { .. }
        )
    }
}

impl From<NetworkError> for SnError {
    fn from(err: NetworkError) -> Self {
        SnError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_member() {
        let err = NetworkError::UnknownMember {
            name: "George".into(),
        };
        assert_eq!(err.to_string(), "George does not exist in the network");

        let err = NetworkError::DuplicateMember {
            name: "Alice".into(),
        };
        assert_eq!(err.to_string(), "Alice already exists in the network");
    }

    #[test]
    fn duplicates_are_informational() {
        assert!(
            NetworkError::DuplicateFriendship {
                a: "Alice".into(),
                b: "Bob".into()
            }
            .is_informational()
        );
        assert!(
            !NetworkError::SelfFriendship {
                name: "Alice".into()
            }
            .is_informational()
        );
        assert!(!NetworkError::CapacityExhausted { len: 0 }.is_informational());
    }

    #[test]
    fn converts_into_core_error() {
        let err: SnError = NetworkError::UnknownMember {
            name: "Ghost".into(),
        }
        .into();
        assert!(matches!(err, SnError::Network(ref msg) if msg.contains("Ghost")));
    }
}
