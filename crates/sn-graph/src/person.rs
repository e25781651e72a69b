//! Person nodes.

use sn_core::MemberId;

use crate::error::NetworkError;

/// What `Person::add_friend` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendOutcome {
    /// The friend was appended.
    Added,
    /// The friend was already listed; nothing changed.
    AlreadyFriends,
}

/// A member of the network.
///
/// Friends are held as `MemberId` handles into the owning `SocialNetwork`,
/// in the order the friendships were made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub(crate) id: MemberId,
    pub(crate) name: String,
    pub(crate) friends: Vec<MemberId>,
}

impl Person {
    pub(crate) fn new(id: MemberId, name: String) -> Self {
        Self {
            id,
            name,
            friends: Vec::new(),
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Friend handles in insertion order.
    pub fn friends(&self) -> &[MemberId] {
        &self.friends
    }

    /// Number of direct friends.
    pub fn degree(&self) -> usize {
        self.friends.len()
    }

    pub fn is_friend(&self, other: MemberId) -> bool {
        self.friends.contains(&other)
    }

    /// Append `other` to this person's friends unless already present.
    ///
    /// Only one side of the edge is touched; `SocialNetwork::add_friendship`
    /// calls this on both endpoints.
    pub(crate) fn add_friend(&mut self, other: MemberId) -> Result<FriendOutcome, NetworkError> {
        if other == self.id {
            return Err(NetworkError::SelfFriendship {
                name: self.name.clone(),
            });
        }
        if self.is_friend(other) {
            return Ok(FriendOutcome::AlreadyFriends);
        }
        self.friends.push(other);
        Ok(FriendOutcome::Added)
    }
}
