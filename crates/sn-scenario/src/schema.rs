//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

/// Scenario format version understood by this crate.
pub const LATEST_VERSION: u32 = 1;

/// A script of members and friendships, applied in file order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub friendships: Vec<FriendshipDef>,
}

/// A requested friendship, written as a two-element list: `[Alice, Bob]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendshipDef(pub String, pub String);

impl FriendshipDef {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self(a.into(), b.into())
    }
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            members: Vec::new(),
            friendships: Vec::new(),
        }
    }
}
