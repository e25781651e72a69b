//! sn-graph: the social network graph for socnet.
//!
//! Provides:
//! - `Person` nodes holding insertion-ordered friend handles
//! - `SocialNetwork`, the arena that owns every person and mediates all edges
//! - Text rendering of the network, one line per member
//! - Structural validation of the graph invariants
//!
//! # Example
//!
//! ```
//! use sn_graph::{NetworkError, SocialNetwork};
//!
//! let mut network = SocialNetwork::new();
//! network.add_member("Alice").unwrap();
//! network.add_member("Bob").unwrap();
//! network.add_friendship("Alice", "Bob").unwrap();
//!
//! assert!(network.are_friends("Bob", "Alice"));
//! assert_eq!(
//!     network.add_friendship("Alice", "George"),
//!     Err(NetworkError::UnknownMember { name: "George".into() })
//! );
//! assert_eq!(network.render(), vec!["Alice: Bob", "Bob: Alice"]);
//! ```

pub mod error;
pub mod network;
pub mod person;
pub mod render;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use error::{NetworkError, NetworkResult};
pub use network::SocialNetwork;
pub use person::{FriendOutcome, Person};
pub use render::NO_FRIENDS;
pub use sn_core::MemberId;
