//! Ladder challenge pairing core
//!
//! Pure logic, no I/O. Given players ordered by ladder rank (index 0 = top),
//! a single greedy sweep pairs each player with a random opponent at most
//! `max_gap` rungs below them and reports whoever is left over.
//!
//! # Usage
//!
//! ```rust
//! use ladder_core::{create_pairings, Nearest, DEFAULT_MAX_GAP};
//!
//! let ladder = ["A", "B", "C", "D", "E"];
//! let result = create_pairings(&ladder, DEFAULT_MAX_GAP, &mut Nearest);
//!
//! assert_eq!(result.pairings.len(), 2);
//! assert!(result.unmatched.contains(&4));
//! ```

pub mod pairing;
pub mod random;
pub mod types;

pub use pairing::*;
pub use random::*;
pub use types::*;
