//! Word-tree library for frequency-ranked word prediction.
//!
//! This crate provides the building blocks of an EchoTree:
//! - A word node owning its ranked follow-words (`WordNode`)
//! - Follower statistics accumulated from observations
//! - Depth- and breadth-limited tree expansion from a root word
//! - Extraction of word sequences from an expanded tree
//!
//! Only the high-level API is exposed publicly. Low-level helpers
//! are kept internal.

/// Word nodes, follower statistics and tree exploration.
pub mod model;

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// I/O utilities (configuration file loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{EchoTreeError, Result};
pub use model::word_node::WordNode;
