//! Top-level module for word trees.
//!
//! This module provides:
//! - The tree node type (`WordNode`)
//! - Follower statistics (`FollowerStats`, `FollowerTable`)
//! - Tree expansion from a root word (`WordExplorer`)
//! - Expansion limits (`ExplorerConfig`)
//! - Word-sequence extraction from trees (`evaluator`)

/// A word and its ranked follow-words.
///
/// Exposes the two read accessors `next_level_word_objs` and
/// `next_level_words`, plus JSON conversion.
pub mod word_node;

/// Follower counts for a single word.
///
/// Supports accumulation, ranking, weighted prediction and merging.
pub mod follower_stats;

/// In-memory co-occurrence table and the `FollowerSource` trait.
pub mod follower_table;

/// Depth- and breadth-limited tree expansion with follower caching.
pub mod explorer;

/// Limits used by `WordExplorer`.
pub mod explorer_config;

/// Extraction of word sequences from a tree.
pub mod evaluator;
