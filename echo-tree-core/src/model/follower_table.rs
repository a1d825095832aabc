use super::follower_stats::FollowerStats;
use crate::error::{EchoTreeError, Result};
use log::{debug, trace};
use rand::prelude::IteratorRandom;
use std::collections::HashMap;

/// Anything able to list the followers of a word by descending frequency.
///
/// `WordExplorer` only depends on this trait, so follower data may come
/// from an in-memory `FollowerTable` or from an external store.
pub trait FollowerSource {
	/// Returns the followers of `word`, most frequent first.
	/// Unknown words have no followers.
	fn sorted_followers(&self, word: &str) -> Vec<String>;
}

/// In-memory word co-occurrence table.
///
/// The `FollowerTable` stores one `FollowerStats` per word and answers
/// "which words follow this one, and how often".
///
/// # Responsibilities
/// - Record `(word, follower)` observations handed in by a caller
/// - Rank followers of a word by descending frequency
/// - Predict a likely next word
/// - Merge with another table
///
/// # Invariants
/// - Each entry in `words` is keyed by the `word` of its `FollowerStats`
/// - Neither words nor followers are empty strings
#[derive(Clone, Debug, Default)]
pub struct FollowerTable {
	/// Mapping from a word to its follower statistics
	words: HashMap<String, FollowerStats>,
}

impl FollowerTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of words having at least one recorded follower.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Statistics recorded for `word`, if any.
	pub fn stats(&self, word: &str) -> Option<&FollowerStats> {
		self.words.get(word)
	}

	/// Records one observation of `follower` right after `word`.
	///
	/// # Errors
	/// Returns an error if either word is empty.
	pub fn record(&mut self, word: &str, follower: &str) -> Result<()> {
		self.record_count(word, follower, 1)
	}

	/// Records `count` observations of `follower` right after `word`.
	///
	/// # Errors
	/// Returns an error if either word is empty, `count` is 0, or the
	/// follower's total count would overflow.
	pub fn record_count(&mut self, word: &str, follower: &str, count: usize) -> Result<()> {
		if word.is_empty() || follower.is_empty() {
			return Err(EchoTreeError::invalid_argument("words must not be empty"));
		}
		if count == 0 {
			return Err(EchoTreeError::invalid_argument(format!(
				"count for '{}' -> '{}' must be >= 1",
				word, follower
			)));
		}

		trace!("record {} -> {} (x{})", word, follower, count);
		let stats = self.words.entry(word.to_owned()).or_insert_with(|| FollowerStats::new(word));
		stats.add_followers(follower, count)
	}

	/// Predicts the next word after `word` using weighted random sampling.
	///
	/// Returns `None` if the word is unknown.
	pub fn predict_next(&self, word: &str) -> Option<String> {
		self.words.get(word)?.predict()
	}

	/// Returns a random known word.
	///
	/// Useful for picking a root word.
	/// Returns `None` if the table is empty.
	pub fn random_word(&self) -> Option<String> {
		self.words.keys().choose(&mut rand::rng()).cloned()
	}

	/// Merges another table into this one.
	///
	/// # Notes
	/// - Counts for matching words and followers are summed.
	/// - Words unknown to `self` are cloned from `other`.
	///
	/// # Errors
	/// Returns an error if a summed count overflows. `self` is unchanged on error.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		debug!("merging {} words into a table of {}", other.len(), self.len());
		let mut words = self.words.clone();
		for (word, stats) in &other.words {
			if let Some(existing) = words.get_mut(word) {
				existing.merge(stats)?;
			} else {
				words.insert(word.clone(), stats.clone());
			}
		}

		self.words = words;
		Ok(())
	}
}

impl FollowerSource for FollowerTable {
	fn sorted_followers(&self, word: &str) -> Vec<String> {
		match self.words.get(word) {
			Some(stats) => stats
				.sorted_followers()
				.into_iter()
				.map(|(follower, _)| follower)
				.collect(),
			None => Vec::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_table() -> FollowerTable {
		let mut table = FollowerTable::new();
		table.record_count("echo", "tree", 4).unwrap();
		table.record_count("echo", "chamber", 9).unwrap();
		table.record("echo", "location").unwrap();
		table.record_count("tree", "house", 2).unwrap();
		table
	}

	#[test]
	fn followers_sorted_by_frequency() {
		let table = sample_table();
		assert_eq!(table.sorted_followers("echo"), vec!["chamber", "tree", "location"]);
		assert_eq!(table.sorted_followers("tree"), vec!["house"]);
	}

	#[test]
	fn unknown_word_has_no_followers() {
		let table = sample_table();
		assert!(table.sorted_followers("nothing").is_empty());
		assert_eq!(table.predict_next("nothing"), None);
	}

	#[test]
	fn empty_words_and_zero_counts_rejected() {
		let mut table = FollowerTable::new();
		assert!(table.record("", "tree").is_err());
		assert!(table.record("echo", "").is_err());
		assert!(table.record_count("echo", "tree", 0).is_err());
		assert!(table.is_empty());
	}

	#[test]
	fn random_word_is_known() {
		let table = sample_table();
		let word = table.random_word().unwrap();
		assert!(word == "echo" || word == "tree");
		assert_eq!(FollowerTable::new().random_word(), None);
	}

	#[test]
	fn merge_combines_tables() {
		let mut left = sample_table();
		let mut right = FollowerTable::new();
		right.record_count("echo", "location", 20).unwrap();
		right.record("house", "party").unwrap();

		left.merge(&right).unwrap();
		assert_eq!(left.len(), 3);
		assert_eq!(left.sorted_followers("echo"), vec!["location", "chamber", "tree"]);
		assert_eq!(left.stats("house").map(|s| s.count("party")), Some(1));
	}

	#[test]
	fn failed_merge_keeps_table_intact() {
		let mut left = FollowerTable::new();
		left.record("alpha", "beta").unwrap();
		left.record_count("echo", "tree", usize::MAX).unwrap();
		let mut right = FollowerTable::new();
		right.record("alpha", "beta").unwrap();
		right.record("echo", "tree").unwrap();

		assert!(left.merge(&right).is_err());
		assert_eq!(left.stats("alpha").map(|s| s.count("beta")), Some(1));
		assert_eq!(left.stats("echo").map(|s| s.count("tree")), Some(usize::MAX));
	}
}
