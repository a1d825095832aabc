use std::collections::HashMap;

use rand::Rng;

use crate::error::{EchoTreeError, Result};

/// Follower counts observed for a single word.
///
/// Conceptually, this is one row group of a co-occurrence table: for a
/// fixed `word`, how many times each other word was seen right after it.
///
/// ## Responsibilities:
/// - Accumulate follower occurrences
/// - Rank followers by descending frequency
/// - Predict a follower using weighted random sampling
/// - Merge with another set of counts for the same word
///
/// ## Invariants
/// - All followers belong to the same `word`
/// - Each follower count is strictly positive
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FollowerStats {
	/// The word whose followers are counted.
	word: String,
	/// Follower word => number of observations.
	/// Example: { "mouse" => 42, "shortcut" => 3 }
	followers: HashMap<String, usize>,
}

impl FollowerStats {
	/// Creates empty statistics for `word`.
	pub fn new(word: &str) -> Self {
		Self {
			word: word.to_owned(),
			followers: HashMap::new(),
		}
	}

	pub fn word(&self) -> &str {
		&self.word
	}

	/// Number of distinct followers.
	pub fn len(&self) -> usize {
		self.followers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.followers.is_empty()
	}

	/// Observation count for `follower`, 0 if never seen.
	pub fn count(&self, follower: &str) -> usize {
		self.followers.get(follower).copied().unwrap_or(0)
	}

	/// Records one observation of `follower` after this word.
	///
	/// # Errors
	/// Returns an error if the count would overflow.
	pub fn add_follower(&mut self, follower: &str) -> Result<()> {
		self.add_followers(follower, 1)
	}

	/// Records `count` observations of `follower` at once.
	///
	/// # Errors
	/// Returns an error if `count` is 0, which would break the
	/// strictly-positive invariant, or if the total would overflow.
	/// The stored count is left untouched on error.
	pub fn add_followers(&mut self, follower: &str, count: usize) -> Result<()> {
		if count == 0 {
			return Err(EchoTreeError::invalid_argument(format!(
				"count for follower '{}' of '{}' must be >= 1",
				follower, self.word
			)));
		}
		let total = self.checked_total(follower, count)?;
		self.followers.insert(follower.to_owned(), total);
		Ok(())
	}

	/// Current count of `follower` plus `count`, or an error on overflow.
	fn checked_total(&self, follower: &str, count: usize) -> Result<usize> {
		self.count(follower).checked_add(count).ok_or_else(|| {
			EchoTreeError::invalid_argument(format!(
				"count for follower '{}' of '{}' overflows",
				follower, self.word
			))
		})
	}

	/// Returns followers and their counts, most frequent first.
	///
	/// Equal counts are ordered by word so the ranking is stable across runs.
	pub fn sorted_followers(&self) -> Vec<(String, usize)> {
		let mut sorted: Vec<(String, usize)> = self
			.followers
			.iter()
			.map(|(follower, count)| (follower.clone(), *count))
			.collect();
		sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
		sorted
	}

	/// Predicts a follower using weighted random sampling.
	///
	/// The probability of selecting a follower is proportional to its count.
	/// Returns `None` if no follower was ever recorded.
	pub fn predict(&self) -> Option<String> {
		// Summed as u128: usize counts cannot overflow it
		let total: u128 = self.followers.values().map(|count| *count as u128).sum();
		if total == 0 {
			return None;
		}

		let mut r = rand::rng().random_range(0..total);
		for (follower, count) in &self.followers {
			let count = *count as u128;
			if r < count {
				return Some(follower.clone());
			}
			r -= count;
		}

		// Unreachable while counts sum to `total`
		None
	}

	/// Merges another set of counts for the same word into this one.
	///
	/// # Errors
	/// Returns an error if the words do not match or a summed count
	/// overflows. `self` is unchanged on error.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.word != other.word {
			return Err(EchoTreeError::invalid_argument(format!(
				"cannot merge followers of '{}' into '{}'",
				other.word, self.word
			)));
		}

		let merged = other
			.followers
			.iter()
			.map(|(follower, count)| Ok((follower.clone(), self.checked_total(follower, *count)?)))
			.collect::<Result<Vec<(String, usize)>>>()?;
		self.followers.extend(merged);

		Ok(())
	}
}
