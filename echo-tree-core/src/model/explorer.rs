use crate::error::{EchoTreeError, Result};
use crate::model::explorer_config::ExplorerConfig;
use crate::model::follower_table::FollowerSource;
use crate::model::word_node::WordNode;
use log::{debug, trace};
use std::collections::HashMap;

/// Expands root words into frequency-ordered `WordNode` trees.
///
/// # Responsibilities
/// - Ask a `FollowerSource` for the ranked followers of a word
/// - Cache those answers so repeated words only hit the source once
/// - Build trees bounded by `ExplorerConfig` depth and breadth
#[derive(Debug)]
pub struct WordExplorer<S: FollowerSource> {
	source: S,
	/// Word => followers as returned by the source (untruncated).
	cache: HashMap<String, Vec<String>>,
}

impl<S: FollowerSource> WordExplorer<S> {
	/// Creates an explorer with an empty cache.
	pub fn new(source: S) -> Self {
		Self { source, cache: HashMap::new() }
	}

	/// Returns the underlying follower source.
	pub fn source(&self) -> &S {
		&self.source
	}

	/// Number of words whose followers are cached.
	pub fn cached_words(&self) -> usize {
		self.cache.len()
	}

	/// Drops every cached follower list.
	///
	/// Needed after the source changed, otherwise stale rankings are served.
	pub fn clear_cache(&mut self) {
		self.cache.clear();
	}

	/// Returns the followers of `word`, most frequent first.
	///
	/// The first request for a word goes to the source; later requests
	/// are answered from the cache.
	pub fn sorted_followers(&mut self, word: &str) -> &[String] {
		let source = &self.source;
		self.cache.entry(word.to_owned()).or_insert_with(|| {
			let followers = source.sorted_followers(word);
			trace!("cache miss for '{}': {} followers", word, followers.len());
			followers
		})
	}

	/// Builds the tree rooted at `root`.
	///
	/// # Behavior
	/// - The root is level 1; nodes at level `max_depth` are leaves.
	/// - Each node gets one child per follower, in ranking order,
	///   truncated to `max_breadth` when it is non-zero.
	/// - Words reappearing deeper in the tree (A -> B -> A) are expanded
	///   again; the depth bound guarantees termination.
	///
	/// # Errors
	/// Returns an error if `root` is empty or `config` breaks its invariants
	/// (possible when it was deserialized through serde directly).
	pub fn make_word_tree(&mut self, root: &str, config: &ExplorerConfig) -> Result<WordNode> {
		if root.is_empty() {
			return Err(EchoTreeError::invalid_argument("root word must not be empty"));
		}
		config.validate()?;

		debug!(
			"building tree for '{}' (depth {}, breadth {})",
			root,
			config.max_depth(),
			config.max_breadth()
		);
		Ok(self.expand(root, config.max_depth(), config.max_breadth()))
	}

	/// Builds the tree rooted at `root` and renders it as JSON.
	pub fn make_json_tree(&mut self, root: &str, config: &ExplorerConfig) -> Result<String> {
		self.make_word_tree(root, config)?.to_json()
	}

	fn expand(&mut self, word: &str, remaining_depth: usize, max_breadth: usize) -> WordNode {
		if remaining_depth <= 1 {
			return WordNode::new(word);
		}

		let limit = if max_breadth == 0 { usize::MAX } else { max_breadth };
		let followers: Vec<String> = self.sorted_followers(word).iter().take(limit).cloned().collect();

		let children = followers
			.iter()
			.map(|follower| self.expand(follower, remaining_depth - 1, max_breadth))
			.collect();

		WordNode::with_followers(word, children)
	}
}
