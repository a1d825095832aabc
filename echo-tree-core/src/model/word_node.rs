use serde::{Deserialize, Serialize};

use crate::error::{EchoTreeError, Result};

/// Placeholder word of a default-constructed node.
pub const DEFAULT_WORD: &str = "keyboard";

/// A word together with the words observed to follow it.
///
/// A `WordNode` is one node of an EchoTree: `word` is its payload and
/// `follow_words` its ranked successors, most frequent first. Each node
/// owns its successors, so a tree of `WordNode`s can never contain a
/// cycle even when the same word text shows up at several levels.
///
/// ## JSON shape
/// ```json
/// {"word": "keyboard", "followWordObjs": [{"word": "mouse", "followWordObjs": []}]}
/// ```
///
/// ## Invariants
/// - `follow_words` is always a valid, possibly empty, ordered sequence
/// - Duplicate words among `follow_words` are allowed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WordNode {
	/// The word carried by this node.
	word: String,
	/// Successor nodes, ordered by descending frequency.
	#[serde(rename = "followWordObjs")]
	follow_words: Vec<WordNode>,
}

impl Default for WordNode {
	/// Creates a node holding the placeholder word and no follow-words.
	fn default() -> Self {
		Self::new(DEFAULT_WORD)
	}
}

impl WordNode {
	/// Creates a node with no follow-words.
	pub fn new(word: &str) -> Self {
		Self { word: word.to_owned(), follow_words: Vec::new() }
	}

	/// Creates a node with the given follow-words, kept in the given order.
	pub fn with_followers(word: &str, follow_words: Vec<WordNode>) -> Self {
		Self { word: word.to_owned(), follow_words }
	}

	/// Returns the word carried by this node.
	pub fn word(&self) -> &str {
		&self.word
	}

	/// Returns the immediate follow-word nodes exactly as stored.
	///
	/// The slice is a read-only view: callers cannot reorder or
	/// modify the node's successors through it.
	pub fn next_level_word_objs(&self) -> &[WordNode] {
		&self.follow_words
	}

	/// Returns the words of the immediate follow-word nodes, in order.
	///
	/// Only depth 1 is visited; grandchildren never appear.
	pub fn next_level_words(&self) -> Vec<String> {
		self.next_level_word_objs()
			.iter()
			.map(|node| node.word.clone())
			.collect()
	}

	/// Returns `true` if the node has no follow-words.
	pub fn is_leaf(&self) -> bool {
		self.follow_words.is_empty()
	}

	/// Number of levels in the tree rooted at this node (a leaf has depth 1).
	pub fn depth(&self) -> usize {
		1 + self.follow_words.iter().map(WordNode::depth).max().unwrap_or(0)
	}

	/// Renders the tree rooted at this node as JSON.
	pub fn to_json(&self) -> Result<String> {
		serde_json::to_string(self).map_err(EchoTreeError::MalformedNode)
	}

	/// Parses a tree from JSON.
	///
	/// # Errors
	/// Returns `MalformedNode` if any node lacks `word` or `followWordObjs`,
	/// or if the text is not valid JSON.
	pub fn from_json(json: &str) -> Result<Self> {
		serde_json::from_str(json).map_err(EchoTreeError::MalformedNode)
	}
}
