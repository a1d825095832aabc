use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EchoTreeError, Result};
use crate::io;

/// Default number of levels in an expanded tree, root included.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Largest accepted `max_depth`.
///
/// Every tree level adds two nesting levels to the JSON rendering, and
/// `serde_json` refuses input nested deeper than 128 levels. Staying at 32
/// keeps every tree the explorer builds readable by `WordNode::from_json`.
pub const MAX_TREE_DEPTH: usize = 32;

/// Default number of follow-words kept per node.
pub const DEFAULT_MAX_BREADTH: usize = 5;

/// Limits applied when expanding a root word into a tree.
///
/// # Invariants
/// - `max_depth` is always in `1..=MAX_TREE_DEPTH`
/// - `max_breadth == 0` means no limit
///
/// Can be loaded from JSON; missing fields fall back to the defaults:
/// ```json
/// {"max_depth": 2, "max_breadth": 10}
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExplorerConfig {
	/// Number of levels in the tree, root included.
	#[serde(default = "default_max_depth")]
	max_depth: usize,

	/// Maximum follow-words per node (0 = unlimited).
	#[serde(default = "default_max_breadth")]
	max_breadth: usize,
}

fn default_max_depth() -> usize {
	DEFAULT_MAX_DEPTH
}

fn default_max_breadth() -> usize {
	DEFAULT_MAX_BREADTH
}

impl Default for ExplorerConfig {
	fn default() -> Self {
		Self { max_depth: DEFAULT_MAX_DEPTH, max_breadth: DEFAULT_MAX_BREADTH }
	}
}

impl ExplorerConfig {
	/// Creates a validated configuration.
	///
	/// # Errors
	/// Returns an error if `max_depth` is 0 or above `MAX_TREE_DEPTH`.
	pub fn new(max_depth: usize, max_breadth: usize) -> Result<Self> {
		let mut config = Self::default();
		config.set_max_depth(max_depth)?;
		config.set_max_breadth(max_breadth);
		Ok(config)
	}

	/// Parses a configuration from JSON text.
	///
	/// # Errors
	/// Returns `InvalidConfig` on unparsable JSON and `InvalidArgument`
	/// if the parsed values break the invariants.
	pub fn from_json(json: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(json).map_err(EchoTreeError::InvalidConfig)?;
		config.validate()?;
		Ok(config)
	}

	/// Loads a configuration from a JSON file.
	///
	/// # Errors
	/// - `Io` if the file cannot be read
	/// - `InvalidConfig` if its contents are not a valid configuration
	/// - `InvalidArgument` if the parsed values break the invariants
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let contents = io::read_file(path)?;
		Self::from_json(&contents)
	}

	pub fn max_depth(&self) -> usize {
		self.max_depth
	}

	pub fn max_breadth(&self) -> usize {
		self.max_breadth
	}

	/// Sets the tree depth.
	///
	/// # Errors
	/// Returns an error if `max_depth` is 0 (a tree always has its root)
	/// or above `MAX_TREE_DEPTH`.
	pub fn set_max_depth(&mut self, max_depth: usize) -> Result<()> {
		check_max_depth(max_depth)?;
		self.max_depth = max_depth;
		Ok(())
	}

	/// Sets the number of follow-words kept per node (0 = unlimited).
	pub fn set_max_breadth(&mut self, max_breadth: usize) {
		self.max_breadth = max_breadth;
	}

	/// Checks the invariants; needed for values deserialized through serde directly.
	pub(crate) fn validate(&self) -> Result<()> {
		check_max_depth(self.max_depth)
	}
}

fn check_max_depth(max_depth: usize) -> Result<()> {
	if !(1..=MAX_TREE_DEPTH).contains(&max_depth) {
		return Err(EchoTreeError::invalid_argument(format!(
			"max_depth must be between 1 and {}, got {}",
			MAX_TREE_DEPTH, max_depth
		)));
	}
	Ok(())
}
