//! Integration tests for the word node accessors and tree expansion.

use echo_tree_core::model::evaluator::word_sequences;
use echo_tree_core::model::explorer::WordExplorer;
use echo_tree_core::model::explorer_config::ExplorerConfig;
use echo_tree_core::model::follower_table::FollowerTable;
use echo_tree_core::WordNode;

// ============================================================================
// Accessor contract
// ============================================================================

#[test]
fn fresh_node_has_no_follow_words() {
	let node = WordNode::default();
	assert!(node.next_level_word_objs().is_empty());
	assert!(node.next_level_words().is_empty());
}

#[test]
fn order_is_preserved() {
	let b = WordNode::new("b");
	let c = WordNode::new("c");
	let a = WordNode::with_followers("a", vec![b.clone(), c.clone()]);

	assert_eq!(a.next_level_word_objs(), &[b, c]);
	assert_eq!(a.next_level_words(), vec!["b", "c"]);
}

#[test]
fn next_level_words_is_idempotent() {
	let root = WordNode::with_followers(
		"power",
		vec![WordNode::new("plant"), WordNode::new("grid"), WordNode::new("outage")],
	);
	let first = root.next_level_words();
	let second = root.next_level_words();
	assert_eq!(first, second);
}

#[test]
fn words_match_nodes_position_by_position() {
	let root = WordNode::with_followers(
		"issues",
		vec![WordNode::new("related"), WordNode::new("need"), WordNode::new("raised")],
	);
	let words = root.next_level_words();
	let nodes = root.next_level_word_objs();
	assert_eq!(words.len(), nodes.len());
	for (node, word) in nodes.iter().zip(&words) {
		assert_eq!(node.word(), word);
	}
}

#[test]
fn keyboard_mouse_scenario() {
	let leaf1 = WordNode::new("mouse");
	let root = WordNode::with_followers("keyboard", vec![leaf1]);
	assert_eq!(root.next_level_words(), vec!["mouse".to_owned()]);
}

#[test]
fn grandchildren_are_not_listed() {
	let child = WordNode::with_followers("b", vec![WordNode::new("c"), WordNode::new("d")]);
	let root = WordNode::with_followers("a", vec![child]);
	assert_eq!(root.next_level_words(), vec!["b"]);
}

// ============================================================================
// Tree expansion end to end
// ============================================================================

fn enron_like_table() -> FollowerTable {
	let mut table = FollowerTable::new();
	for (word, follower, count) in [
		("reliability", "new", 12),
		("reliability", "issues", 9),
		("reliability", "standards", 4),
		("new", "power", 7),
		("new", "generation", 5),
		("new", "business", 2),
		("issues", "related", 3),
		("issues", "raised", 1),
	] {
		table.record_count(word, follower, count).unwrap();
	}
	table
}

#[test]
fn explored_tree_feeds_evaluator() {
	let mut explorer = WordExplorer::new(enron_like_table());
	let config = ExplorerConfig::new(3, 2).unwrap();
	let tree = explorer.make_word_tree("reliability", &config).unwrap();

	assert_eq!(tree.next_level_words(), vec!["new", "issues"]);
	assert_eq!(
		word_sequences(&tree),
		vec!["reliability new power generation", "reliability issues related raised"]
	);
}

#[test]
fn json_tree_parses_back() {
	let mut explorer = WordExplorer::new(enron_like_table());
	let config = ExplorerConfig::default();
	let json = explorer.make_json_tree("reliability", &config).unwrap();
	let parsed = WordNode::from_json(&json).unwrap();

	assert_eq!(parsed, explorer.make_word_tree("reliability", &config).unwrap());
	assert_eq!(parsed.depth(), 3);
}
