use crate::error::Result;
use crate::model::word_node::WordNode;

/// Flattens a tree into word sequences, one per immediate child of the root.
///
/// Each sequence starts with the root word, followed by a pre-order walk of
/// the child's subtree, words separated by a single space. A root without
/// follow-words yields no sequence.
///
/// Example: `a -> [b -> [c, d], e]` gives `["a b c d", "a e"]`.
pub fn word_sequences(tree: &WordNode) -> Vec<String> {
	tree.next_level_word_objs()
		.iter()
		.map(|subtree| {
			let mut words = vec![tree.word()];
			collect_pre_order(subtree, &mut words);
			words.join(" ")
		})
		.collect()
}

/// Parses a JSON tree and flattens it with [`word_sequences`].
pub fn word_sequences_from_json(json: &str) -> Result<Vec<String>> {
	Ok(word_sequences(&WordNode::from_json(json)?))
}

fn collect_pre_order<'a>(node: &'a WordNode, words: &mut Vec<&'a str>) {
	words.push(node.word());
	for child in node.next_level_word_objs() {
		collect_pre_order(child, words);
	}
}
