use echo_tree_core::WordNode;
use echo_tree_core::model::evaluator::word_sequences;
use echo_tree_core::model::explorer::WordExplorer;
use echo_tree_core::model::explorer_config::ExplorerConfig;
use echo_tree_core::model::follower_table::FollowerTable;
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see explorer activity
    env_logger::init();

    // A default node carries the placeholder word and no follow-words
    let my_word = WordNode::default();
    println!("Initial word: {}", my_word.word());
    println!("Follow words: {:?}", my_word.next_level_words());
    println!("Follow word nodes: {}", my_word.next_level_word_objs().len());

    // Follow-words are handed in at construction time
    let root = WordNode::with_followers("keyboard", vec![WordNode::new("mouse")]);
    println!("{} -> {:?}", root.word(), root.next_level_words());

    // Observations (word, follower, count), as a co-occurrence table would provide them
    let mut table = FollowerTable::new();
    for (word, follower, count) in [
        ("echo", "tree", 12),
        ("echo", "chamber", 7),
        ("echo", "location", 3),
        ("tree", "house", 5),
        ("tree", "structure", 4),
        ("chamber", "music", 2),
        ("house", "party", 6),
    ] {
        table.record_count(word, follower, count)?;
    }
    info!("table holds {} words", table.len());

    // Random next words, weighted by observation counts
    for _ in 0..3 {
        if let Some(next) = table.predict_next("echo") {
            println!("echo ... {}", next);
        }
    }

    // Expand a root word into a tree: 3 levels, 2 follow-words per node
    let config = ExplorerConfig::new(3, 2)?;
    let mut explorer = WordExplorer::new(table);
    let tree = explorer.make_word_tree("echo", &config)?;
    println!("Tree: {}", tree.to_json()?);

    for sequence in word_sequences(&tree) {
        println!("Sequence: {}", sequence);
    }

    // Invalid limits are rejected
    match ExplorerConfig::new(0, 2) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Depth 0 is invalid: {}", e),
    }

    Ok(())
}
