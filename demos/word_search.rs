//! Trie-driven word search on a letter grid.
//!
//! Run with:
//! `cargo run --example word_search`

use hot100::problems::backtracking::exist;
use hot100::problems::backtracking::find_words::{self, Trie};

fn main() {
    let board: exist::Board = ["oaan", "etae", "ihkr", "iflv"]
        .iter()
        .map(|row| row.chars().collect())
        .collect();
    let words: Vec<String> = ["oath", "pea", "eat", "rain", "oat", "hike"]
        .map(String::from)
        .to_vec();

    let mut trie = Trie::new();
    for w in &words {
        trie.insert(w);
    }
    println!("dictionary: {} words", trie.len());
    println!("  prefix \"oa\" present: {}", trie.starts_with("oa"));
    println!("  word \"oa\" present:   {}", trie.contains("oa"));

    for row in &board {
        println!("  {}", row.iter().collect::<String>());
    }

    let mut found = find_words::trie_backtracking(&board, &words);
    found.sort();
    println!("found on the board: {found:?}");

    for w in ["oath", "kite"] {
        println!("exist({w:?}) = {}", exist::backtracking_visited(&board, w));
    }
}
