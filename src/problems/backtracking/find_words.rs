//! Word Search II (LeetCode 212).
//!
//! Report every dictionary word that can be traced on the board. Each word is
//! reported once; the order of the result is unspecified.

use super::exist::{backtracking_visited, neighbors, sample_board, Board};
use crate::traits::{same_elements, Problem, Variant};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: BTreeMap<char, usize>,
    /// Index into the inserted words when a word ends here.
    word: Option<usize>,
}

/// Prefix tree over `char`s, stored as an arena of nodes.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: Vec<String>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: Vec::new(),
        }
    }

    pub fn insert(&mut self, word: &str) {
        let mut node = 0;
        for c in word.chars() {
            node = match self.nodes[node].children.get(&c) {
                Some(&next) => next,
                None => {
                    self.nodes.push(TrieNode::default());
                    let next = self.nodes.len() - 1;
                    self.nodes[node].children.insert(c, next);
                    next
                }
            };
        }
        if self.nodes[node].word.is_none() {
            self.nodes[node].word = Some(self.words.len());
            self.words.push(word.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| self.nodes[n].word.is_some())
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn walk(&self, s: &str) -> Option<usize> {
        s.chars()
            .try_fold(0, |node, c| self.nodes[node].children.get(&c).copied())
    }

    fn child(&self, node: usize, c: char) -> Option<usize> {
        self.nodes[node].children.get(&c).copied()
    }
}

/// One board walk for the whole dictionary, guided by the trie.
///
/// Paths leave the trie as soon as they spell no dictionary prefix. A found
/// word is unmarked so it is reported once, and childless unmarked nodes are
/// detached so later walks skip exhausted branches.
pub fn trie_backtracking(board: &[Vec<char>], words: &[String]) -> Vec<String> {
    fn dfs(
        board: &mut [Vec<char>],
        trie: &mut Trie,
        (r, c): (usize, usize),
        parent: usize,
        found: &mut Vec<String>,
    ) {
        let Some(ch) = board.get(r).and_then(|row| row.get(c)).copied() else {
            return;
        };
        let Some(node) = trie.child(parent, ch) else {
            return;
        };
        if let Some(w) = trie.nodes[node].word.take() {
            found.push(trie.words[w].clone());
        }
        board[r][c] = '\0';
        for next in neighbors(r, c) {
            dfs(board, trie, next, node, found);
        }
        board[r][c] = ch;
        if trie.nodes[node].children.is_empty() && trie.nodes[node].word.is_none() {
            trie.nodes[parent].children.remove(&ch);
        }
    }

    let mut trie = Trie::new();
    for w in words {
        trie.insert(w);
    }
    let mut board = board.to_vec();
    let mut found = Vec::new();
    for r in 0..board.len() {
        for c in 0..board[r].len() {
            dfs(&mut board, &mut trie, (r, c), 0, &mut found);
        }
    }
    found
}

/// Baseline: an independent word search per distinct word.
pub fn per_word_search(board: &[Vec<char>], words: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .iter()
        .filter(|w| seen.insert(*w))
        .filter(|w| !w.is_empty() && backtracking_visited(board, w))
        .cloned()
        .collect()
}

pub struct FindWords;

type Input = (Board, Vec<String>);

impl Problem for FindWords {
    type Input = Input;
    type Output = Vec<String>;
    const ID: u32 = 212;
    const SLUG: &'static str = "word-search-ii";
    const TITLE: &'static str = "Word Search II";

    fn variants() -> Vec<Variant<Input, Vec<String>>> {
        vec![
            Variant::new("trie_backtracking", |(board, words): &Input| {
                trie_backtracking(board, words)
            }),
            Variant::new("per_word_search", |(board, words): &Input| {
                per_word_search(board, words)
            }),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        let grid = |rows: &[&str]| -> Board { rows.iter().map(|r| r.chars().collect()).collect() };
        let words = |ws: &[&str]| ws.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        vec![
            (
                grid(&["oaan", "etae", "ihkr", "iflv"]),
                words(&["oath", "pea", "eat", "rain"]),
            ),
            (grid(&["ab", "cd"]), words(&["abcb"])),
            (
                sample_board(),
                words(&["ABCCED", "SEE", "ABCB", "SEED", "ABC", "ABC"]),
            ),
        ]
    }

    fn agree(_: &Input, expected: &Vec<String>, actual: &Vec<String>) -> bool {
        same_elements(expected, actual)
    }
}
