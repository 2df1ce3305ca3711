//! Group Anagrams (LeetCode 49).
//!
//! Groups appear in order of their first member; members keep input order.

use crate::traits::{Problem, Variant};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

fn group_by_key<K: Hash + Eq>(strs: &[String], key: impl Fn(&str) -> K) -> Vec<Vec<String>> {
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();
    for s in strs {
        let slot = *index.entry(key(s)).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(s.clone());
    }
    groups
}

/// Key: the word's chars sorted.
pub fn sorted_key(strs: &[String]) -> Vec<Vec<String>> {
    group_by_key(strs, |s| {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    })
}

/// Key: per-char counts. Avoids the sort for long words.
pub fn count_key(strs: &[String]) -> Vec<Vec<String>> {
    group_by_key(strs, |s| {
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for c in s.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts.into_iter().collect::<Vec<_>>()
    })
}

fn normalized(groups: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut out: Vec<Vec<String>> = groups
        .iter()
        .map(|g| {
            let mut g = g.clone();
            g.sort();
            g
        })
        .collect();
    out.sort();
    out
}

pub struct GroupAnagrams;

impl Problem for GroupAnagrams {
    type Input = Vec<String>;
    type Output = Vec<Vec<String>>;
    const ID: u32 = 49;
    const SLUG: &'static str = "group-anagrams";
    const TITLE: &'static str = "Group Anagrams";

    fn variants() -> Vec<Variant<Vec<String>, Vec<Vec<String>>>> {
        vec![
            Variant::new("sorted_key", |s: &Vec<String>| sorted_key(s)),
            Variant::new("count_key", |s: &Vec<String>| count_key(s)),
        ]
    }

    fn demo_cases() -> Vec<Vec<String>> {
        let words = |ws: &[&str]| ws.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        vec![
            words(&["eat", "tea", "tan", "ate", "nat", "bat"]),
            words(&[""]),
            words(&["a"]),
            words(&[]),
        ]
    }

    /// Group order and member order are irrelevant.
    fn agree(_: &Vec<String>, expected: &Vec<Vec<String>>, actual: &Vec<Vec<String>>) -> bool {
        normalized(expected) == normalized(actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(ws: &[&str]) -> Vec<String> {
        ws.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn classic() {
        let input = words(&["eat", "tea", "tan", "ate", "nat", "bat"]);
        let expected = vec![
            words(&["eat", "tea", "ate"]),
            words(&["tan", "nat"]),
            words(&["bat"]),
        ];
        assert_eq!(sorted_key(&input), expected);
        assert_eq!(count_key(&input), expected);
    }

    #[test]
    fn empty_words_group_together() {
        assert_eq!(sorted_key(&words(&["", ""])), vec![words(&["", ""])]);
        assert!(count_key(&[]).is_empty());
    }
}
