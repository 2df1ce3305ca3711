//! Longest Common Prefix (LeetCode 14).

use crate::traits::{Problem, Variant};

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map_or_else(|| a.len().min(b.len()), |((i, _), _)| i);
    &a[..end]
}

/// Compare column by column against the first word.
pub fn vertical_scan(strs: &[String]) -> String {
    let Some(first) = strs.first() else {
        return String::new();
    };
    for (i, c) in first.char_indices() {
        let mismatch = strs[1..]
            .iter()
            .any(|s| s.get(i..).and_then(|rest| rest.chars().next()) != Some(c));
        if mismatch {
            return first[..i].to_string();
        }
    }
    first.clone()
}

/// Prefix of the halves' prefixes.
pub fn divide_and_conquer(strs: &[String]) -> String {
    fn solve(strs: &[String]) -> &str {
        match strs {
            [] => "",
            [only] => only.as_str(),
            _ => {
                let (l, r) = strs.split_at(strs.len() / 2);
                common_prefix(solve(l), solve(r))
            }
        }
    }
    solve(strs).to_string()
}

/// The prefix shared by the lexicographic min and max is shared by all.
pub fn sort_extremes(strs: &[String]) -> String {
    let (Some(min), Some(max)) = (strs.iter().min(), strs.iter().max()) else {
        return String::new();
    };
    common_prefix(min, max).to_string()
}

pub struct LongestCommonPrefix;

impl Problem for LongestCommonPrefix {
    type Input = Vec<String>;
    type Output = String;
    const ID: u32 = 14;
    const SLUG: &'static str = "longest-common-prefix";
    const TITLE: &'static str = "Longest Common Prefix";

    fn variants() -> Vec<Variant<Vec<String>, String>> {
        vec![
            Variant::new("vertical_scan", |s: &Vec<String>| vertical_scan(s)),
            Variant::new("divide_and_conquer", |s: &Vec<String>| divide_and_conquer(s)),
            Variant::new("sort_extremes", |s: &Vec<String>| sort_extremes(s)),
        ]
    }

    fn demo_cases() -> Vec<Vec<String>> {
        let words = |ws: &[&str]| ws.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        vec![
            words(&["flower", "flow", "flight"]),
            words(&["dog", "racecar", "car"]),
            words(&["alone"]),
            words(&["", "b"]),
            words(&["前缀树", "前缀和", "前进"]),
            words(&[]),
        ]
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
        let w = words(&["flower", "flow", "flight"]);
        assert_eq!(vertical_scan(&w), "fl");
        assert_eq!(divide_and_conquer(&w), "fl");
        assert_eq!(sort_extremes(&w), "fl");
        assert_eq!(vertical_scan(&words(&["dog", "racecar", "car"])), "");
    }

    #[test]
    fn whole_word_is_prefix() {
        let w = words(&["ab", "abc", "abcd"]);
        assert_eq!(vertical_scan(&w), "ab");
        assert_eq!(divide_and_conquer(&w), "ab");
        assert_eq!(sort_extremes(&w), "ab");
    }

    #[test]
    fn multibyte_and_empty() {
        let w = words(&["前缀树", "前缀和", "前进"]);
        assert_eq!(vertical_scan(&w), "前");
        assert_eq!(divide_and_conquer(&w), "前");
        assert_eq!(vertical_scan(&[]), "");
        assert_eq!(sort_extremes(&words(&["", "b"])), "");
    }
}
