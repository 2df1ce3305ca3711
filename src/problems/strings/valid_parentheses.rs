//! Valid Parentheses (LeetCode 20).
//!
//! Brackets `()[]{}` must close in the right order. Any other character
//! makes the string invalid.

use crate::traits::{Problem, Variant};

/// Push the expected closer for every opener; each closer must match the top.
pub fn stack(s: &str) -> bool {
    let mut expected: Vec<char> = Vec::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '(' => expected.push(')'),
            '[' => expected.push(']'),
            '{' => expected.push('}'),
            ')' | ']' | '}' => {
                if expected.pop() != Some(c) {
                    return false;
                }
            }
            _ => return false,
        }
    }
    expected.is_empty()
}

/// Repeatedly delete adjacent pairs until nothing changes. O(n²).
pub fn replace_pairs(s: &str) -> bool {
    if s.chars().any(|c| !"()[]{}".contains(c)) {
        return false;
    }
    let mut current = s.to_string();
    loop {
        let next = current
            .replace("()", "")
            .replace("[]", "")
            .replace("{}", "");
        if next.len() == current.len() {
            return next.is_empty();
        }
        current = next;
    }
}

pub struct ValidParentheses;

impl Problem for ValidParentheses {
    type Input = String;
    type Output = bool;
    const ID: u32 = 20;
    const SLUG: &'static str = "valid-parentheses";
    const TITLE: &'static str = "Valid Parentheses";

    fn variants() -> Vec<Variant<String, bool>> {
        vec![
            Variant::new("stack", |s: &String| stack(s)),
            Variant::new("replace_pairs", |s: &String| replace_pairs(s)),
        ]
    }

    fn demo_cases() -> Vec<String> {
        ["()", "()[]{}", "(]", "([)]", "{[]}", "", "((", "a()"]
            .into_iter()
            .map(String::from)
            .collect()
    }
}
