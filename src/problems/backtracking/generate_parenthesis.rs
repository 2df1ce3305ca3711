//! Generate Parentheses (LeetCode 22).

use crate::traits::{same_elements, Problem, Variant};

/// Place `(` while any remain, `)` while it would not close more than was
/// opened.
pub fn backtracking(n: usize) -> Vec<String> {
    fn place(open: usize, close: usize, n: usize, path: &mut String, out: &mut Vec<String>) {
        if path.len() == 2 * n {
            out.push(path.clone());
            return;
        }
        if open < n {
            path.push('(');
            place(open + 1, close, n, path, out);
            path.pop();
        }
        if close < open {
            path.push(')');
            place(open, close + 1, n, path, out);
            path.pop();
        }
    }
    let mut out = Vec::new();
    place(0, 0, n, &mut String::with_capacity(2 * n), &mut out);
    out
}

/// Every sequence of `k` pairs is `(a)b` where `a` has `c` pairs and `b` has
/// `k - 1 - c`; tables are built from 0 up to `n`.
pub fn closure_number(n: usize) -> Vec<String> {
    let mut table: Vec<Vec<String>> = vec![vec![String::new()]];
    for k in 1..=n {
        let mut level = Vec::new();
        for c in 0..k {
            for inner in &table[c] {
                for tail in &table[k - 1 - c] {
                    level.push(format!("({inner}){tail}"));
                }
            }
        }
        table.push(level);
    }
    table.swap_remove(n)
}

pub struct GenerateParenthesis;

impl Problem for GenerateParenthesis {
    type Input = usize;
    type Output = Vec<String>;
    const ID: u32 = 22;
    const SLUG: &'static str = "generate-parentheses";
    const TITLE: &'static str = "Generate Parentheses";

    fn variants() -> Vec<Variant<usize, Vec<String>>> {
        vec![
            Variant::new("backtracking", |n: &usize| backtracking(*n)),
            Variant::new("closure_number", |n: &usize| closure_number(*n)),
        ]
    }

    fn demo_cases() -> Vec<usize> {
        vec![3, 1, 0, 5]
    }

    fn agree(_: &usize, expected: &Vec<String>, actual: &Vec<String>) -> bool {
        same_elements(expected, actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_pairs() {
        assert_eq!(
            backtracking(3),
            ["((()))", "(()())", "(())()", "()(())", "()()()"]
        );
        assert!(same_elements(&closure_number(3), &backtracking(3)));
    }

    #[test]
    fn catalan_counts() {
        let catalan = [1, 1, 2, 5, 14, 42, 132];
        for (n, &count) in catalan.iter().enumerate() {
            assert_eq!(backtracking(n).len(), count);
            assert_eq!(closure_number(n).len(), count);
        }
    }
}
