//! Longest Palindromic Substring (LeetCode 5).
//!
//! Works on `char`s. When several longest palindromes exist, each variant
//! returns one of them; [`LongestPalindrome::agree`] accepts any.
//!
//! Variants, fastest first:
//! - Manacher: O(n) using mirrored radii inside the rightmost palindrome.
//! - Expand around center: O(n²) time, O(1) extra space.
//! - Dynamic programming: O(n²) time and space.
//! - Brute force: O(n³).

use crate::traits::{Problem, Variant};

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

pub fn is_palindrome(chars: &[char]) -> bool {
    chars.iter().eq(chars.iter().rev())
}

/// Grow outward from each of the `2n - 1` centers.
pub fn expand_around_center(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let (mut best_start, mut best_len) = (0usize, 0usize);

    let expand = |mut lo: usize, mut hi: usize| -> (usize, usize) {
        // (lo, hi) is an exclusive window that is already a palindrome
        while lo > 0 && hi < n && chars[lo - 1] == chars[hi] {
            lo -= 1;
            hi += 1;
        }
        (lo, hi - lo)
    };

    for i in 0..n {
        for (start, len) in [expand(i, i + 1), expand(i, i)] {
            if len > best_len {
                best_start = start;
                best_len = len;
            }
        }
    }
    collect(&chars[best_start..best_start + best_len])
}

/// Manacher's algorithm.
///
/// The input is interleaved with separators (`None`) so that every
/// palindrome has odd length around a single center. `radius[i]` in the
/// interleaved sequence equals the length of the matching palindrome in the
/// original string.
pub fn manacher(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let mut t: Vec<Option<char>> = Vec::with_capacity(2 * chars.len() + 1);
    t.push(None);
    for &c in &chars {
        t.push(Some(c));
        t.push(None);
    }

    let m = t.len();
    let mut radius = vec![0usize; m];
    let (mut center, mut right) = (0usize, 0usize);
    for i in 0..m {
        if i < right {
            let mirror = 2 * center - i;
            radius[i] = radius[mirror].min(right - i);
        }
        while i > radius[i]
            && i + radius[i] + 1 < m
            && t[i - radius[i] - 1] == t[i + radius[i] + 1]
        {
            radius[i] += 1;
        }
        if i + radius[i] > right {
            center = i;
            right = i + radius[i];
        }
    }

    let (best_center, best_radius) = radius
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0), |best, (i, r)| if r > best.1 { (i, r) } else { best });
    let start = (best_center - best_radius) / 2;
    collect(&chars[start..start + best_radius])
}

/// `table[i][j]`: whether `chars[i..=j]` is a palindrome, filled by
/// increasing length.
pub fn dynamic_programming(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    if n == 0 {
        return String::new();
    }
    let mut table = vec![vec![false; n]; n];
    let (mut best_start, mut best_len) = (0, 1);
    for (i, row) in table.iter_mut().enumerate() {
        row[i] = true;
    }
    for len in 2..=n {
        for i in 0..=n - len {
            let j = i + len - 1;
            table[i][j] = chars[i] == chars[j] && (len == 2 || table[i + 1][j - 1]);
            if table[i][j] && len > best_len {
                best_start = i;
                best_len = len;
            }
        }
    }
    collect(&chars[best_start..best_start + best_len])
}

pub fn brute_force(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    for len in (1..=n).rev() {
        for start in 0..=n - len {
            if is_palindrome(&chars[start..start + len]) {
                return collect(&chars[start..start + len]);
            }
        }
    }
    String::new()
}

pub struct LongestPalindrome;

impl Problem for LongestPalindrome {
    type Input = String;
    type Output = String;
    const ID: u32 = 5;
    const SLUG: &'static str = "longest-palindromic-substring";
    const TITLE: &'static str = "Longest Palindromic Substring";

    fn variants() -> Vec<Variant<String, String>> {
        vec![
            Variant::new("expand_around_center", |s: &String| expand_around_center(s)),
            Variant::new("manacher", |s: &String| manacher(s)),
            Variant::new("dynamic_programming", |s: &String| dynamic_programming(s)),
            Variant::new("brute_force", |s: &String| brute_force(s)),
        ]
    }

    fn demo_cases() -> Vec<String> {
        ["babad", "cbbd", "a", "", "forgeeksskeegfor", "abacdfgdcaba", "上海自来水来自海上"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Same length, and `actual` is a palindromic substring of the input.
    fn agree(input: &String, expected: &String, actual: &String) -> bool {
        let actual_chars: Vec<char> = actual.chars().collect();
        expected.chars().count() == actual_chars.len()
            && is_palindrome(&actual_chars)
            && input.contains(actual.as_str())
    }
}
