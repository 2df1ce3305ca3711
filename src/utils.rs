//! Assorted helpers for rendering and timing.

use std::fmt::Debug;

/// Default maximum length of a rendered input or output.
pub const DEFAULT_RENDER_LIMIT: usize = 96;

/// Render `value` with `Debug`, truncating to at most `limit` characters.
///
/// Truncated renderings end in `…`, which counts towards the limit.
pub fn render_debug<T: Debug + ?Sized>(value: &T, limit: usize) -> String {
    let full = format!("{value:?}");
    if full.chars().count() <= limit {
        return full;
    }
    if limit == 0 {
        return String::new();
    }
    let mut out: String = full.chars().take(limit - 1).collect();
    out.push('…');
    out
}

/// Median of timing samples in nanoseconds; 0 for no samples.
///
/// For an even count the lower middle sample is returned.
pub fn median_ns(samples: &[u64]) -> u64 {
    if samples.is_empty() {
        return 0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    sorted[(sorted.len() - 1) / 2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_are_untouched() {
        assert_eq!(render_debug(&vec![1, 2, 3], 20), "[1, 2, 3]");
        assert_eq!(render_debug("ab", 4), "\"ab\"");
    }

    #[test]
    fn long_values_are_truncated_on_char_boundaries() {
        let s = render_debug("回文回文回文回文", 5);
        assert_eq!(s.chars().count(), 5);
        assert!(s.ends_with('…'));
        assert_eq!(render_debug(&[0u8; 50], 0), "");
    }

    #[test]
    fn median_behaviour() {
        assert_eq!(median_ns(&[]), 0);
        assert_eq!(median_ns(&[7]), 7);
        assert_eq!(median_ns(&[9, 1, 5]), 5);
        assert_eq!(median_ns(&[4, 1, 3, 2]), 2);
    }
}
