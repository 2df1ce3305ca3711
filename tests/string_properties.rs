use hot100::problems::strings::{
    longest_common_prefix, longest_palindrome, longest_substring, min_window, my_atoi,
    valid_parentheses,
};
use proptest::prelude::*;

fn longest_palindrome_len(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut best = 0;
    for i in 0..chars.len() {
        for j in i + 1..=chars.len() {
            if longest_palindrome::is_palindrome(&chars[i..j]) {
                best = best.max(j - i);
            }
        }
    }
    best
}

fn check_palindrome(s: &str, found: &str, expected_len: usize) -> Result<(), TestCaseError> {
    let chars: Vec<char> = found.chars().collect();
    prop_assert_eq!(chars.len(), expected_len, "{:?} in {:?}", found, s);
    prop_assert!(longest_palindrome::is_palindrome(&chars));
    prop_assert!(s.contains(found));
    Ok(())
}

proptest! {
    #[test]
    fn palindrome_variants_find_a_longest_substring(s in "[abc]{0,24}") {
        let len = longest_palindrome_len(&s);
        check_palindrome(&s, &longest_palindrome::manacher(&s), len)?;
        check_palindrome(&s, &longest_palindrome::expand_around_center(&s), len)?;
        check_palindrome(&s, &longest_palindrome::dynamic_programming(&s), len)?;
        check_palindrome(&s, &longest_palindrome::brute_force(&s), len)?;
    }

    #[test]
    fn palindromes_over_multibyte_chars(s in "[aé语]{0,12}") {
        let len = longest_palindrome_len(&s);
        check_palindrome(&s, &longest_palindrome::manacher(&s), len)?;
        check_palindrome(&s, &longest_palindrome::expand_around_center(&s), len)?;
    }

    #[test]
    fn longest_substring_variants_agree(s in "[a-eé ]{0,40}") {
        let expected = longest_substring::brute_force(&s);
        prop_assert_eq!(longest_substring::sliding_window_map(&s), expected);
        prop_assert_eq!(longest_substring::last_index_table(&s), expected);
    }

    #[test]
    fn min_window_is_a_shortest_covering_substring(s in "[abc]{0,20}", t in "[abc]{0,4}") {
        let found = min_window::sliding_window(&s, &t);
        let brute = min_window::brute_force(&s, &t);
        prop_assert_eq!(found.len(), brute.len());
        if !found.is_empty() {
            prop_assert!(s.contains(&found));
            prop_assert!(min_window::covers(&found, &t));
        }
    }

    #[test]
    fn atoi_scanners_agree(s in "[ +\\-0-9a]{0,14}") {
        prop_assert_eq!(my_atoi::linear_scan(&s), my_atoi::state_machine(&s));
    }

    #[test]
    fn atoi_reads_back_formatted_integers(x in any::<i32>(), pad in 0usize..3) {
        let s = format!("{}{}xyz", " ".repeat(pad), x);
        prop_assert_eq!(my_atoi::linear_scan(&s), x);
        prop_assert_eq!(my_atoi::state_machine(&s), x);
    }

    #[test]
    fn atoi_clamps_wide_values(x in any::<i64>()) {
        let expected = x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        prop_assert_eq!(my_atoi::linear_scan(&x.to_string()), expected);
        prop_assert_eq!(my_atoi::state_machine(&x.to_string()), expected);
    }

    #[test]
    fn bracket_checkers_agree(s in "[()\\[\\]{}]{0,16}") {
        prop_assert_eq!(valid_parentheses::stack(&s), valid_parentheses::replace_pairs(&s));
    }

    #[test]
    fn common_prefix_variants_agree(strs in prop::collection::vec("[ab]{0,6}", 0..6)) {
        let expected = longest_common_prefix::vertical_scan(&strs);
        prop_assert!(strs.iter().all(|s| s.starts_with(&expected)));
        prop_assert_eq!(longest_common_prefix::divide_and_conquer(&strs), expected.clone());
        prop_assert_eq!(longest_common_prefix::sort_extremes(&strs), expected);
    }
}
