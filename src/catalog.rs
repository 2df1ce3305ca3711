//! Type-erased registry of every problem in the crate.
//!
//! [`Problem`] has associated types and constants, so it cannot be a trait
//! object. [`Exercise`] is the object-safe face the console binary and the
//! catalog-wide tests work with; [`Entry`] bridges the two.

use crate::engine::Runner;
use crate::error::{Error, Result};
use crate::problems::{arrays, backtracking, dp, linked_list, matrix, search, strings, trees};
use crate::report::ProblemReport;
use crate::traits::Problem;
use std::fmt;
use std::marker::PhantomData;

/// Object-safe view of a [`Problem`].
pub trait Exercise: Send + Sync {
    fn id(&self) -> u32;
    fn slug(&self) -> &'static str;
    fn title(&self) -> &'static str;
    /// Module group the problem lives in, e.g. `"arrays"`.
    fn category(&self) -> &'static str;
    fn variant_names(&self) -> Vec<&'static str>;
    fn demo_count(&self) -> usize;
    /// Run every demo case through `runner`.
    fn run(&self, runner: &Runner) -> Result<ProblemReport>;
}

impl fmt::Debug for dyn Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exercise")
            .field("id", &self.id())
            .field("slug", &self.slug())
            .finish()
    }
}

/// Adapter exposing a [`Problem`] as an [`Exercise`].
pub struct Entry<P> {
    category: &'static str,
    _problem: PhantomData<fn() -> P>,
}

impl<P: Problem> Entry<P> {
    pub const fn new(category: &'static str) -> Self {
        Self {
            category,
            _problem: PhantomData,
        }
    }
}

impl<P: Problem> Exercise for Entry<P> {
    fn id(&self) -> u32 {
        P::ID
    }

    fn slug(&self) -> &'static str {
        P::SLUG
    }

    fn title(&self) -> &'static str {
        P::TITLE
    }

    fn category(&self) -> &'static str {
        self.category
    }

    fn variant_names(&self) -> Vec<&'static str> {
        P::variants().iter().map(|v| v.name).collect()
    }

    fn demo_count(&self) -> usize {
        P::demo_cases().len()
    }

    fn run(&self, runner: &Runner) -> Result<ProblemReport> {
        runner.run::<P>()
    }
}

fn entry<P: Problem + 'static>(category: &'static str) -> Box<dyn Exercise> {
    Box::new(Entry::<P>::new(category))
}

/// Every registered problem, ordered by LeetCode number.
pub fn all() -> Vec<Box<dyn Exercise>> {
    let mut entries = vec![
        entry::<arrays::two_sum::TwoSum>("arrays"),
        entry::<arrays::remove_duplicates::RemoveDuplicates>("arrays"),
        entry::<arrays::max_area::MaxArea>("arrays"),
        entry::<arrays::three_sum::ThreeSum>("arrays"),
        entry::<arrays::merge_intervals::MergeIntervals>("arrays"),
        entry::<arrays::find_duplicate::FindDuplicate>("arrays"),
        entry::<arrays::product_except_self::ProductExceptSelf>("arrays"),
        entry::<arrays::move_zeroes::MoveZeroes>("arrays"),
        entry::<arrays::max_subarray::MaxSubarray>("arrays"),
        entry::<arrays::trap::Trap>("arrays"),
        entry::<arrays::max_sliding_window::MaxSlidingWindow>("arrays"),
        entry::<arrays::subarray_sum::SubarraySum>("arrays"),
        entry::<arrays::majority_element::MajorityElement>("arrays"),
        entry::<strings::longest_substring::LongestSubstring>("strings"),
        entry::<strings::longest_palindrome::LongestPalindrome>("strings"),
        entry::<strings::my_atoi::MyAtoi>("strings"),
        entry::<strings::valid_parentheses::ValidParentheses>("strings"),
        entry::<strings::group_anagrams::GroupAnagrams>("strings"),
        entry::<strings::min_window::MinWindow>("strings"),
        entry::<strings::longest_common_prefix::LongestCommonPrefix>("strings"),
        entry::<search::my_sqrt::MySqrt>("search"),
        entry::<search::search_rotated::SearchRotated>("search"),
        entry::<search::search_range::SearchRange>("search"),
        entry::<search::search_matrix::SearchMatrix>("search"),
        entry::<matrix::spiral_order::SpiralOrder>("matrix"),
        entry::<matrix::rotate_image::RotateImage>("matrix"),
        entry::<matrix::set_zeroes::SetZeroes>("matrix"),
        entry::<trees::traversal::InorderTraversal>("trees"),
        entry::<trees::traversal::PreorderTraversal>("trees"),
        entry::<trees::traversal::PostorderTraversal>("trees"),
        entry::<trees::level_order::LevelOrder>("trees"),
        entry::<trees::max_depth::MaxDepth>("trees"),
        entry::<trees::is_valid_bst::IsValidBst>("trees"),
        entry::<trees::invert_tree::InvertTree>("trees"),
        entry::<trees::build_tree::BuildTree>("trees"),
        entry::<backtracking::letter_combinations::LetterCombinations>("backtracking"),
        entry::<backtracking::permute::Permute>("backtracking"),
        entry::<backtracking::subsets::Subsets>("backtracking"),
        entry::<backtracking::combination_sum::CombinationSum>("backtracking"),
        entry::<backtracking::generate_parenthesis::GenerateParenthesis>("backtracking"),
        entry::<backtracking::exist::Exist>("backtracking"),
        entry::<backtracking::find_words::FindWords>("backtracking"),
        entry::<linked_list::reverse_list::ReverseList>("linked_list"),
        entry::<linked_list::merge_two_lists::MergeTwoLists>("linked_list"),
        entry::<dp::climb_stairs::ClimbStairs>("dp"),
        entry::<dp::coin_change::CoinChange>("dp"),
        entry::<dp::length_of_lis::LengthOfLis>("dp"),
        entry::<dp::rob::Rob>("dp"),
    ];
    entries.sort_by_key(|e| e.id());
    entries
}

/// Look a problem up by LeetCode number (`"5"`) or slug
/// (`"longest-palindromic-substring"`).
pub fn find(key: &str) -> Result<Box<dyn Exercise>> {
    let key = key.trim();
    let id: Option<u32> = key.parse().ok();
    all()
        .into_iter()
        .find(|e| Some(e.id()) == id || e.slug().eq_ignore_ascii_case(key))
        .ok_or_else(|| Error::UnknownProblem(key.to_string()))
}

/// Resolve several keys in the given order; no keys selects everything.
/// A category name (`"trees"`) selects every problem in it.
pub fn select<S: AsRef<str>>(keys: &[S]) -> Result<Vec<Box<dyn Exercise>>> {
    if keys.is_empty() {
        return Ok(all());
    }
    let mut picked: Vec<Box<dyn Exercise>> = Vec::new();
    for key in keys {
        let key = key.as_ref();
        let in_category: Vec<_> = all()
            .into_iter()
            .filter(|e| e.category() == key)
            .collect();
        if in_category.is_empty() {
            picked.push(find(key)?);
        } else {
            picked.extend(in_category);
        }
    }
    Ok(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_and_slugs_are_unique_and_sorted() {
        let entries = all();
        let ids: Vec<u32> = entries.iter().map(|e| e.id()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "{ids:?}");
        let slugs: HashSet<_> = entries.iter().map(|e| e.slug()).collect();
        assert_eq!(slugs.len(), entries.len());
    }

    #[test]
    fn every_entry_has_variants_and_cases() {
        for e in all() {
            assert!(e.variant_names().len() >= 2, "{} has one variant", e.slug());
            assert!(e.demo_count() > 0, "{} has no demo cases", e.slug());
        }
    }

    #[test]
    fn find_by_id_or_slug() {
        assert_eq!(find("5").unwrap().slug(), "longest-palindromic-substring");
        assert_eq!(find("two-sum").unwrap().id(), 1);
        assert_eq!(find(" TWO-SUM ").unwrap().id(), 1);
        assert_eq!(
            find("nope").unwrap_err(),
            Error::UnknownProblem("nope".into())
        );
        assert!(find("9999").is_err());
    }

    #[test]
    fn select_expands_categories() {
        let picked = select(&["dp", "1"]).unwrap();
        let ids: Vec<u32> = picked.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![70, 198, 300, 322, 1]);
        assert_eq!(select::<&str>(&[]).unwrap().len(), all().len());
        assert!(select(&["linked_list", "missing"]).is_err());
    }

    #[test]
    fn run_through_the_trait_object() {
        let exercise = find("70").unwrap();
        let report = exercise.run(&Runner::with_options(1, true)).unwrap();
        assert_eq!(report.slug, "climbing-stairs");
        assert_eq!(report.cases.len(), exercise.demo_count());
        assert!(report.is_consistent());
    }
}
