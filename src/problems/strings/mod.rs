//! String problems: windows over chars, palindromes, parsing and grouping.

pub mod group_anagrams;
pub mod longest_common_prefix;
pub mod longest_palindrome;
pub mod longest_substring;
pub mod min_window;
pub mod my_atoi;
pub mod valid_parentheses;
