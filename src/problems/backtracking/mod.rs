//! Exhaustive search with undo: combinations, permutations and grid walks.

pub mod combination_sum;
pub mod exist;
pub mod find_words;
pub mod generate_parenthesis;
pub mod letter_combinations;
pub mod permute;
pub mod subsets;
