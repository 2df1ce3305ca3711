//! Search a 2D Matrix II (LeetCode 240).
//!
//! Rows and columns are each sorted ascending.

use crate::traits::{Problem, Variant};

/// Start at the top-right corner: larger values lie below, smaller to the
/// left, so every comparison discards a row or a column. O(m + n).
pub fn staircase(matrix: &[Vec<i32>], target: i32) -> bool {
    let Some(cols) = matrix.first().map(Vec::len) else {
        return false;
    };
    let (mut row, mut col) = (0usize, cols);
    while row < matrix.len() && col > 0 {
        let value = matrix[row][col - 1];
        match value.cmp(&target) {
            std::cmp::Ordering::Equal => return true,
            std::cmp::Ordering::Greater => col -= 1,
            std::cmp::Ordering::Less => row += 1,
        }
    }
    false
}

/// Binary search each row. O(m log n).
pub fn row_binary_search(matrix: &[Vec<i32>], target: i32) -> bool {
    matrix.iter().any(|row| row.binary_search(&target).is_ok())
}

pub struct SearchMatrix;

type Input = (Vec<Vec<i32>>, i32);

impl Problem for SearchMatrix {
    type Input = Input;
    type Output = bool;
    const ID: u32 = 240;
    const SLUG: &'static str = "search-a-2d-matrix-ii";
    const TITLE: &'static str = "Search a 2D Matrix II";

    fn variants() -> Vec<Variant<Input, bool>> {
        vec![
            Variant::new("staircase", |(m, t): &Input| staircase(m, *t)),
            Variant::new("row_binary_search", |(m, t): &Input| row_binary_search(m, *t)),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        let m = vec![
            vec![1, 4, 7, 11, 15],
            vec![2, 5, 8, 12, 19],
            vec![3, 6, 9, 16, 22],
            vec![10, 13, 14, 17, 24],
            vec![18, 21, 23, 26, 30],
        ];
        vec![(m.clone(), 5), (m, 20), (vec![], 1), (vec![vec![]], 1)]
    }
}
