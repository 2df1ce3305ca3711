//! Set Matrix Zeroes (LeetCode 73).
//!
//! Every row and column containing a zero becomes all zeros.

use crate::traits::{Problem, Variant};
use std::collections::HashSet;

/// Record zero rows and columns first, then clear them. O(m + n) space.
pub fn marker_sets(matrix: &mut [Vec<i32>]) {
    let mut rows = HashSet::new();
    let mut cols = HashSet::new();
    for (r, row) in matrix.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            if v == 0 {
                rows.insert(r);
                cols.insert(c);
            }
        }
    }
    for (r, row) in matrix.iter_mut().enumerate() {
        for (c, v) in row.iter_mut().enumerate() {
            if rows.contains(&r) || cols.contains(&c) {
                *v = 0;
            }
        }
    }
}

/// Use the first row and column as the markers. O(1) extra space; two flags
/// remember whether the first row/column themselves held a zero.
pub fn first_row_col_markers(matrix: &mut [Vec<i32>]) {
    let rows = matrix.len();
    let Some(cols) = matrix.first().map(Vec::len) else {
        return;
    };
    let first_row_zero = matrix[0].iter().any(|&v| v == 0);
    let first_col_zero = matrix.iter().any(|row| row[0] == 0);

    for r in 1..rows {
        for c in 1..cols {
            if matrix[r][c] == 0 {
                matrix[r][0] = 0;
                matrix[0][c] = 0;
            }
        }
    }
    for r in 1..rows {
        for c in 1..cols {
            if matrix[r][0] == 0 || matrix[0][c] == 0 {
                matrix[r][c] = 0;
            }
        }
    }
    if first_row_zero {
        matrix[0].fill(0);
    }
    if first_col_zero {
        for row in matrix.iter_mut() {
            row[0] = 0;
        }
    }
}

pub struct SetZeroes;

impl Problem for SetZeroes {
    type Input = Vec<Vec<i32>>;
    type Output = Vec<Vec<i32>>;
    const ID: u32 = 73;
    const SLUG: &'static str = "set-matrix-zeroes";
    const TITLE: &'static str = "Set Matrix Zeroes";

    fn variants() -> Vec<Variant<Vec<Vec<i32>>, Vec<Vec<i32>>>> {
        vec![
            Variant::new("marker_sets", |m: &Vec<Vec<i32>>| {
                let mut m = m.clone();
                marker_sets(&mut m);
                m
            }),
            Variant::new("first_row_col_markers", |m: &Vec<Vec<i32>>| {
                let mut m = m.clone();
                first_row_col_markers(&mut m);
                m
            }),
        ]
    }

    fn demo_cases() -> Vec<Vec<Vec<i32>>> {
        vec![
            vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]],
            vec![vec![0, 1, 2, 0], vec![3, 4, 5, 2], vec![1, 3, 1, 5]],
            vec![vec![1, 2], vec![3, 4]],
            vec![vec![1], vec![0]],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic() {
        let mut m = vec![vec![0, 1, 2, 0], vec![3, 4, 5, 2], vec![1, 3, 1, 5]];
        first_row_col_markers(&mut m);
        assert_eq!(
            m,
            vec![vec![0, 0, 0, 0], vec![0, 4, 5, 0], vec![0, 3, 1, 0]]
        );
    }

    #[test]
    fn zero_only_in_first_column() {
        let original = vec![vec![1, 2], vec![0, 4], vec![5, 6]];
        let mut a = original.clone();
        let mut b = original;
        marker_sets(&mut a);
        first_row_col_markers(&mut b);
        assert_eq!(a, vec![vec![0, 2], vec![0, 0], vec![0, 6]]);
        assert_eq!(a, b);
    }
}
