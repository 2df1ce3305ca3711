//! Rotate Image (LeetCode 48).
//!
//! Rotate an `n x n` matrix 90° clockwise in place.

use crate::traits::{Problem, Variant};

/// Transpose, then reverse every row.
pub fn transpose_then_reverse(matrix: &mut [Vec<i32>]) {
    let n = matrix.len();
    for i in 0..n {
        for j in i + 1..n {
            let tmp = matrix[i][j];
            matrix[i][j] = matrix[j][i];
            matrix[j][i] = tmp;
        }
    }
    for row in matrix.iter_mut() {
        row.reverse();
    }
}

/// Four-way cycle of cells, ring by ring.
pub fn rotate_layers(matrix: &mut [Vec<i32>]) {
    let n = matrix.len();
    for layer in 0..n / 2 {
        let last = n - 1 - layer;
        for i in layer..last {
            let offset = i - layer;
            let top = matrix[layer][i];
            matrix[layer][i] = matrix[last - offset][layer];
            matrix[last - offset][layer] = matrix[last][last - offset];
            matrix[last][last - offset] = matrix[i][last];
            matrix[i][last] = top;
        }
    }
}

pub struct RotateImage;

impl Problem for RotateImage {
    type Input = Vec<Vec<i32>>;
    type Output = Vec<Vec<i32>>;
    const ID: u32 = 48;
    const SLUG: &'static str = "rotate-image";
    const TITLE: &'static str = "Rotate Image";

    fn variants() -> Vec<Variant<Vec<Vec<i32>>, Vec<Vec<i32>>>> {
        vec![
            Variant::new("transpose_then_reverse", |m: &Vec<Vec<i32>>| {
                let mut m = m.clone();
                transpose_then_reverse(&mut m);
                m
            }),
            Variant::new("rotate_layers", |m: &Vec<Vec<i32>>| {
                let mut m = m.clone();
                rotate_layers(&mut m);
                m
            }),
        ]
    }

    fn demo_cases() -> Vec<Vec<Vec<i32>>> {
        vec![
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]],
            vec![
                vec![5, 1, 9, 11],
                vec![2, 4, 8, 10],
                vec![13, 3, 6, 7],
                vec![15, 14, 12, 16],
            ],
            vec![vec![1]],
            vec![],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_by_three() {
        let mut m = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        rotate_layers(&mut m);
        assert_eq!(m, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
    }

    #[test]
    fn four_rotations_are_identity() {
        let original: Vec<Vec<i32>> = (0..5).map(|r| (0..5).map(|c| r * 5 + c).collect()).collect();
        let mut a = original.clone();
        let mut b = original.clone();
        for _ in 0..4 {
            transpose_then_reverse(&mut a);
            rotate_layers(&mut b);
            assert_eq!(a, b);
        }
        assert_eq!(a, original);
    }
}
