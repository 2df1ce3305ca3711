//! Spiral Matrix (LeetCode 54).
//!
//! Clockwise spiral starting at the top-left corner. The variants assume a
//! rectangular matrix; [`spiral_order`] checks it first.

use crate::error::{Error, Result};
use crate::traits::{Problem, Variant};

/// Peel the outer ring, then shrink the four bounds.
pub fn layer_by_layer(matrix: &[Vec<i32>]) -> Vec<i32> {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);
    let mut out = Vec::with_capacity(rows * cols);
    if rows == 0 || cols == 0 {
        return out;
    }
    // inclusive bounds, as signed so that they may cross
    let (mut top, mut bottom) = (0isize, rows as isize - 1);
    let (mut left, mut right) = (0isize, cols as isize - 1);
    let at = |r: isize, c: isize| matrix[r as usize][c as usize];

    while top <= bottom && left <= right {
        for c in left..=right {
            out.push(at(top, c));
        }
        for r in top + 1..=bottom {
            out.push(at(r, right));
        }
        if top < bottom && left < right {
            for c in (left..right).rev() {
                out.push(at(bottom, c));
            }
            for r in (top + 1..bottom).rev() {
                out.push(at(r, left));
            }
        }
        top += 1;
        bottom -= 1;
        left += 1;
        right -= 1;
    }
    out
}

/// Walk right/down/left/up, turning when the next cell is out of bounds
/// or already visited.
pub fn direction_simulation(matrix: &[Vec<i32>]) -> Vec<i32> {
    const DIRS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);
    let total = rows * cols;
    let mut out = Vec::with_capacity(total);
    let mut visited = vec![vec![false; cols]; rows];
    let (mut r, mut c, mut d) = (0usize, 0usize, 0usize);

    for _ in 0..total {
        out.push(matrix[r][c]);
        visited[r][c] = true;
        let step = |d: usize| -> Option<(usize, usize)> {
            let nr = r.checked_add_signed(DIRS[d].0)?;
            let nc = c.checked_add_signed(DIRS[d].1)?;
            (nr < rows && nc < cols && !visited[nr][nc]).then_some((nr, nc))
        };
        let next = step(d).or_else(|| {
            d = (d + 1) % 4;
            step(d)
        });
        match next {
            Some((nr, nc)) => {
                r = nr;
                c = nc;
            }
            None => break,
        }
    }
    out
}

/// Reject ragged input, then run [`layer_by_layer`].
pub fn spiral_order(matrix: &[Vec<i32>]) -> Result<Vec<i32>> {
    if let Some(first) = matrix.first() {
        if let Some((i, row)) = matrix
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != first.len())
        {
            return Err(Error::invalid(
                SpiralOrder::SLUG,
                format!("row {i} has {} columns, expected {}", row.len(), first.len()),
            ));
        }
    }
    Ok(layer_by_layer(matrix))
}

pub struct SpiralOrder;

impl Problem for SpiralOrder {
    type Input = Vec<Vec<i32>>;
    type Output = Vec<i32>;
    const ID: u32 = 54;
    const SLUG: &'static str = "spiral-matrix";
    const TITLE: &'static str = "Spiral Matrix";

    fn variants() -> Vec<Variant<Vec<Vec<i32>>, Vec<i32>>> {
        vec![
            Variant::new("layer_by_layer", |m: &Vec<Vec<i32>>| layer_by_layer(m)),
            Variant::new("direction_simulation", |m: &Vec<Vec<i32>>| {
                direction_simulation(m)
            }),
        ]
    }

    fn demo_cases() -> Vec<Vec<Vec<i32>>> {
        vec![
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]],
            vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]],
            vec![vec![1], vec![2], vec![3]],
            vec![vec![1, 2, 3]],
            vec![],
        ]
    }
}
