//! Word Search (LeetCode 79).
//!
//! A word exists if it can be spelled by a path of horizontally or
//! vertically adjacent cells, each used at most once.

use crate::traits::{Problem, Variant};

pub type Board = Vec<Vec<char>>;

/// Up, down, left and right of `(r, c)`. Positions off the top or left edge
/// wrap to `usize::MAX` and fail any bounds check.
pub(super) fn neighbors(r: usize, c: usize) -> [(usize, usize); 4] {
    [
        (r.wrapping_sub(1), c),
        (r + 1, c),
        (r, c.wrapping_sub(1)),
        (r, c + 1),
    ]
}

fn cell(board: &[Vec<char>], r: usize, c: usize) -> Option<char> {
    board.get(r).and_then(|row| row.get(c)).copied()
}

fn starts(board: &[Vec<char>]) -> impl Iterator<Item = (usize, usize)> + '_ {
    board
        .iter()
        .enumerate()
        .flat_map(|(r, row)| (0..row.len()).map(move |c| (r, c)))
}

/// Mark visited cells by overwriting them with `'\0'` and restore on the
/// way back.
pub fn backtracking_in_place(board: &mut [Vec<char>], word: &str) -> bool {
    fn dfs(board: &mut [Vec<char>], r: usize, c: usize, word: &[char]) -> bool {
        let Some((&head, rest)) = word.split_first() else {
            return true;
        };
        if cell(board, r, c) != Some(head) {
            return false;
        }
        if rest.is_empty() {
            return true;
        }
        board[r][c] = '\0';
        let found = neighbors(r, c)
            .into_iter()
            .any(|(nr, nc)| dfs(board, nr, nc, rest));
        board[r][c] = head;
        found
    }
    let word: Vec<char> = word.chars().collect();
    if word.is_empty() {
        return true;
    }
    let cells: Vec<(usize, usize)> = starts(board).collect();
    cells.into_iter().any(|(r, c)| dfs(board, r, c, &word))
}

/// Leave the board untouched and track visits in a separate grid.
pub fn backtracking_visited(board: &[Vec<char>], word: &str) -> bool {
    fn dfs(
        board: &[Vec<char>],
        visited: &mut [Vec<bool>],
        (r, c): (usize, usize),
        word: &[char],
    ) -> bool {
        let Some((&head, rest)) = word.split_first() else {
            return true;
        };
        if cell(board, r, c) != Some(head) || visited[r][c] {
            return false;
        }
        if rest.is_empty() {
            return true;
        }
        visited[r][c] = true;
        let found = neighbors(r, c)
            .into_iter()
            .any(|next| dfs(board, visited, next, rest));
        visited[r][c] = false;
        found
    }
    let word: Vec<char> = word.chars().collect();
    if word.is_empty() {
        return true;
    }
    let mut visited: Vec<Vec<bool>> = board.iter().map(|row| vec![false; row.len()]).collect();
    starts(board).any(|start| dfs(board, &mut visited, start, &word))
}

pub struct Exist;

type Input = (Board, String);

pub(super) fn sample_board() -> Board {
    ["ABCE", "SFCS", "ADEE"]
        .iter()
        .map(|row| row.chars().collect())
        .collect()
}

impl Problem for Exist {
    type Input = Input;
    type Output = bool;
    const ID: u32 = 79;
    const SLUG: &'static str = "word-search";
    const TITLE: &'static str = "Word Search";

    fn variants() -> Vec<Variant<Input, bool>> {
        vec![
            Variant::new("backtracking_in_place", |(board, word): &Input| {
                backtracking_in_place(&mut board.clone(), word)
            }),
            Variant::new("backtracking_visited", |(board, word): &Input| {
                backtracking_visited(board, word)
            }),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        ["ABCCED", "SEE", "ABCB", "ASADFBCCEESE", "Z"]
            .into_iter()
            .map(|w| (sample_board(), w.to_string()))
            .chain([(vec![vec!['a']], "a".to_string())])
            .collect()
    }
}
