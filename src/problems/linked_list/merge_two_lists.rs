//! Merge Two Sorted Lists (LeetCode 21).
//!
//! Nodes are spliced, not copied. On equal values the node from the first
//! list goes first.

use super::list::{from_slice, List};
use crate::traits::{Problem, Variant};

/// Splice the smaller head onto a tail cursor until one list runs out.
pub fn iterative(mut a: List, mut b: List) -> List {
    let mut head: List = None;
    let mut tail = &mut head;
    loop {
        let take_a = match (a.as_deref(), b.as_deref()) {
            (Some(x), Some(y)) => x.val <= y.val,
            _ => break,
        };
        let src = if take_a { &mut a } else { &mut b };
        if let Some(mut node) = src.take() {
            *src = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }
    *tail = a.or(b);
    head
}

pub fn recursive(a: List, b: List) -> List {
    match (a, b) {
        (None, rest) | (rest, None) => rest,
        (Some(mut x), Some(mut y)) => {
            if x.val <= y.val {
                let next = x.next.take();
                x.next = recursive(next, Some(y));
                Some(x)
            } else {
                let next = y.next.take();
                y.next = recursive(Some(x), next);
                Some(y)
            }
        }
    }
}

pub struct MergeTwoLists;

type Input = (List, List);

impl Problem for MergeTwoLists {
    type Input = Input;
    type Output = List;
    const ID: u32 = 21;
    const SLUG: &'static str = "merge-two-sorted-lists";
    const TITLE: &'static str = "Merge Two Sorted Lists";

    fn variants() -> Vec<Variant<Input, List>> {
        vec![
            Variant::new("iterative", |(a, b): &Input| iterative(a.clone(), b.clone())),
            Variant::new("recursive", |(a, b): &Input| recursive(a.clone(), b.clone())),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        vec![
            (from_slice(&[1, 2, 4]), from_slice(&[1, 3, 4])),
            (None, None),
            (None, from_slice(&[0])),
            (from_slice(&[-3, 5, 9]), from_slice(&[-7, -1, 10, 12])),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::linked_list::list::to_vec;

    #[test]
    fn classic_example() {
        let merged = iterative(from_slice(&[1, 2, 4]), from_slice(&[1, 3, 4]));
        assert_eq!(to_vec(merged.as_deref()), vec![1, 1, 2, 3, 4, 4]);
        let merged = recursive(from_slice(&[1, 2, 4]), from_slice(&[1, 3, 4]));
        assert_eq!(to_vec(merged.as_deref()), vec![1, 1, 2, 3, 4, 4]);
    }

    #[test]
    fn one_side_empty() {
        assert_eq!(iterative(None, from_slice(&[0])), from_slice(&[0]));
        assert_eq!(recursive(from_slice(&[2, 3]), None), from_slice(&[2, 3]));
        assert!(iterative(None, None).is_none());
    }
}
