//! Reverse Linked List (LeetCode 206).

use super::list::{from_slice, List};
use crate::traits::{Problem, Variant};

/// Pop from the input, push onto the result.
pub fn iterative(head: List) -> List {
    let mut prev: List = None;
    let mut cur = head;
    while let Some(mut node) = cur {
        cur = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}

/// The same relinking, written as recursion with an accumulator.
pub fn recursive(head: List) -> List {
    fn relink(cur: List, reversed: List) -> List {
        match cur {
            None => reversed,
            Some(mut node) => {
                let rest = node.next.take();
                node.next = reversed;
                relink(rest, Some(node))
            }
        }
    }
    relink(head, None)
}

pub struct ReverseList;

impl Problem for ReverseList {
    type Input = List;
    type Output = List;
    const ID: u32 = 206;
    const SLUG: &'static str = "reverse-linked-list";
    const TITLE: &'static str = "Reverse Linked List";

    fn variants() -> Vec<Variant<List, List>> {
        vec![
            Variant::new("iterative", |l: &List| iterative(l.clone())),
            Variant::new("recursive", |l: &List| recursive(l.clone())),
        ]
    }

    fn demo_cases() -> Vec<List> {
        vec![
            from_slice(&[1, 2, 3, 4, 5]),
            from_slice(&[1, 2]),
            from_slice(&[7]),
            None,
        ]
    }
}
