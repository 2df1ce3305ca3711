//! Singly linked list with owned `next` links.
//!
//! Clone, comparison and drop walk the list iteratively, so long lists do
//! not recurse once per node.

use std::fmt;

pub struct ListNode {
    pub val: i32,
    pub next: List,
}

/// A possibly empty list.
pub type List = Option<Box<ListNode>>;

impl ListNode {
    pub fn new(val: i32) -> Self {
        Self { val, next: None }
    }

    /// Values from this node to the end.
    pub fn iter(&self) -> Iter<'_> {
        Iter { cur: Some(self) }
    }
}

pub struct Iter<'a> {
    cur: Option<&'a ListNode>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.cur?;
        self.cur = node.next.as_deref();
        Some(node.val)
    }
}

/// Build a list holding `values` in order.
pub fn from_slice(values: &[i32]) -> List {
    values.iter().rev().fold(None, |next, &val| {
        Some(Box::new(ListNode { val, next }))
    })
}

pub fn to_vec(head: Option<&ListNode>) -> Vec<i32> {
    head.map(|n| n.iter().collect()).unwrap_or_default()
}

impl Clone for ListNode {
    fn clone(&self) -> Self {
        let values: Vec<i32> = self.iter().collect();
        Self {
            val: self.val,
            next: from_slice(&values[1..]),
        }
    }
}

impl PartialEq for ListNode {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for ListNode {}

impl fmt::Debug for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for ListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
