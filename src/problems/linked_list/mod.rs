//! Singly linked list problems over an owned [`list::ListNode`].

pub mod list;
pub mod merge_two_lists;
pub mod reverse_list;
