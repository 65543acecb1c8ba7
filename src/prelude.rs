pub use crate::error::EmptyError;
pub use crate::linked_lists::{IntoIter, Iter, IterMut, Node, NodeIter, SinglyLinkedList};
