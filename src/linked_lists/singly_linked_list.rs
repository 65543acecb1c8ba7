use crate::error::EmptyError;

use std::{
    fmt::{self, Debug, Display, Formatter},
    iter::Extend,
    ptr::NonNull,
};

/// A singly linked list with O(1) append, backed by an owned chain of nodes.
///
/// Each node owns the next one, so the whole chain is rooted at `head`.
/// `tail` is a non-owning cursor into that chain kept only so `append` and
/// `last` stay O(1); it never outlives the node it points at.
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
}

pub struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element after the current tail.
    pub fn append(&mut self, value: T) {
        let mut node = Box::new(Node { value, next: None });
        let ptr = NonNull::from(node.as_mut());
        match self.tail {
            // this is fine since tail always points into the chain owned by head
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(ptr);
        self.len += 1;
    }

    /// Removes the head node and returns its value.
    pub fn pop_first(&mut self) -> Result<T, EmptyError> {
        let node = self.head.take().ok_or(EmptyError)?;
        let Node { value, next } = *node;
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(value)
    }

    pub fn first(&self) -> Result<&T, EmptyError> {
        self.head.as_deref().map(|n| &n.value).ok_or(EmptyError)
    }

    pub fn first_mut(&mut self) -> Result<&mut T, EmptyError> {
        self.head.as_deref_mut().map(|n| &mut n.value).ok_or(EmptyError)
    }

    pub fn last(&self) -> Result<&T, EmptyError> {
        match self.tail {
            Some(tail) => Ok(unsafe { &tail.as_ref().value }),
            None => Err(EmptyError),
        }
    }

    pub fn last_mut(&mut self) -> Result<&mut T, EmptyError> {
        match self.tail {
            Some(mut tail) => Ok(unsafe { &mut tail.as_mut().value }),
            None => Err(EmptyError),
        }
    }

    pub fn contains<Q: PartialEq<T>>(&self, item: &Q) -> bool {
        self.iter().any(|s| item.eq(s))
    }

    /// Linear scan; true iff any element satisfies `f`.
    pub fn find<F: Fn(&T) -> bool>(&self, f: F) -> bool {
        self.iter().any(|s| f(s))
    }

    pub fn for_each_value<F: FnMut(&T)>(&self, mut f: F) {
        for value in self.iter() {
            f(value);
        }
    }

    pub fn for_each_node<F: FnMut(&Node<T>)>(&self, mut f: F) {
        for node in self.iter_nodes() {
            f(node);
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Releases every node without recursing through the chain.
    pub fn clear(&mut self) {
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { node: &self.head }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            node: Some(&mut self.head),
        }
    }

    pub fn iter_nodes(&self) -> NodeIter<'_, T> {
        NodeIter {
            node: self.head.as_deref(),
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.len;
        write!(f, "SinglyLinkedList {{ length: {len}, items: {{")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut lst = SinglyLinkedList::new();
        lst.extend(iter);
        lst
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter.into_iter() {
            self.append(i);
        }
    }
}

pub use iters::*;
mod iters {
    use super::*;

    impl<T> IntoIterator for SinglyLinkedList<T> {
        type Item = T;
        type IntoIter = IntoIter<T>;
        fn into_iter(mut self) -> Self::IntoIter {
            IntoIter {
                head: self.head.take(),
            }
        }
    }

    pub struct IntoIter<T> {
        pub(crate) head: Option<Box<Node<T>>>,
    }

    impl<T> Iterator for IntoIter<T> {
        type Item = T;
        fn next(&mut self) -> Option<Self::Item> {
            if let Some(s) = self.head.take() {
                self.head = s.next;
                Some(s.value)
            } else {
                None
            }
        }
    }

    impl<T> Drop for IntoIter<T> {
        fn drop(&mut self) {
            // unlink one node at a time so a long remainder cannot recurse
            while self.next().is_some() {}
        }
    }

    pub struct Iter<'a, T> {
        pub(crate) node: &'a Option<Box<Node<T>>>,
    }

    impl<'a, T> Iterator for Iter<'a, T> {
        type Item = &'a T;
        fn next(&mut self) -> Option<Self::Item> {
            if let Some(s) = self.node {
                self.node = &s.next;
                Some(&s.value)
            } else {
                None
            }
        }
    }

    pub struct IterMut<'a, T> {
        pub(crate) node: Option<&'a mut Option<Box<Node<T>>>>,
    }

    impl<'a, T> Iterator for IterMut<'a, T> {
        type Item = &'a mut T;
        fn next(&mut self) -> Option<Self::Item> {
            match self.node.take() {
                Some(Some(s)) => {
                    let Node {
                        ref mut value,
                        ref mut next,
                    } = **s;
                    self.node = Some(next);
                    Some(value)
                }
                Some(None) => None,
                None => None,
            }
        }
    }

    pub struct NodeIter<'a, T> {
        pub(crate) node: Option<&'a Node<T>>,
    }

    impl<'a, T> Iterator for NodeIter<'a, T> {
        type Item = &'a Node<T>;
        fn next(&mut self) -> Option<Self::Item> {
            let node = self.node.take()?;
            self.node = node.next();
            Some(node)
        }
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: Display> Display for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
