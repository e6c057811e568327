//! Persistent append-only list shared between builder generations

use std::sync::Arc;

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<Arc<Node<T>>>,
}

/// Append-only list where every clone and every extension shares the
/// existing entries instead of copying them.
#[derive(Debug)]
pub(crate) struct EntryList<T> {
    last: Option<Arc<Node<T>>>,
    len: usize,
}

impl<T> EntryList<T> {
    pub const fn new() -> Self {
        Self { last: None, len: 0 }
    }

    /// Returns a new list with `value` appended; `self` is left untouched
    #[must_use]
    pub fn push(&self, value: T) -> Self {
        Self {
            last: Some(Arc::new(Node {
                value,
                prev: self.last.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        let mut newest_first = Vec::with_capacity(self.len);
        let mut cursor = self.last.as_deref();
        while let Some(node) = cursor {
            newest_first.push(&node.value);
            cursor = node.prev.as_deref();
        }
        newest_first.into_iter().rev()
    }
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EntryList<T> {
    fn clone(&self) -> Self {
        Self {
            last: self.last.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for EntryList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for EntryList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |list, value| list.push(value))
    }
}

// Unlink iteratively so a long chain never recurses once per node on drop.
impl<T> Drop for EntryList<T> {
    fn drop(&mut self) {
        let mut cursor = self.last.take();
        while let Some(node) = cursor {
            cursor = Arc::into_inner(node).and_then(|mut node| node.prev.take());
        }
    }
}
