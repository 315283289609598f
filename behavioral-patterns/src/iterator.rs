//! Iterator.
//!
//! A capacity-bounded list with an explicit external iterator protocol
//! (first, next, is_done, current_item) and a traverser that runs a
//! closure over each item until it asks to stop.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ListError {
    #[error("list is full (capacity {0})")]
    Full(usize),
    #[error("list is empty")]
    Empty,
}

/// A list that refuses to grow past the capacity it was created with.
pub struct BoundedList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedList<T> {
    /// `size` is a capacity, not a length; the new list starts empty.
    pub fn new(size: usize) -> Self {
        BoundedList {
            items: Vec::with_capacity(size),
            capacity: size,
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn push_back(&mut self, item: T) -> Result<(), ListError> {
        if self.items.len() == self.capacity {
            return Err(ListError::Full(self.capacity));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop_back(&mut self) -> Result<T, ListError> {
        self.items.pop().ok_or(ListError::Empty)
    }

    pub fn iterator(&self) -> ListIterator<'_, T> {
        ListIterator {
            list: self,
            current: 0,
        }
    }
}

/// External iterator. Borrows the list, so the list cannot be mutated
/// while a traversal is live.
pub struct ListIterator<'a, T> {
    list: &'a BoundedList<T>,
    current: usize,
}

impl<'a, T> ListIterator<'a, T> {
    pub fn begin(&mut self) {
        self.current = 0;
    }

    /// Jumps past the last item, so `is_done` holds immediately.
    pub fn end(&mut self) {
        self.current = self.list.count();
    }

    /// Stepping past the end is a no-op.
    pub fn next(&mut self) {
        if !self.is_done() {
            self.current += 1;
        }
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.list.count()
    }

    pub fn current_item(&self) -> Option<&'a T> {
        self.list.get(self.current)
    }
}

/// Internal traversal. The hook returns `false` to abort early.
pub struct Traverser;

impl Traverser {
    pub fn traverse<T>(list: &BoundedList<T>, mut hook: impl FnMut(&T) -> bool) -> usize {
        let mut visited = 0;
        let mut it = list.iterator();
        it.begin();
        while !it.is_done() {
            let item = match it.current_item() {
                Some(item) => item,
                None => break,
            };
            visited += 1;
            if !hook(item) {
                break;
            }
            it.next();
        }
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employees() -> BoundedList<String> {
        let mut list = BoundedList::new(4);
        for name in ["Alice", "Bob", "Carol"] {
            list.push_back(name.to_string()).unwrap();
        }
        list
    }

    #[test]
    fn capacity_is_enforced() {
        let mut list = BoundedList::new(2);
        list.push_back(1).unwrap();
        list.push_back(2).unwrap();
        assert_eq!(list.push_back(3).err(), Some(ListError::Full(2)));
        assert_eq!(list.count(), 2);
    }

    #[test]
    fn pop_from_empty_is_diagnosed() {
        let mut list: BoundedList<i32> = BoundedList::new(1);
        assert_eq!(list.pop_back().err(), Some(ListError::Empty));
    }

    #[test]
    fn iterator_walks_in_insertion_order() {
        let list = employees();
        let mut it = list.iterator();
        let mut seen = Vec::new();
        it.begin();
        while !it.is_done() {
            seen.push(it.current_item().unwrap().clone());
            it.next();
        }
        assert_eq!(seen, vec!["Alice", "Bob", "Carol"]);
        // stepping past the end stays done
        it.next();
        assert!(it.is_done());
        assert!(it.current_item().is_none());
    }

    #[test]
    fn end_jumps_past_the_last_item() {
        let list = employees();
        let mut it = list.iterator();
        it.end();
        assert!(it.is_done());
        assert!(it.current_item().is_none());
        // begin rewinds the same iterator
        it.begin();
        assert!(!it.is_done());
        assert_eq!(it.current_item().map(String::as_str), Some("Alice"));
    }

    #[test]
    fn independent_iterators_do_not_interfere() {
        let list = employees();
        let mut a = list.iterator();
        let mut b = list.iterator();
        a.next();
        a.next();
        assert_eq!(b.current_item().map(String::as_str), Some("Alice"));
        b.next();
        assert_eq!(a.current_item().map(String::as_str), Some("Carol"));
        assert_eq!(b.current_item().map(String::as_str), Some("Bob"));
    }

    #[test]
    fn traverser_aborts_when_hook_returns_false() {
        let list = employees();
        let mut seen = Vec::new();
        let visited = Traverser::traverse(&list, |name| {
            seen.push(name.clone());
            name != "Bob"
        });
        assert_eq!(visited, 2);
        assert_eq!(seen, vec!["Alice", "Bob"]);
    }
}
