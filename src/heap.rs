//! A binary min-heap over a pluggable "less-than" predicate which allows the caller to mutate
//! stored elements in place and then restore the heap order with [MinHeap::fix].
//!
//! There is no element-to-index map: locating an element is a linear scan
//! ([MinHeap::position]) and re-establishing order after a mutation is a full rebuild.
use crate::error::{Error, Result};
use core::fmt;
use itertools::Itertools;

pub struct MinHeap<T, F> {
    elements: Vec<T>,
    cmp: F,
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Builds a heap from an arbitrary initial sequence. `cmp(a, b)` must return [true] iff `a`
    /// has strictly higher priority than `b`.
    pub fn new(elements: Vec<T>, cmp: F) -> MinHeap<T, F> {
        let mut heap = MinHeap { elements, cmp };
        heap.fix();
        heap
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the element with the highest priority.
    pub fn pop(&mut self) -> Result<T> {
        let len = self.elements.len();
        if len == 0 {
            return Err(Error::EmptyHeap);
        }
        self.elements.swap(0, len - 1);
        let element = self.elements.pop().ok_or(Error::EmptyHeap)?;
        self.sift_down(0, self.elements.len());
        Ok(element)
    }

    /// Reads the element stored at `index` of the underlying array.
    pub fn peek_at(&self, index: usize) -> Result<&T> {
        let len = self.elements.len();
        self.elements
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Mutable access to the element stored at `index`. Changing its priority leaves the heap
    /// unordered until [fix](Self::fix) is called.
    pub fn peek_at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Index of the first stored element matching `predicate`, scanning the array front to back.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().position(predicate)
    }

    /// Re-establishes the heap invariant after stored elements were mutated in place by sifting
    /// down every index from the last element to the root.
    pub fn fix(&mut self) {
        let len = self.elements.len();
        for i in (0..len).rev() {
            self.sift_down(i, len);
        }
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if (self.cmp)(&self.elements[child], &self.elements[parent]) {
                self.elements.swap(child, parent);
                child = parent;
            } else {
                return;
            }
        }
    }

    /// Sifts `curr` down within the first `len` elements. The right child is only selected
    /// when the left one is not strictly preferred over it.
    fn sift_down(&mut self, mut curr: usize, len: usize) {
        let mut left = curr * 2 + 1;
        while left < len {
            let right = left + 1;
            let mut swap = left;
            if right < len && !(self.cmp)(&self.elements[left], &self.elements[right]) {
                swap = right;
            }
            if (self.cmp)(&self.elements[swap], &self.elements[curr]) {
                self.elements.swap(swap, curr);
                curr = swap;
                left = curr * 2 + 1;
            } else {
                return;
            }
        }
    }
}

impl<T: fmt::Display, F> fmt::Display for MinHeap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.elements.iter().join(" "))
    }
}
