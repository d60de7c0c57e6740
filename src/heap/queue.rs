use crate::heap::engine;

/// Owned min-priority queue: `pop` returns the smallest element.
/// Wrap elements in `std::cmp::Reverse` for largest-first.
#[derive(Debug, Clone, Default)]
pub struct HeapPQ<T: PartialOrd> {
    data: Vec<T>,
}

impl<T: PartialOrd> HeapPQ<T> {
    pub fn new() -> Self {
        HeapPQ { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        HeapPQ {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn push(&mut self, value: T) {
        engine::push(&mut self.data, value)
    }

    pub fn pop(&mut self) -> Option<T> {
        engine::pop(&mut self.data).ok()
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The backing vector in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }
}

impl<T: PartialOrd> From<Vec<T>> for HeapPQ<T> {
    fn from(v: Vec<T>) -> Self {
        let mut heap = HeapPQ { data: v };
        engine::init(&mut heap.data);
        heap
    }
}
