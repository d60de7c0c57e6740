/// The operations a backing sequence has to provide for the heap engine to work on it.
/// Indices range over `[0, len())`.
pub trait HeapCapability {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strict ordering between the elements at `i` and `j`.
    /// Must be a strict weak ordering for the heap property to hold
    fn less(&self, i: usize, j: usize) -> bool;

    fn swap(&mut self, i: usize, j: usize);

    /// Place `item` at the new highest index
    fn append(&mut self, item: Self::Item);

    /// Remove and return the element at the highest index, or None if there is none
    fn remove_last(&mut self) -> Option<Self::Item>;
}

// Plain vectors are heaps under the natural ordering of their elements.
impl<T: PartialOrd> HeapCapability for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }

    fn append(&mut self, item: T) {
        Vec::push(self, item)
    }

    fn remove_last(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}

/// A vector ordered by a caller-supplied `less` instead of the elements' own ordering
pub struct OrderedBy<T, F: Fn(&T, &T) -> bool> {
    items: Vec<T>,
    less: F,
}

impl<T, F: Fn(&T, &T) -> bool> OrderedBy<T, F> {
    /// Wraps `items` as-is; call `engine::init` before using it as a heap
    pub fn new(items: Vec<T>, less: F) -> Self {
        OrderedBy { items, less }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Mutable access to a single element. Follow a change with `engine::fix`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T, F: Fn(&T, &T) -> bool> HeapCapability for OrderedBy<T, F> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.less)(&self.items[i], &self.items[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j)
    }

    fn append(&mut self, item: T) {
        self.items.push(item)
    }

    fn remove_last(&mut self) -> Option<T> {
        self.items.pop()
    }
}
