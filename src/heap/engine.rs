// Binary heap maintenance over anything implementing HeapCapability.
// The root is a minimal element under `less`.
use tracing::{debug, trace};

use crate::heap::capability::HeapCapability;
use crate::heap::error::HeapError;

/// Establish the heap property over the current contents in O(n)
pub fn init<H: HeapCapability + ?Sized>(h: &mut H) {
    let n = h.len();
    trace!(len = n, "heapify");
    for i in (0..n / 2).rev() {
        sift_down(h, i, n);
    }
}

/// Push `item` onto the heap in O(log n)
pub fn push<H: HeapCapability + ?Sized>(h: &mut H, item: H::Item) {
    h.append(item);
    let last = h.len() - 1;
    sift_up(h, last);
}

/// Remove and return the minimal element in O(log n)
pub fn pop<H: HeapCapability + ?Sized>(h: &mut H) -> Result<H::Item, HeapError> {
    if h.is_empty() {
        debug!("pop on empty heap");
        return Err(HeapError::Empty);
    }
    let n = h.len() - 1;
    h.swap(0, n);
    sift_down(h, 0, n);
    h.remove_last().ok_or(HeapError::Empty)
}

/// Remove and return the element at `index` in O(log n)
pub fn remove<H: HeapCapability + ?Sized>(h: &mut H, index: usize) -> Result<H::Item, HeapError> {
    check_index(h, index)?;
    let n = h.len() - 1;
    if n != index {
        h.swap(index, n);
        // the element moved in from the end may belong above or below `index`
        if !sift_down(h, index, n) {
            trace!(index, "remove: sifting up");
            sift_up(h, index);
        }
    }
    h.remove_last().ok_or(HeapError::Empty)
}

/// Restore the heap property after the element at `index` was changed in place.
/// Cheaper than `remove` followed by `push`.
pub fn fix<H: HeapCapability + ?Sized>(h: &mut H, index: usize) -> Result<(), HeapError> {
    check_index(h, index)?;
    let n = h.len();
    if !sift_down(h, index, n) {
        trace!(index, "fix: sifting up");
        sift_up(h, index);
    }
    Ok(())
}

/// Whether no child is strictly less than its parent
pub fn is_heap<H: HeapCapability + ?Sized>(h: &H) -> bool {
    (1..h.len()).all(|child| !h.less(child, (child - 1) / 2))
}

fn check_index<H: HeapCapability + ?Sized>(h: &H, index: usize) -> Result<(), HeapError> {
    let len = h.len();
    if index >= len {
        debug!(index, len, "heap index out of range");
        Err(HeapError::IndexOutOfRange { index, len })
    } else {
        Ok(())
    }
}

fn sift_up<H: HeapCapability + ?Sized>(h: &mut H, mut j: usize) {
    while j > 0 {
        let parent = (j - 1) / 2;
        if !h.less(j, parent) {
            break;
        }
        h.swap(parent, j);
        j = parent;
    }
}

/// Move the element at `i0` down within `[0, n)`.
/// Returns true if it moved at all.
fn sift_down<H: HeapCapability + ?Sized>(h: &mut H, i0: usize, n: usize) -> bool {
    let mut i = i0;
    loop {
        // overflowing child indices are out of range too
        let left = match i.checked_mul(2).and_then(|x| x.checked_add(1)) {
            Some(left) if left < n => left,
            _ => break,
        };
        let mut child = left;
        let right = left + 1;
        if right < n && h.less(right, left) {
            child = right;
        }
        if !h.less(child, i) {
            break;
        }
        h.swap(i, child);
        i = child;
    }
    i > i0
}
