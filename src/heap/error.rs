use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is empty")]
    Empty,
    #[error("index {index} out of range for heap of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_index() {
        let err = HeapError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for heap of length 3");
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
    }
}
