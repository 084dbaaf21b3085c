use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The offset, or the span starting at it, falls outside the document.
    #[error("invalid offset {offset} (size {size})")]
    InvalidOffset { offset: usize, size: usize },

    /// A read ran off the end of the document after copying `copied` runes.
    #[error("end of input after {copied} runes")]
    EndOfInput { copied: usize },
}

impl BufferError {
    /// Runes transferred by the failed call. Only a short read moves any.
    pub fn copied(&self) -> usize {
        match self {
            BufferError::InvalidOffset { .. } => 0,
            BufferError::EndOfInput { copied } => *copied,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, BufferError::EndOfInput { .. })
    }
}
