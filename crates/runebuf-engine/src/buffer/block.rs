//! Fixed-capacity rune storage and the pool that recycles it.

/// A fixed-capacity run of code points.
///
/// Only `runes[..len]` holds document text; the tail is scratch space left
/// over from earlier contents.
#[derive(Debug)]
pub struct Block {
    runes: Box<[char]>,
    len: usize,
}

impl Block {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            runes: vec!['\0'; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.runes.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// The valid contents of the block.
    pub fn as_slice(&self) -> &[char] {
        &self.runes[..self.len]
    }

    /// Appends `runes` after the current contents.
    ///
    /// # Panics
    ///
    /// Panics if the runes do not fit in the remaining capacity.
    pub fn extend_from_slice(&mut self, runes: &[char]) {
        let end = self.len + runes.len();
        assert!(
            end <= self.capacity(),
            "block overflow: {end} runes into capacity {}",
            self.capacity()
        );
        self.runes[self.len..end].copy_from_slice(runes);
        self.len = end;
    }

    /// Shortens the block to `len` runes. Has no effect if `len` is not shorter.
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    /// Removes `range` from the block, shifting the tail left to close the gap.
    pub fn remove_range(&mut self, range: std::ops::Range<usize>) {
        debug_assert!(range.start <= range.end && range.end <= self.len);
        self.runes.copy_within(range.end..self.len, range.start);
        self.len -= range.len();
    }

    fn clear(&mut self) {
        self.len = 0;
    }
}

/// Free list of blocks that share one capacity.
///
/// Blocks come back here when they empty out and are handed out again before
/// any new storage is allocated. Storage is only returned to the allocator when
/// the pool itself is dropped.
#[derive(Debug)]
pub struct BlockPool {
    block_size: usize,
    free: Vec<Block>,
    allocated: usize,
}

impl BlockPool {
    pub fn new(block_size: usize) -> Self {
        Self {
            block_size,
            free: Vec::new(),
            allocated: 0,
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of blocks waiting for reuse.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Number of blocks this pool has ever created.
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Hands out an empty block, preferring a recycled one.
    pub fn acquire(&mut self) -> Block {
        if let Some(block) = self.free.pop() {
            log::trace!("reusing block ({} left in pool)", self.free.len());
            return block;
        }
        self.allocated += 1;
        log::trace!(
            "allocating block #{} of {} runes",
            self.allocated,
            self.block_size
        );
        Block::with_capacity(self.block_size)
    }

    /// Takes a block back for reuse, discarding its contents.
    pub fn release(&mut self, mut block: Block) {
        debug_assert_eq!(block.capacity(), self.block_size);
        block.clear();
        self.free.push(block);
        log::trace!("released block ({} in pool)", self.free.len());
    }
}
