/*!
 * # Rune Buffer
 *
 * An editable sequence of Unicode code points stored as an ordered list of
 * fixed-capacity blocks. Concatenating the valid contents of the blocks, in
 * order, gives the document text.
 *
 * ## Structure
 *
 * - **`Runes`** owns the block sequence and a `BlockPool`. Every block in the
 *   sequence holds at least one rune; a block that empties out goes straight
 *   back to the pool.
 * - **`BlockPool`** recycles emptied blocks. New storage is only allocated
 *   when the pool has nothing to hand out, so a document that shrinks and
 *   grows again reuses the capacity it already paid for.
 *
 * ## Editing model
 *
 * Every operation first resolves a global rune offset to a block index and an
 * offset inside that block by walking the cumulative block lengths, then
 * touches at most the blocks covering the affected span.
 *
 * - Insertion splits the target block at the insertion point and splices in
 *   freshly filled blocks, one per `block_size` chunk of the new text.
 * - Deletion trims partially covered blocks in place and returns fully
 *   covered ones to the pool.
 * - Neither operation merges neighbouring blocks afterwards, so small
 *   fragments are left as they are.
 *
 * ## Usage
 *
 * ```rust
 * use runebuf_engine::Runes;
 *
 * let mut runes = Runes::new(8);
 * runes.insert_str("Hello, World!", 0).unwrap();
 * runes.delete(5, 7).unwrap();
 * runes.insert_str("Gophers", 7).unwrap();
 * assert_eq!(runes.to_string(), "Hello, Gophers!");
 *
 * let mut word = ['\0'; 7];
 * assert_eq!(runes.read(&mut word, 7), Ok(7));
 * assert_eq!(String::from_iter(word), "Gophers");
 * ```
 */

pub mod block;
pub mod error;
pub mod iter;

use std::fmt;
use std::ops::Index;

pub use block::{Block, BlockPool};
pub use error::BufferError;
pub use iter::RuneIter;

/// Block capacity used by `Runes::default()`.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Block accounting for a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Blocks currently holding document text.
    pub in_use: usize,
    /// Emptied blocks waiting in the pool.
    pub free: usize,
    /// Blocks ever allocated; always `in_use + free`.
    pub allocated: usize,
}

/// A rune offset resolved to a block and a position inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Location {
    index: usize,
    offset: usize,
}

/// Editable sequence of code points backed by pooled fixed-size blocks.
///
/// The buffer is a plain single-owner value with no internal locking; share it
/// across threads only behind a lock of your own.
#[derive(Debug)]
pub struct Runes {
    blocks: Vec<Block>,
    pool: BlockPool,
    size: usize,
}

impl Runes {
    /// Creates an empty buffer whose blocks each hold `block_size` runes.
    ///
    /// # Panics
    ///
    /// Panics if `block_size` is zero.
    pub fn new(block_size: usize) -> Self {
        assert!(block_size > 0, "block size must be at least 1");
        log::debug!("new rune buffer with block size {block_size}");
        Self {
            blocks: Vec::new(),
            pool: BlockPool::new(block_size),
            size: 0,
        }
    }

    pub fn block_size(&self) -> usize {
        self.pool.block_size()
    }

    /// Number of runes in the document.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Lengths of the in-use blocks, in document order.
    pub fn block_lens(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.blocks.iter().map(Block::len)
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            in_use: self.blocks.len(),
            free: self.pool.free_count(),
            allocated: self.pool.allocated(),
        }
    }

    pub fn iter(&self) -> RuneIter<'_> {
        RuneIter::new(&self.blocks, self.size)
    }

    /// Inserts `text` so that it starts at rune offset `at`.
    ///
    /// `at` may equal `size()` to append. Returns the number of runes inserted.
    pub fn insert(&mut self, text: &[char], at: usize) -> Result<usize, BufferError> {
        if at > self.size {
            return Err(BufferError::InvalidOffset {
                offset: at,
                size: self.size,
            });
        }
        if text.is_empty() {
            return Ok(0);
        }

        let Location { index, offset } = self.locate(at);
        let position = if offset == 0 {
            index
        } else if offset == self.blocks[index].len() {
            index + 1
        } else {
            self.split(index, offset);
            index + 1
        };
        self.splice_chunks(position, text);
        Ok(text.len())
    }

    pub fn insert_str(&mut self, text: &str, at: usize) -> Result<usize, BufferError> {
        let text: Vec<char> = text.chars().collect();
        self.insert(&text, at)
    }

    /// Removes `count` runes starting at offset `at`.
    ///
    /// The whole span `[at, at + count)` must lie inside the document. Returns
    /// the number of runes removed.
    pub fn delete(&mut self, count: usize, at: usize) -> Result<usize, BufferError> {
        if count > self.size || at > self.size - count {
            return Err(BufferError::InvalidOffset {
                offset: at,
                size: self.size,
            });
        }
        if count == 0 {
            return Ok(0);
        }

        let Location {
            mut index,
            mut offset,
        } = self.locate(at);
        let mut remaining = count;
        while remaining > 0 {
            let block = &mut self.blocks[index];
            let end = block.len().min(offset + remaining);
            let removed = end - offset;
            if removed == block.len() {
                let emptied = self.blocks.remove(index);
                self.pool.release(emptied);
            } else {
                block.remove_range(offset..end);
                index += 1;
            }
            remaining -= removed;
            offset = 0;
        }
        self.size -= count;
        Ok(count)
    }

    /// Copies runes starting at offset `at` into `dest`.
    ///
    /// Returns `dest.len()` when the document had enough runes. When it runs
    /// out first, the runes that were available are still copied and
    /// `BufferError::EndOfInput` reports how many. An empty `dest` always
    /// succeeds, at any offset.
    pub fn read(&self, dest: &mut [char], at: usize) -> Result<usize, BufferError> {
        if dest.is_empty() {
            return Ok(0);
        }
        if at >= self.size {
            return Err(BufferError::EndOfInput { copied: 0 });
        }

        let Location {
            mut index,
            mut offset,
        } = self.locate(at);
        let mut copied = 0;
        while copied < dest.len() && index < self.blocks.len() {
            let src = &self.blocks[index].as_slice()[offset..];
            let n = src.len().min(dest.len() - copied);
            dest[copied..copied + n].copy_from_slice(&src[..n]);
            copied += n;
            index += 1;
            offset = 0;
        }

        if copied < dest.len() {
            Err(BufferError::EndOfInput { copied })
        } else {
            Ok(copied)
        }
    }

    /// Returns the rune at offset `index`.
    ///
    /// Unlike `runes[index]`, an out-of-range index is reported rather than
    /// panicking.
    pub fn rune(&self, index: usize) -> Result<char, BufferError> {
        if index >= self.size {
            return Err(BufferError::InvalidOffset {
                offset: index,
                size: self.size,
            });
        }
        let location = self.locate(index);
        Ok(self.blocks[location.index].as_slice()[location.offset])
    }

    /// Releases every block, in use or pooled.
    pub fn close(self) {
        let stats = self.stats();
        log::debug!(
            "closing rune buffer: {} runes, {} blocks in use, {} pooled",
            self.size,
            stats.in_use,
            stats.free
        );
    }

    /// Resolves `at` (at most `size`) to a block and an offset inside it.
    ///
    /// An offset on a block boundary lands at the start of the later block.
    /// `size` itself lands at the end of the last block, or at `(0, 0)` when
    /// there are no blocks.
    fn locate(&self, at: usize) -> Location {
        debug_assert!(at <= self.size);
        let mut start = 0;
        for (index, block) in self.blocks.iter().enumerate() {
            let end = start + block.len();
            if at < end {
                return Location {
                    index,
                    offset: at - start,
                };
            }
            start = end;
        }
        match self.blocks.last() {
            Some(last) => Location {
                index: self.blocks.len() - 1,
                offset: last.len(),
            },
            None => Location {
                index: 0,
                offset: 0,
            },
        }
    }

    /// Moves the runes after `offset` in block `index` into a new block
    /// placed right after it.
    fn split(&mut self, index: usize, offset: usize) {
        let mut suffix = self.pool.acquire();
        let block = &mut self.blocks[index];
        suffix.extend_from_slice(&block.as_slice()[offset..]);
        block.truncate(offset);
        log::trace!(
            "split block {index} at {offset} into {} + {}",
            block.len(),
            suffix.len()
        );
        self.blocks.insert(index + 1, suffix);
    }

    /// Fills blocks with `text`, one per `block_size` chunk, and inserts them
    /// at `position` in the sequence.
    fn splice_chunks(&mut self, position: usize, text: &[char]) {
        let pool = &mut self.pool;
        let chunks: Vec<Block> = text
            .chunks(pool.block_size())
            .map(|chunk| {
                let mut block = pool.acquire();
                block.extend_from_slice(chunk);
                block
            })
            .collect();
        self.blocks.splice(position..position, chunks);
        self.size += text.len();
    }
}

impl Default for Runes {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_SIZE)
    }
}

impl From<&str> for Runes {
    fn from(text: &str) -> Self {
        let mut runes = Runes::default();
        let text: Vec<char> = text.chars().collect();
        runes.splice_chunks(0, &text);
        runes
    }
}

impl Index<usize> for Runes {
    type Output = char;

    /// # Panics
    ///
    /// Panics if `index` is not less than `size()`.
    fn index(&self, index: usize) -> &char {
        assert!(
            index < self.size,
            "rune index {index} out of range for buffer of size {}",
            self.size
        );
        let location = self.locate(index);
        &self.blocks[location.index].as_slice()[location.offset]
    }
}

impl fmt::Display for Runes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.iter().try_for_each(|rune| f.write_char(rune))
    }
}

impl<'a> IntoIterator for &'a Runes {
    type Item = char;
    type IntoIter = RuneIter<'a>;

    fn into_iter(self) -> RuneIter<'a> {
        self.iter()
    }
}
