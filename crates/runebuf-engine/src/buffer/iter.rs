use std::iter::FusedIterator;
use std::slice;

use super::block::Block;

/// Streams the document's code points in order, crossing block boundaries.
#[derive(Debug, Clone)]
pub struct RuneIter<'a> {
    blocks: slice::Iter<'a, Block>,
    current: slice::Iter<'a, char>,
    remaining: usize,
}

impl<'a> RuneIter<'a> {
    pub(super) fn new(blocks: &'a [Block], size: usize) -> Self {
        Self {
            blocks: blocks.iter(),
            current: [].iter(),
            remaining: size,
        }
    }
}

impl Iterator for RuneIter<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(&rune) = self.current.next() {
                self.remaining -= 1;
                return Some(rune);
            }
            self.current = self.blocks.next()?.as_slice().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RuneIter<'_> {}

impl FusedIterator for RuneIter<'_> {}
