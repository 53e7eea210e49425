//! Main Memory.
//!
//! This module implements the E20's word-addressed main memory. It provides:
//! 1. **Storage:** 8192 16-bit words, zero at reset.
//! 2. **Wraparound:** Every address is reduced modulo the memory size before use.
//! 3. **Loading:** Bulk placement of a program image starting at address 0.

use std::ops::{Index, IndexMut};

use crate::common::constants::{ADDR_MASK, MEM_SIZE};
use crate::common::error::LoadError;

/// Word-addressed main memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    words: Box<[u16]>,
}

impl Memory {
    /// Creates a zero-filled memory of [`MEM_SIZE`] words.
    pub fn new() -> Self {
        Self {
            words: vec![0; MEM_SIZE].into_boxed_slice(),
        }
    }

    /// Reduces an address to the 13-bit address space.
    #[inline]
    pub const fn wrap(addr: u16) -> usize {
        (addr & ADDR_MASK) as usize
    }

    /// Reads the word at `addr`, wrapping modulo the memory size.
    #[inline]
    pub fn read(&self, addr: u16) -> u16 {
        self.words[Self::wrap(addr)]
    }

    /// Writes the word at `addr`, wrapping modulo the memory size.
    #[inline]
    pub fn write(&mut self, addr: u16, val: u16) {
        self.words[Self::wrap(addr)] = val;
    }

    /// Copies `image` into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image holds more than
    /// [`MEM_SIZE`] words. Memory is left untouched in that case.
    pub fn load_image(&mut self, image: &[u16]) -> Result<(), LoadError> {
        if image.len() > MEM_SIZE {
            return Err(LoadError::TooLarge { address: MEM_SIZE });
        }
        self.words[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Returns the whole memory as a slice.
    pub fn as_slice(&self) -> &[u16] {
        &self.words
    }

    /// Returns the number of words in memory.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; memory has a fixed non-zero size.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        f.debug_struct("Memory")
            .field("size", &self.words.len())
            .field("used", &used)
            .finish()
    }
}

impl Index<usize> for Memory {
    type Output = u16;

    fn index(&self, addr: usize) -> &u16 {
        &self.words[addr % MEM_SIZE]
    }
}

impl IndexMut<usize> for Memory {
    fn index_mut(&mut self, addr: usize) -> &mut u16 {
        &mut self.words[addr % MEM_SIZE]
    }
}
