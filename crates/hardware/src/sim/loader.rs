//! Program Image Loader.
//!
//! This module reads E20 program images into memory. It performs:
//! 1. **Parsing:** Each line has the form `ram[<addr>] = 16'b<bits>;<anything>`.
//! 2. **Sequencing:** Addresses must start at 0 and increase by exactly one per line.
//! 3. **Bounds:** The image must fit in the 8K-word memory.
//!
//! Loading is all-or-nothing: any error leaves no partially loaded memory
//! behind, and nothing is executed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::constants::MEM_SIZE;
use crate::common::error::LoadError;
use crate::core::memory::Memory;

/// Text preceding the address.
const ADDR_PREFIX: &str = "ram[";
/// Text between the address and the binary literal.
const LITERAL_PREFIX: &str = "] = 16'b";
/// Terminator of the binary literal.
const LITERAL_END: char = ';';

/// Splits one image line into its address and instruction word.
///
/// Returns `None` if the line does not match the expected shape, if either
/// field is empty or has stray characters, or if the literal needs more
/// than 16 bits.
fn parse_line(line: &str) -> Option<(usize, u16)> {
    let rest = line.strip_prefix(ADDR_PREFIX)?;
    let (addr, rest) = rest.split_once(LITERAL_PREFIX)?;
    let (bits, _comment) = rest.split_once(LITERAL_END)?;

    if addr.is_empty() || !addr.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if bits.is_empty() || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }

    let addr = addr.parse::<usize>().ok()?;
    let word = u16::from_str_radix(bits, 2).ok()?;
    Some((addr, word))
}

/// Parses a complete program image held in memory.
///
/// # Returns
///
/// The instruction words in address order, starting at address 0.
///
/// # Errors
///
/// * [`LoadError::InvalidLine`] for a line that does not parse.
/// * [`LoadError::OutOfSequence`] for an address other than the next expected one.
/// * [`LoadError::TooLarge`] for an address beyond the end of memory.
pub fn parse_image(text: &str) -> Result<Vec<u16>, LoadError> {
    read_words(BufReader::new(text.as_bytes()))
}

/// Reads program words from any line-oriented source.
///
/// # Errors
///
/// As [`parse_image`], plus [`LoadError::Io`] if reading fails.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<u16>, LoadError> {
    let mut words = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let Some((addr, word)) = parse_line(&line) else {
            return Err(LoadError::InvalidLine {
                line_no: idx + 1,
                line,
            });
        };

        let expected = words.len();
        if addr != expected {
            return Err(LoadError::OutOfSequence {
                expected,
                found: addr,
            });
        }
        if addr >= MEM_SIZE {
            return Err(LoadError::TooLarge { address: addr });
        }

        words.push(word);
    }

    Ok(words)
}

/// Reads a program image from any line-oriented source into a fresh memory.
///
/// # Errors
///
/// See [`read_words`].
pub fn load_image<R: BufRead>(reader: R) -> Result<Memory, LoadError> {
    let words = read_words(reader)?;
    let mut mem = Memory::new();
    mem.load_image(&words)?;
    tracing::debug!(words = words.len(), "program image loaded");
    Ok(mem)
}

/// Reads a program image file into a fresh memory.
///
/// # Arguments
///
/// * `path` - Path to the program image.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be opened or read, otherwise see
/// [`read_words`].
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Memory, LoadError> {
    let file = File::open(path.as_ref())?;
    load_image(BufReader::new(file))
}
