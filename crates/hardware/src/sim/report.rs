//! Final State Reporter.
//!
//! Renders the machine state after a run in the reference text format:
//!
//! ```text
//! Final state:
//! 	pc=    3
//! 	$0=    0
//! 	...
//! 	$7=    0
//! 2085 2103 0530 4003 0000 0000 0000 0000
//! ...
//! ```
//!
//! The PC and registers are right-justified decimals in five columns. Memory
//! is dumped as four lowercase hex digits per word, each followed by a space,
//! eight words per line, and the dump ends with one blank line.

use std::fmt;
use std::io;

use crate::common::constants::WORDS_PER_LINE;
use crate::common::reg::RegisterFile;
use crate::core::memory::Memory;

/// Writes the report into any `fmt::Write` sink.
///
/// # Arguments
///
/// * `out` - Destination.
/// * `pc` - Final program counter.
/// * `regs` - Final register file.
/// * `mem` - Final memory.
/// * `words` - Number of memory words to dump from address 0. Clamped to
///   the memory size.
///
/// # Errors
///
/// Propagates errors from the sink.
pub fn write_state<W: fmt::Write>(
    out: &mut W,
    pc: u16,
    regs: &RegisterFile,
    mem: &Memory,
    words: usize,
) -> fmt::Result {
    writeln!(out, "Final state:")?;
    writeln!(out, "\tpc={pc:>5}")?;
    for (idx, val) in regs.values().iter().enumerate() {
        writeln!(out, "\t${idx}={val:>5}")?;
    }

    let shown = &mem.as_slice()[..words.min(mem.len())];
    for (idx, word) in shown.iter().enumerate() {
        write!(out, "{word:04x} ")?;
        if (idx + 1) % WORDS_PER_LINE == 0 {
            writeln!(out)?;
        }
    }
    writeln!(out)
}

/// Renders the report into a `String`.
pub fn format_state(pc: u16, regs: &RegisterFile, mem: &Memory, words: usize) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_state(&mut out, pc, regs, mem, words);
    out
}

/// Writes the report to an `io::Write` sink such as stdout.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn print_state<W: io::Write>(
    out: &mut W,
    pc: u16,
    regs: &RegisterFile,
    mem: &Memory,
    words: usize,
) -> io::Result<()> {
    out.write_all(format_state(pc, regs, mem, words).as_bytes())?;
    out.flush()
}
