//! Error definitions.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Load Errors:** Malformed program images, sequencing violations, and capacity overruns.
//! 2. **Simulation Errors:** Decode failures raised by the execution engine.
//! 3. **Configuration Errors:** Invalid or unparsable configuration documents.
//!
//! All errors are terminal: the CLI reports them on stderr and exits with code 1.

use std::io;

use thiserror::Error;

/// Failure while turning a program image into a memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A line does not match `ram[<addr>] = 16'b<bits>;`.
    ///
    /// `line_no` is 1-based.
    #[error("Invalid line format: {line}")]
    InvalidLine {
        /// 1-based line number within the image.
        line_no: usize,
        /// The offending line, verbatim.
        line: String,
    },

    /// An address did not follow the previous one by exactly one.
    #[error("Memory addresses out of sequence: {found}")]
    OutOfSequence {
        /// Address the loader was waiting for.
        expected: usize,
        /// Address actually present in the image.
        found: usize,
    },

    /// The image addresses a word beyond the end of memory.
    #[error("Program too large for memory: {address}")]
    TooLarge {
        /// First address that does not fit.
        address: usize,
    },

    /// The image could not be read.
    #[error("Cannot read program image: {0}")]
    Io(#[from] io::Error),
}

/// Fatal condition raised while executing a program.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// The opcode field held a value outside the eight defined classes.
    ///
    /// The field is three bits wide, so this cannot be produced by a real
    /// instruction word.
    #[error("Unknown opcode: {opcode} at pc={pc}")]
    UnknownOpcode {
        /// Raw opcode field.
        opcode: u16,
        /// Address of the offending instruction.
        pc: u16,
    },
}

/// Failure while parsing or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document is malformed or has fields of the wrong type.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The report window is larger than memory.
    #[error("display window of {requested} words exceeds memory size {limit}")]
    DisplayWindow {
        /// Requested window.
        requested: usize,
        /// Memory size in words.
        limit: usize,
    },
}
