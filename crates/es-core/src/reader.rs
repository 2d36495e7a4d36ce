//! Unit readers: one line or one fixed-size byte block at a time.
//!
//! Both readers share the [`UnitReader`] contract so the scan strategies
//! never branch on the unit mode. They are generic over in-memory cursors
//! and files alike; the source must be seekable because the global method
//! reads the whole input twice.

use std::fmt;
use std::io::{BufRead, Read, Seek, SeekFrom};

use crate::error::{Result, ScanError};

/// How a scored unit is named in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// The stripped line text (line mode).
    Text(String),
    /// The zero-based block index in read order (block mode).
    Block(u64),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(text) => f.write_str(text),
            Label::Block(index) => write!(f, "{}", index),
        }
    }
}

/// One atomic element to score: a line's characters or a block's bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit<S> {
    pub label: Label,
    pub symbols: Vec<S>,
}

impl<S> Unit<S> {
    /// Number of symbols in this unit.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true for zero-length units (skipped by the scan strategies).
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Sequential access to the units of one input source.
pub trait UnitReader {
    type Symbol: Ord + Copy;

    /// Read the next unit, or `None` at end of input.
    fn read_next(&mut self) -> Result<Option<Unit<Self::Symbol>>>;

    /// Return the cursor to the start of the input for a second pass.
    fn rewind(&mut self) -> Result<()>;
}

/// Reads one line of UTF-8 text per unit, stripping the trailing
/// line terminator (`\n` or `\r\n`). Symbols are the line's characters.
pub struct LineReader<R> {
    inner: R,
    line: u64,
}

impl<R: BufRead + Seek> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line: 0 }
    }
}

impl<R: BufRead + Seek> UnitReader for LineReader<R> {
    type Symbol = char;

    fn read_next(&mut self) -> Result<Option<Unit<char>>> {
        let mut raw = Vec::new();
        let n = self.inner.read_until(b'\n', &mut raw)?;
        if n == 0 {
            return Ok(None);
        }
        self.line += 1;

        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }

        let text = String::from_utf8(raw).map_err(|_| ScanError::InvalidText { line: self.line })?;
        let symbols = text.chars().collect();

        Ok(Some(Unit {
            label: Label::Text(text),
            symbols,
        }))
    }

    fn rewind(&mut self) -> Result<()> {
        self.inner.seek(SeekFrom::Start(0))?;
        self.line = 0;
        Ok(())
    }
}

/// Reads fixed-size byte blocks, shorter at end of input. Symbols are the
/// block's bytes; labels are block indices, restarting from 0 on rewind.
pub struct BlockReader<R> {
    inner: R,
    block_size: usize,
    index: u64,
}

impl<R: Read + Seek> BlockReader<R> {
    pub fn new(inner: R, block_size: usize) -> Self {
        debug_assert!(block_size > 0, "block size must be at least 1");
        Self {
            inner,
            block_size,
            index: 0,
        }
    }
}

impl<R: Read + Seek> UnitReader for BlockReader<R> {
    type Symbol = u8;

    fn read_next(&mut self) -> Result<Option<Unit<u8>>> {
        let mut buf = vec![0u8; self.block_size];
        let mut filled = 0;

        // Short reads mid-stream are filled until the block is full or EOF.
        while filled < self.block_size {
            let n = self.inner.read(&mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }

        if filled == 0 {
            return Ok(None);
        }
        buf.truncate(filled);

        let label = Label::Block(self.index);
        self.index += 1;

        Ok(Some(Unit {
            label,
            symbols: buf,
        }))
    }

    fn rewind(&mut self) -> Result<()> {
        self.inner.seek(SeekFrom::Start(0))?;
        self.index = 0;
        Ok(())
    }
}
