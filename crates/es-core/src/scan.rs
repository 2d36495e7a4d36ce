//! Scan strategies: local (per-unit) and global (whole-file) probabilities.

use log::debug;

use crate::entropy::entropy;
use crate::error::Result;
use crate::histogram::Histogram;
use crate::probability::estimate;
use crate::reader::{Label, UnitReader};

/// Probability model used when scoring units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Probabilities recomputed independently for every unit.
    Local,
    /// Probabilities computed once over the whole input, then applied to
    /// each unit's symbol subset.
    Global,
}

/// Score every unit of `reader`, emitting `(label, entropy)` pairs in
/// read order. Zero-length units are skipped without emission.
pub fn scan<R, F>(reader: &mut R, method: Method, base: u32, emit: F) -> Result<()>
where
    R: UnitReader,
    F: FnMut(&Label, f64),
{
    match method {
        Method::Local => scan_local(reader, base, emit),
        Method::Global => scan_global(reader, base, emit),
    }
}

/// Single pass: each unit's histogram serves as both the probability
/// source and the subset to sum over.
fn scan_local<R, F>(reader: &mut R, base: u32, mut emit: F) -> Result<()>
where
    R: UnitReader,
    F: FnMut(&Label, f64),
{
    while let Some(unit) = reader.read_next()? {
        if unit.is_empty() {
            continue;
        }
        let hist = Histogram::from_symbols(unit.symbols.iter().copied());
        let probs = estimate(&hist)?;
        let value = entropy(&probs, hist.symbols(), base);
        emit(&unit.label, value);
    }
    Ok(())
}

/// Two passes: accumulate one histogram over the whole input, derive the
/// probability mapping, rewind, then score each unit's symbol slice
/// against that mapping.
fn scan_global<R, F>(reader: &mut R, base: u32, mut emit: F) -> Result<()>
where
    R: UnitReader,
    F: FnMut(&Label, f64),
{
    let mut hist = Histogram::new();
    let mut units = 0u64;
    while let Some(unit) = reader.read_next()? {
        units += 1;
        hist.extend(unit.symbols.iter().copied());
    }

    // Empty input (or all units zero-length): nothing to score.
    if hist.is_empty() {
        return Ok(());
    }

    debug!(
        "global pass 1: {} units, {} symbols, {} distinct",
        units,
        hist.total(),
        hist.distinct()
    );

    let probs = estimate(&hist)?;
    reader.rewind()?;

    while let Some(unit) = reader.read_next()? {
        if unit.is_empty() {
            continue;
        }
        let slice = Histogram::from_symbols(unit.symbols.iter().copied());
        let value = entropy(&probs, slice.symbols(), base);
        emit(&unit.label, value);
    }
    Ok(())
}
