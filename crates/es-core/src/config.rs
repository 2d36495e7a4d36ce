//! Scan configuration shared between the CLI and the core.

use crate::error::{Result, ScanError};
use crate::scan::Method;

/// Whether the input is split into text lines or fixed-size byte blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitMode {
    Line,
    Block,
}

/// Everything the scan needs to know about one invocation.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub unit_mode: UnitMode,
    /// Block size in bytes (block mode only).
    pub block_size: usize,
    pub method: Method,
    /// Logarithm base for the entropy sum.
    pub base: u32,
    /// Print only entropy values, no labels or per-file headers.
    pub terse: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            unit_mode: UnitMode::Line,
            block_size: 16,
            method: Method::Local,
            base: 2,
            terse: false,
        }
    }
}

impl ScanConfig {
    /// Reject configurations no scan can honor, before any file is opened.
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(ScanError::InvalidConfig(
                "block size must be at least 1".to_string(),
            ));
        }
        if self.base < 2 {
            return Err(ScanError::InvalidConfig(
                "logarithm base must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_ones() {
        let config = ScanConfig::default();
        assert_eq!(config.unit_mode, UnitMode::Line);
        assert_eq!(config.block_size, 16);
        assert_eq!(config.method, Method::Local);
        assert_eq!(config.base, 2);
        assert!(!config.terse);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_block_size_is_rejected() {
        let config = ScanConfig {
            block_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn base_below_two_is_rejected() {
        let config = ScanConfig {
            base: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
