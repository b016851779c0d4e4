use super::ECLevel;
use crate::error::{Result, TableError};

/// A group of identically shaped Reed-Solomon blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDesc {
    /// Number of blocks in the group (>= 1)
    pub count: u32,
    /// Codewords per block, data + ECC (>= 1)
    pub codewords_total: u32,
    /// Data codewords per block (1..=codewords_total)
    pub codewords_data: u32,
}

impl BlockDesc {
    /// ECC codewords per block.
    pub fn ecc_per_block(&self) -> u32 {
        self.codewords_total.saturating_sub(self.codewords_data)
    }
}

/// Block layout of one ECC level within a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EccDesc {
    pub level: ECLevel,
    /// Declared number of ECC codewords across all blocks
    pub ecc_codewords: u32,
    /// Block groups in table order
    pub blocks: Vec<BlockDesc>,
}

impl EccDesc {
    pub fn new(level: ECLevel, ecc_codewords: u32) -> Self {
        Self {
            level,
            ecc_codewords,
            blocks: Vec::new(),
        }
    }

    /// Total number of blocks across all groups.
    pub fn block_count(&self) -> u64 {
        self.blocks.iter().map(|b| u64::from(b.count)).sum()
    }

    /// Sum of `count * codewords_total` over all groups.
    pub fn total_codewords(&self) -> u64 {
        self.blocks
            .iter()
            .map(|b| u64::from(b.count) * u64::from(b.codewords_total))
            .sum()
    }

    /// Sum of `count * codewords_data` over all groups.
    pub fn data_codewords(&self) -> u64 {
        self.blocks
            .iter()
            .map(|b| u64::from(b.count) * u64::from(b.codewords_data))
            .sum()
    }

    /// Sum of `count * (codewords_total - codewords_data)` over all groups.
    pub fn derived_ecc_codewords(&self) -> u64 {
        self.blocks
            .iter()
            .map(|b| u64::from(b.count) * u64::from(b.ecc_per_block()))
            .sum()
    }
}

/// Error correction characteristics of one QR version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDesc {
    /// Version number (1-40)
    pub version: u8,
    /// Total data + ECC codewords in the symbol
    pub total_codewords: u32,
    /// Levels in table order; a validated table holds exactly L, M, Q, H
    pub levels: Vec<EccDesc>,
}

impl VersionDesc {
    pub fn new(version: u8, total_codewords: u32) -> Self {
        Self {
            version,
            total_codewords,
            levels: Vec::new(),
        }
    }

    /// Level sequence as listed in the table.
    pub fn level_sequence(&self) -> Vec<ECLevel> {
        self.levels.iter().map(|e| e.level).collect()
    }

    pub fn level(&self, level: ECLevel) -> Option<&EccDesc> {
        self.levels.iter().find(|e| e.level == level)
    }
}

/// A validated set of version descriptions, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorTable {
    versions: Vec<VersionDesc>,
}

impl ErrorTable {
    /// Wrap versions that already passed validation.
    pub(crate) fn from_validated(versions: Vec<VersionDesc>) -> Self {
        Self { versions }
    }

    pub fn versions(&self) -> &[VersionDesc] {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn version(&self, version: u8) -> Option<&VersionDesc> {
        self.versions.iter().find(|v| v.version == version)
    }

    /// Block layout for a version and level.
    pub fn characteristics(&self, version: u8, level: ECLevel) -> Result<&EccDesc> {
        self.version(version)
            .and_then(|v| v.level(level))
            .ok_or(TableError::MissingCharacteristics { version, level })
    }
}
