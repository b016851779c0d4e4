//! Cross-field validation of built version descriptions.
//!
//! Per version the two codeword sums are checked for every level, then the
//! level order. Versions are checked in table order and the first failure
//! ends validation.

use tracing::info;

use crate::error::{Result, TableError};
use crate::models::{ECLevel, ErrorTable, VersionDesc};

/// Check one version.
pub fn validate_version(desc: &VersionDesc) -> Result<()> {
    for level in &desc.levels {
        let derived = level.total_codewords();
        let declared = u64::from(desc.total_codewords);
        if derived != declared {
            return Err(TableError::TotalCodewordMismatch {
                version: desc.version,
                level: level.level,
                derived,
                declared,
            });
        }
    }

    for level in &desc.levels {
        let derived = level.derived_ecc_codewords();
        let declared = u64::from(level.ecc_codewords);
        if derived != declared {
            return Err(TableError::EccCodewordMismatch {
                version: desc.version,
                level: level.level,
                derived,
                declared,
            });
        }
    }

    let actual = desc.level_sequence();
    if actual != ECLevel::ALL {
        return Err(TableError::LevelSequenceMismatch {
            version: desc.version,
            expected: ECLevel::ALL.to_vec(),
            actual,
        });
    }

    Ok(())
}

/// Check every version and wrap the result as a read-only table.
pub fn validate(versions: Vec<VersionDesc>) -> Result<ErrorTable> {
    for desc in &versions {
        validate_version(desc)?;
    }
    info!(versions = versions.len(), "validated table");
    Ok(ErrorTable::from_validated(versions))
}
