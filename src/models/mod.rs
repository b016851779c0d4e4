pub mod characteristics;
pub mod ec_level;

pub use characteristics::{BlockDesc, EccDesc, ErrorTable, VersionDesc};
pub use ec_level::{ECLevel, ParseLevelError, format_levels};
