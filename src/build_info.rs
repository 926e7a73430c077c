//! Build metadata compiled into the binary.
//!
//! `build.rs` resolves the build epoch and exports it as `RSB_BUILD_*` rustc
//! env vars. This module reads them back and also lets callers construct the
//! same metadata for any epoch.

use crate::build_stamp::BuildEpoch;
use anyhow::Result;

/// Version identifier, taken from Cargo.toml at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const BUILD_DATE: &str = env!("RSB_BUILD_DATE");
const BUILD_TIME: &str = env!("RSB_BUILD_TIME");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    /// Build date in `__DATE__` layout, e.g. `"Oct 16 2026"`.
    pub date: String,
    /// Build time in `__TIME__` layout, e.g. `"22:17:05"`.
    pub time: String,
}

impl BuildInfo {
    /// The metadata of the running binary.
    pub fn compiled() -> Self {
        Self {
            version: VERSION.to_string(),
            date: BUILD_DATE.to_string(),
            time: BUILD_TIME.to_string(),
        }
    }

    /// Metadata as a build at `epoch` would have recorded it.
    pub fn from_epoch(version: &str, epoch: BuildEpoch) -> Result<Self> {
        let stamp = epoch.stamp()?;
        Ok(Self {
            version: version.to_string(),
            date: stamp.date,
            time: stamp.time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_version_is_fixed() {
        assert_eq!(BuildInfo::compiled().version, "1.2.3");
    }

    #[test]
    fn test_compiled_stamp_is_present() {
        let info = BuildInfo::compiled();
        assert!(!info.date.is_empty());
        assert!(!info.time.is_empty());
    }

    #[test]
    fn test_from_epoch_renders_stamp() {
        let info = BuildInfo::from_epoch("1.2.3", BuildEpoch::pinned(0)).unwrap();
        assert_eq!(
            info,
            BuildInfo {
                version: "1.2.3".to_string(),
                date: "Jan  1 1970".to_string(),
                time: "00:00:00".to_string(),
            }
        );
    }

    #[test]
    fn test_same_pinned_epoch_is_identical() {
        let a = BuildInfo::from_epoch("1.2.3", BuildEpoch::pinned(1_700_000_000)).unwrap();
        let b = BuildInfo::from_epoch("1.2.3", BuildEpoch::pinned(1_700_000_000)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_range_epoch_propagates() {
        assert!(BuildInfo::from_epoch("1.2.3", BuildEpoch::pinned(i64::MAX)).is_err());
    }
}
