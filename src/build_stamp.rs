//! Build timestamp resolution and rendering.
//!
//! This file is compiled twice: once into the library and once into
//! `build.rs` through a `#[path]` module. It must not refer to anything
//! else in the crate.

use anyhow::{Context, Result};
use std::time::{SystemTime, UNIX_EPOCH};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Environment variable that pins the build timestamp (reproducible-builds.org).
pub const SOURCE_DATE_EPOCH_VAR: &str = "SOURCE_DATE_EPOCH";

/// `__DATE__` layout: abbreviated month, space-padded day, four-digit year.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:space] [year]");

/// `__TIME__` layout.
const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

/// The moment a build claims to have happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildEpoch {
    seconds: i64,
    pinned: bool,
}

/// Rendered date and time strings for a [`BuildEpoch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStamp {
    pub date: String,
    pub time: String,
}

impl BuildEpoch {
    /// An epoch fixed by the packager. Rebuilding yields the same stamp.
    pub fn pinned(seconds: i64) -> Self {
        Self {
            seconds,
            pinned: true,
        }
    }

    /// An epoch taken from the clock at build time.
    pub fn floating(seconds: i64) -> Self {
        Self {
            seconds,
            pinned: false,
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Render the epoch as UTC date and time strings.
    pub fn stamp(&self) -> Result<BuildStamp> {
        let at = OffsetDateTime::from_unix_timestamp(self.seconds)
            .with_context(|| format!("build epoch {} is out of range", self.seconds))?;
        Ok(BuildStamp {
            date: at
                .format(DATE_FORMAT)
                .context("failed to format build date")?,
            time: at
                .format(TIME_FORMAT)
                .context("failed to format build time")?,
        })
    }
}

/// Pick the build epoch: `SOURCE_DATE_EPOCH` when set and non-blank, `now` otherwise.
pub fn resolve_epoch(source_date_epoch: Option<&str>, now: SystemTime) -> Result<BuildEpoch> {
    match source_date_epoch.map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            let seconds = raw.parse::<i64>().with_context(|| {
                format!("{SOURCE_DATE_EPOCH_VAR} is not a unix timestamp: {raw:?}")
            })?;
            Ok(BuildEpoch::pinned(seconds))
        }
        _ => {
            let elapsed = now
                .duration_since(UNIX_EPOCH)
                .context("system clock is set before the unix epoch")?;
            let seconds =
                i64::try_from(elapsed.as_secs()).context("system clock is out of range")?;
            Ok(BuildEpoch::floating(seconds))
        }
    }
}
