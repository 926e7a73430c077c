//! The three records the binary prints on startup.

use crate::build_info::BuildInfo;
use crate::output::Logger;
use crate::rsb_log;
use std::io::Write;

/// Log the version, then the build date and time.
///
/// The last two lines change with every unpinned build, which is exactly what
/// makes a binary that embeds them non-reproducible.
pub fn announce<W: Write>(logger: &mut Logger<W>, info: &BuildInfo) {
    rsb_log!(logger, "rsb version: {}", info.version);

    rsb_log!(logger, "   __DATE__: {}", info.date);
    rsb_log!(logger, "   __TIME__: {}", info.time);
}
