//! Diagnostic line logger.
//!
//! Every record is one line of the form
//! `<file> +<line> <function>(): [<error>: ]<message>`, written to whatever
//! destination the [`Logger`] was built with. Records are always plain text;
//! terminal styling is reserved for the stderr notes at the bottom.

use console::{Color, Term, style};
use std::fmt;
use std::io::{self, Write};

/// Where a log record was emitted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl Location {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

/// Writes log records to a single destination.
pub struct Logger<W: Write> {
    dest: W,
}

impl Logger<io::Stdout> {
    /// Logger on standard output, the default destination.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Logger<W> {
    pub fn new(dest: W) -> Self {
        Self { dest }
    }

    /// Write one record. Write failures are dropped.
    pub fn log(&mut self, location: &Location, errnum: i32, args: fmt::Arguments<'_>) {
        let _ = self.try_log(location, errnum, args);
    }

    /// Write one record and report whether the destination accepted it.
    pub fn try_log(
        &mut self,
        location: &Location,
        errnum: i32,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        write_record(&mut self.dest, location, errnum, args)
    }

    pub fn into_inner(self) -> W {
        self.dest
    }
}

fn write_record(
    w: &mut dyn Write,
    location: &Location,
    errnum: i32,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    write!(
        w,
        "{} +{} {}(): ",
        location.file, location.line, location.function
    )?;
    if errnum != 0 {
        write!(w, "{}: ", describe_errno(errnum))?;
    }
    writeln!(w, "{args}")
}

/// Platform description of an OS error code, as `strerror` would print it.
pub fn describe_errno(errnum: i32) -> String {
    let text = io::Error::from_raw_os_error(errnum).to_string();
    let suffix = format!(" (os error {errnum})");
    match text.strip_suffix(&suffix) {
        Some(desc) => desc.to_string(),
        None => text,
    }
}

/// Reduce a `type_name` path to the name of the function it points into.
///
/// `rsb::banner::announce` becomes `announce`; closures report their
/// enclosing function.
pub fn short_function_name(path: &'static str) -> &'static str {
    let mut path = path;
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    match path.rfind("::") {
        Some(idx) => &path[idx + 2..],
        None => path,
    }
}

/// Print a labeled note on stderr, styled when stderr is a terminal.
pub fn note(msg: &str) {
    note_to_with_tty(&mut io::stderr(), msg, Term::stderr().is_term());
}

pub fn note_to_with_tty(w: &mut dyn Write, msg: &str, is_tty: bool) {
    let label = if is_tty {
        style("Note").for_stderr().bold().fg(Color::Yellow).to_string()
    } else {
        "Note".to_string()
    };
    let _ = writeln!(w, "{label} {msg}");
}

/// Name of the enclosing function.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        $crate::output::short_function_name(&name[..name.len() - 3])
    }};
}

/// [`Location`] of the macro call site.
#[macro_export]
macro_rules! here {
    () => {
        $crate::output::Location::new(file!(), line!(), $crate::function_name!())
    };
}

/// Log a formatted record through a [`Logger`], tagged with the call site.
///
/// ```ignore
/// rsb_log!(logger, "rsb version: {}", VERSION);
/// rsb_log!(logger, errno = err.raw_os_error().unwrap_or(0), "open {} failed", path);
/// ```
#[macro_export]
macro_rules! rsb_log {
    ($logger:expr, errno = $errnum:expr, $($arg:tt)+) => {
        $logger.log(&$crate::here!(), $errnum, format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(&$crate::here!(), 0, format_args!($($arg)+))
    };
}
