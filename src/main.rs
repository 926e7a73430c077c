use clap::Parser;
use rsb::banner;
use rsb::build_info::BuildInfo;
use rsb::output::{self, Logger};

/// Reproducible sandbox: print the version and the build timestamp.
///
/// The build timestamp differs on every build unless SOURCE_DATE_EPOCH is
/// pinned at build time, so the output shows what breaks reproducibility.
#[derive(Parser, Debug)]
#[command(
    name = "rsb",
    version,
    about,
    after_help = "Examples:\n  rsb\n  SOURCE_DATE_EPOCH=0 cargo build   # pin the build timestamp"
)]
struct Cli {}

/// What to do after argument parsing.
#[derive(Debug, PartialEq, Eq)]
enum Startup {
    Announce,
    /// `--help` or `--version` already printed their output.
    Done,
}

/// Parse arguments. Invalid arguments are reported and ignored: the
/// program takes no input and always announces.
fn parse_args<I, T>(args: I) -> Startup
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(_) => Startup::Announce,
        Err(e) if e.use_stderr() => {
            output::note(&format!("ignoring arguments: {}", e.kind()));
            Startup::Announce
        }
        Err(e) => {
            let _ = e.print();
            Startup::Done
        }
    }
}

fn main() {
    if parse_args(std::env::args_os()) == Startup::Done {
        return;
    }

    let mut logger = Logger::stdout();
    banner::announce(&mut logger, &BuildInfo::compiled());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_announces() {
        assert_eq!(parse_args(["rsb"]), Startup::Announce);
    }

    #[test]
    fn test_unknown_args_still_announce() {
        assert_eq!(parse_args(["rsb", "extra"]), Startup::Announce);
        assert_eq!(parse_args(["rsb", "--log-file", "/"]), Startup::Announce);
    }

    #[test]
    fn test_version_and_help_stop_early() {
        assert_eq!(parse_args(["rsb", "--version"]), Startup::Done);
        assert_eq!(parse_args(["rsb", "--help"]), Startup::Done);
    }
}
