use clap::Command;

/// Command-line arguments for makezip
///
/// The tool takes no options: everything comes from the working directory.
/// Parsing still provides `--help` and `--version` and rejects stray arguments.
#[derive(Debug)]
pub struct Args;

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let _ = Self::command().get_matches();
        Self
    }

    fn command() -> Command {
        Command::new("makezip")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Package homework submission files for grading")
            .after_help(
                "Run from the submission directory. Sources are listed by \
                 `make -f pN/Makefile showsrc`; the archive is named from groupinfo.txt.",
            )
    }
}
