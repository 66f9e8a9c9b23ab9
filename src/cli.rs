//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "librusec",
    about = "Converts a concatenated fb2 text dump into cleaned corpus fragments."
)]
/// Conversion command and parameters.
///
/// ```sh
/// librusec 0.1.0
/// Converts a concatenated fb2 text dump into cleaned corpus fragments.
///
/// USAGE:
///     librusec [OPTIONS] <input-path> <output-path>
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///     -c, --config <config>    JSON file overriding default thresholds
///
/// ARGS:
///     <input-path>     concatenated dump (.gz supported)
///     <output-path>    JSON Lines archive destination (.gz supported)
/// ```
pub struct Librusec {
    #[structopt(parse(from_os_str), help = "concatenated dump (.gz supported)")]
    pub input_path: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "JSON Lines archive destination (.gz supported)"
    )]
    pub output_path: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "config",
        help = "JSON file overriding default thresholds"
    )]
    pub config: Option<PathBuf>,
}
