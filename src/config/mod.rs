pub mod numeral;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub const VERSION: &str = "1.0.0.4";

/// Copy part or all of a file and insert it into another file.
#[derive(Parser, Debug)]
#[command(
    name = "cpchunk",
    version = VERSION,
    disable_version_flag = true,
    about,
    long_about = None,
    after_help = "All numbers are in decimal unless prefixed with 0x (hex), 0b (binary), \
                  or 0o (octal). Unless using one of these prefixes, a nonzero number may \
                  not start with the digit 0."
)]
pub struct Args {
    /// File to copy from
    pub src: PathBuf,

    /// File to copy to
    pub dest: PathBuf,

    /// Offset in source file to copy from
    #[arg(short = 's', long, default_value = "0", value_parser = numeral::parse_offset)]
    pub src_offset: u64,

    /// Offset in destination file to copy to. Data at this offset will be
    /// overwritten. If not specified, the output file will be truncated
    #[arg(short = 'd', long, value_parser = numeral::parse_offset, conflicts_with = "append")]
    pub dest_offset: Option<u64>,

    /// Append to end of destination file. Mutually exclusive with -d
    #[arg(short = 'a', long)]
    pub append: bool,

    /// Number of bytes to copy. If not specified, copy whole file
    #[arg(
        short = 'l',
        long = "len",
        visible_alias = "size",
        default_value = "-1",
        allow_hyphen_values = true,
        value_parser = numeral::parse_length
    )]
    pub len: i64,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Args {
    pub fn create() -> Self {
        Args::parse()
    }

    pub fn resolve_from<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Args::try_parse_from(argv)
    }

    /// `None` when the whole rest of the source should be copied.
    pub fn length(&self) -> Option<u64> {
        u64::try_from(self.len).ok()
    }
}
