use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use llf_common::{AppConfig, OutputFormat};
use llf_domain::SizeFormat;

#[derive(Parser, Debug)]
#[command(
    name = "llf",
    version,
    about = "Print the largest regular file under a directory and its size",
    after_help = "If directory is not specified, the current directory is used."
)]
pub struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Report the N largest files instead of only the largest
    #[arg(short = 'n', long, default_value_t = 1)]
    pub top: usize,

    /// Print sizes as raw byte counts
    #[arg(short, long)]
    pub bytes: bool,

    /// Use decimal (SI) units instead of binary ones
    #[arg(long, conflicts_with = "bytes")]
    pub si: bool,

    /// Do not descend more than N levels below the directory
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Ignore files and directories whose name starts with a dot
    #[arg(long)]
    pub skip_hidden: bool,

    /// Output layout
    #[arg(short, long, value_enum, default_value_t = FormatArg::Line)]
    pub format: FormatArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Line,
    Table,
    Json,
}

impl Args {
    pub fn into_config(self) -> AppConfig {
        let size_format = if self.bytes {
            SizeFormat::Bytes
        } else if self.si {
            SizeFormat::Decimal
        } else {
            SizeFormat::Binary
        };
        let output = match self.format {
            FormatArg::Line => OutputFormat::Line,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        };
        AppConfig {
            root: self.directory,
            top: self.top,
            size_format,
            output,
            max_depth: self.max_depth,
            skip_hidden: self.skip_hidden,
        }
    }
}
