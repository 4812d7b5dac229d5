pub mod cidr;
pub mod convert;
pub mod inspect;
pub mod sql;

use std::path::PathBuf;

use allocmap_common::config::Config;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "allocmap")]
#[command(about = "Turns address allocation data into canonical text and SQL ranges.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output; repeat to print results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output; repeat for trace level
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the canonical form, SQL pair and raw bytes of addresses
    #[command(alias = "i")]
    Inspect {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Resolve CIDR blocks to their lowest and highest address
    #[command(alias = "c")]
    Cidr {
        #[arg(required = true)]
        blocks: Vec<String>,
    },
    /// Decode a signed SQL pair back into an address
    #[command(alias = "s")]
    Sql {
        #[arg(allow_negative_numbers = true)]
        first: i64,
        #[arg(allow_negative_numbers = true)]
        second: i64,
    },
    /// Convert an allocation list into CSV range rows
    #[command(alias = "v")]
    Convert { file: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            quiet: self.quiet,
            verbose: self.verbose,
            no_color: self.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_verifies() {
        use clap::CommandFactory;
        CommandLine::command().debug_assert();
    }

    #[test]
    fn test_parse_sql_with_negative_numbers() {
        let cli = CommandLine::try_parse_from(["allocmap", "sql", "-9223372036854775808", "-1"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Sql { first: i64::MIN, second: -1 }
        ));
    }

    #[test]
    fn test_global_flags_build_config() {
        let cli = CommandLine::try_parse_from(["allocmap", "c", "10.0.0.0/8", "-qq", "--no-color"])
            .unwrap();
        let cfg = cli.to_config();
        assert_eq!(cfg.quiet, 2);
        assert_eq!(cfg.verbose, 0);
        assert!(cfg.no_color);
    }
}
