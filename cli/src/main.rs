mod commands;
mod terminal;

use commands::{CommandLine, Commands, cidr, convert, inspect, sql};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.to_config();

    logging::init_logging(&cfg);

    match commands.command {
        Commands::Inspect { addresses } => {
            print::header("address details", cfg.quiet);
            inspect::inspect(&addresses, &cfg)
        }
        Commands::Cidr { blocks } => {
            print::header("resolving blocks", cfg.quiet);
            cidr::cidr(&blocks, &cfg)
        }
        Commands::Sql { first, second } => {
            print::header("decoding sql pair", cfg.quiet);
            sql::sql(first, second, &cfg)
        }
        Commands::Convert { file } => convert::convert(&file, &cfg),
    }
}
