mod commands;
mod terminal;

use commands::{CommandLine, Commands, links, map, scan};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let mut cfg = commands.base_config();

    match commands.command {
        Commands::Map {
            source_directory,
            output,
            format,
        } => {
            print::header("mapping captures", cfg.quiet);
            cfg.source_dir = source_directory;
            cfg.output = output;
            cfg.format = format;
            map::map(&cfg)
        }
        Commands::Links {
            source_directory,
            raw,
        } => {
            cfg.source_dir = source_directory;
            links::links(&cfg, raw)
        }
        Commands::Scan { file } => scan::scan(&file, &cfg),
    }
}
