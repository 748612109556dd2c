mod commands;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use markmap_kit_core::load_config_if_present;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "markmap-kit")]
#[command(version, about = "Turn a folder of Markdown outlines into markmap mind-map pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser)]
enum Command {
    /// Generate every page plus index.html (default)
    Build {
        /// Directory containing .md sources [default: md]
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Existing directory for generated HTML [default: markmap]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Regenerate a single page without touching index.html
    Page {
        /// Markdown file to convert
        file: PathBuf,

        /// Existing directory for generated HTML [default: markmap]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Command::Build {
        source: None,
        output: None,
    });

    match command {
        Command::Build { source, output } => {
            let paths = load_config_if_present(".")
                .context("Failed to load markmap.toml")?
                .with_overrides(source, output);
            commands::build::run(&paths).map(|_| ())
        }
        Command::Page { file, output } => {
            let paths = load_config_if_present(".")
                .context("Failed to load markmap.toml")?
                .with_overrides(None, output);
            commands::page::run(&file, &paths.output_dir)
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "markmap-kit", &mut io::stdout());
            Ok(())
        }
    }
}
