use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use uniinfo::models::EditorConfig;
use uniinfo::Result;

#[derive(Parser)]
#[command(name = "uniinfo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive editor for university survey records", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "uniinfo.toml")]
    config: PathBuf,

    /// Extra directories to scan for data files (repeatable)
    #[arg(long = "data-dir")]
    data_dirs: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = EditorConfig::load(&cli.config)?;
    config.data_dirs.extend(cli.data_dirs);

    uniinfo::cli::repl::run(config)
}
