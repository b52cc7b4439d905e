use clap::Parser;
use kdroster::{OutputFormat, RegistryBuilder, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive registry of located records", long_about = None)]
struct Args {
    /// Configuration file (JSON, or TOML with the `toml` feature)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print records as JSON objects, one per line
    #[arg(long)]
    json: bool,

    /// First id handed out on registration
    #[arg(long)]
    first_id: Option<u64>,
}

fn main() -> kdroster::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut builder = RegistryBuilder::new();
    if let Some(path) = args.config {
        log::info!("Loading configuration from {}", path.display());
        builder = builder.config_path(path);
    }
    if let Some(first_id) = args.first_id {
        builder = builder.first_id(first_id);
    }
    let registry = builder.build()?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(registry, stdin.lock(), stdout.lock())
        .with_format(format)
        .run()
}
