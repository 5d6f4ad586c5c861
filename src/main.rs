use clap::Parser;
use rankfavs::LayoutMode;
use rankfavs::core::config;
use rankfavs::logging;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rankfavs", about = "Keep ranked lists of your favorite things")]
struct Args {
    /// Directory holding lists.json (overrides config and RANKFAVS_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Pane arrangement
    #[arg(short, long, value_enum)]
    layout: Option<LayoutMode>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logger first, so config loading is logged too
    if let Err(e) = logging::init(Path::new(logging::LOG_FILE)) {
        eprintln!("Logging disabled: {}", e);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config error, using defaults: {}", e);
        config::FavsConfig::default()
    });
    let resolved = config::resolve(&file_config, args.data_dir.as_deref(), args.layout);
    logging::apply_level(resolved.log_level);

    log::info!(
        "rankfavs starting up: data dir {}, layout {:?}",
        resolved.data_dir.display(),
        resolved.layout
    );

    rankfavs::tui::run(resolved)
}
