use clap::Parser;
use img_webp::{run_batch, ConvertConfig, DEFAULT_QUALITY, DEFAULT_REPORT_NAME};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "img-webp")]
#[command(version, about = "Convert a directory of images to WebP and record their dominant colors", long_about = None)]
struct Cli {
    /// Directory to scan (defaults to the current directory)
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// WebP quality (0-100)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,

    /// Include subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Name of the color report written in DIR
    #[arg(long, default_value = DEFAULT_REPORT_NAME)]
    report_name: String,

    /// Accepted source extensions, comma separated
    #[arg(short, long, value_delimiter = ',', default_value = "jpg,jpeg,png,bmp,tiff")]
    extensions: Vec<String>,

    /// Keep directory listing order instead of sorting paths
    #[arg(long)]
    no_sort: bool,

    /// Mirror debug logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> ConvertConfig {
        ConvertConfig::new()
            .with_extensions(&self.extensions)
            .with_quality(self.quality)
            .with_recursive(self.recursive)
            .with_report_name(self.report_name.clone())
            .with_sort(!self.no_sort)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        shared_utils::logging::LogConfig::default()
            .with_level(Level::DEBUG)
            .with_console(true)
    } else {
        shared_utils::logging::LogConfig::default()
    };
    let _ = shared_utils::logging::init_logging("img_webp", log_config);

    run_batch(&cli.dir, &cli.to_config())?;
    Ok(())
}
