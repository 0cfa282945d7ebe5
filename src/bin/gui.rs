use clap::Parser;
use painter::PainterConfig;

/// Interactive painter window. Reads commands from stdin; left click adds a figure.
#[derive(Parser, Debug)]
#[command(name = "painter-gui", version)]
struct Cli {
    /// Surface width in pixels.
    #[arg(long, default_value_t = PainterConfig::default().width)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = PainterConfig::default().height)]
    height: u32,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    painter::logging::init(cli.verbose);

    painter::run_gui(PainterConfig {
        width: cli.width,
        height: cli.height,
    })
}
