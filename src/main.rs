use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use painter::{EventLoop, FrameSink, Operation, PainterConfig, PpmFrameSink};
use tracing::info;

/// Runs a painter command script and writes every published frame as a PPM file.
#[derive(Parser, Debug)]
#[command(name = "painter", version)]
struct Cli {
    /// Command script, one instruction per line. `-` reads stdin.
    #[arg(long = "in", default_value = "-")]
    in_path: PathBuf,

    /// Directory that receives `frame_NNNN.ppm` files.
    #[arg(long, default_value = "output")]
    out: PathBuf,

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

    let config = PainterConfig {
        width: cli.width,
        height: cli.height,
    };
    let surface_rect = config.surface_rect().context("invalid surface size")?;

    let operations = read_script(&cli.in_path)?;

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("failed to create {}", cli.out.display()))?;

    let sink = Arc::new(PpmFrameSink::new(&cli.out));
    let event_loop = EventLoop::start(surface_rect, Arc::clone(&sink) as Arc<dyn FrameSink>)
        .context("failed to start event loop")?;

    for operation in operations {
        event_loop.post(operation);
    }
    event_loop.stop_and_wait();

    let written = sink
        .finish()
        .with_context(|| format!("failed to write frames to {}", cli.out.display()))?;

    info!(frames = written.len(), out = %cli.out.display(), "done");

    Ok(())
}

fn read_script(path: &Path) -> anyhow::Result<Vec<Operation>> {
    if path == Path::new("-") {
        return painter::parse(io::stdin().lock()).context("failed to parse stdin");
    }

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    painter::parse(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_read_stdin_and_write_to_output() {
        let cli = Cli::parse_from(["painter"]);

        assert_eq!(cli.in_path, PathBuf::from("-"));
        assert_eq!(cli.out, PathBuf::from("output"));
        assert_eq!((cli.width, cli.height), (800, 800));
        assert!(!cli.verbose);
    }

    #[test]
    fn read_script_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "bgrect 1 1\n").unwrap();

        let error = read_script(&path).unwrap_err();

        assert!(error.to_string().contains("bad.txt"));
        assert!(format!("{error:#}").contains("takes 4 argument(s), got 2"));
    }

    #[test]
    fn read_script_parses_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.txt");
        fs::write(&path, "white\nfigure 0.5 0.5\nupdate\n").unwrap();

        assert_eq!(read_script(&path).unwrap().len(), 3);
    }
}
