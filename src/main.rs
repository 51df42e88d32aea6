use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use id3dump::{get_tag, Error};

#[derive(Parser, Debug)]
#[command(
    name = "id3dump",
    version,
    about = "Print the ID3v2 text and URL frames of audio files"
)]
struct Cli {
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
    #[arg(
        short = 'a',
        long = "all",
        long_help = "Also list frames that are not text or URL frames, as placeholder lines, and frames whose text failed to decode."
    )]
    all: bool,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        long_help = "Log filter used when RUST_LOG is not set, e.g. `debug` or `id3dump=trace`."
    )]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// absolute path when it can be resolved, as given otherwise
fn display_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn skip_message(path: &Path, err: &Error) -> String {
    match err {
        Error::IOError(e) => format!("Can't read '{}': {}", path.display(), e),
        e => format!("Skipping '{}': {}", path.display(), e),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut failed = false;
    let mut printed = false;

    for path in &cli.files {
        let tag = match get_tag(path) {
            Ok(tag) => tag,
            Err(e) => {
                let message = skip_message(path, &e);
                eprintln!("{}", message);
                match e {
                    Error::IOError(_) => {
                        error!("{}", message);
                        failed = true;
                    }
                    // no tag, or one we don't understand: move on to the next file
                    _ => warn!("{}", message),
                }
                continue;
            }
        };

        if printed {
            println!();
        }
        println!("[{}:{}]", tag.header.version, display_path(path).display());
        for field in tag.render() {
            if !cli.all && !field.is_text() {
                continue;
            }
            println!("{}", field);
        }
        printed = true;
    }

    if failed {
        process::exit(1);
    }
}
