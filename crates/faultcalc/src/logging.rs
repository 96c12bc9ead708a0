use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "faultcalc.log";

const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Size-based truncation of the log file, applied once at startup.
#[derive(Debug, Clone, Copy)]
struct Rotation {
    /// Size that triggers truncation
    limit: u64,
    /// Bytes of recent output to keep
    tail: u64,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            limit: 5 * 1024 * 1024,
            tail: 1024 * 1024,
        }
    }
}

impl Rotation {
    /// Truncate `path` to its last `tail` bytes once it exceeds `limit`.
    ///
    /// The kept tail starts at a line boundary. Returns whether the file was rewritten.
    fn apply(&self, path: &Path) -> io::Result<bool> {
        let len = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e),
        };
        if len <= self.limit {
            return Ok(false);
        }

        let tail = read_tail(path, len.saturating_sub(self.tail))?;

        let mut file = File::create(path)?;
        file.write_all(ROTATION_MARKER)?;
        file.write_all(&tail)?;
        Ok(true)
    }
}

/// Bytes from `offset` to the end of the file, starting after the first newline
fn read_tail(path: &Path, offset: u64) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(offset))?;
    let mut tail = Vec::new();
    file.read_to_end(&mut tail)?;

    if let Some(newline) = tail.iter().position(|&b| b == b'\n') {
        tail.drain(..=newline);
    }
    Ok(tail)
}

/// Initialize logging to `{data_dir}/faultcalc.log`.
///
/// Standard output stays reserved for results. The level comes from `level`
/// unless `RUST_LOG` is set.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    if let Err(e) = Rotation::default().apply(&log_path) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("faultcalc={level},faultcalc_core=warn")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), "faultcalc logging initialized");
    Ok(())
}
