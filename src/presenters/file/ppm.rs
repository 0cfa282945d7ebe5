use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, error};

use crate::controllers::painter::data::frame::Frame;
use crate::controllers::painter::ports::frame_sink::FrameSink;
use crate::storage::write_ppm::write_ppm;

#[derive(Default)]
struct Outcome {
    written: Vec<PathBuf>,
    first_error: Option<io::Error>,
}

/// Writes every published frame to `<dir>/frame_<generation>.ppm`.
///
/// `publish` cannot fail, so the first IO error is kept and reported by `finish`.
/// Later frames are skipped once a write has failed.
pub struct PpmFrameSink {
    dir: PathBuf,
    outcome: Mutex<Outcome>,
}

impl PpmFrameSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            outcome: Mutex::new(Outcome::default()),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn frame_path(&self, generation: u64) -> PathBuf {
        self.dir.join(format!("frame_{generation:04}.ppm"))
    }

    /// Paths written so far, or the first write error.
    pub fn finish(&self) -> io::Result<Vec<PathBuf>> {
        let mut outcome = self.outcome.lock().unwrap_or_else(PoisonError::into_inner);

        match outcome.first_error.take() {
            Some(error) => Err(error),
            None => Ok(outcome.written.clone()),
        }
    }
}

impl FrameSink for PpmFrameSink {
    fn publish(&self, frame: &Frame<'_>) {
        let mut outcome = self.outcome.lock().unwrap_or_else(PoisonError::into_inner);
        if outcome.first_error.is_some() {
            return;
        }

        let path = self.frame_path(frame.generation);
        match write_ppm(frame.surface, &path) {
            Ok(()) => {
                debug!(path = %path.display(), "wrote frame");
                outcome.written.push(path);
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to write frame");
                outcome.first_error = Some(err);
            }
        }
    }
}
