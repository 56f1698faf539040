use crate::render::{render_grid, RenderOptions};
use crate::search::{ExpansionObserver, Grid, Point};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Path of the frame written after `explored_count` expansions.
pub fn frame_path(dir: &Path, explored_count: usize) -> PathBuf {
    dir.join(format!("{:06}.txt", explored_count))
}

fn is_frame_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "txt")
        && path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.len() >= 6 && stem.bytes().all(|b| b.is_ascii_digit()))
}

/// Create `dir` if needed and remove frames left over from a previous run.
/// Other files in the directory are left alone. Returns the number of frames
/// removed.
pub fn clear_frames(dir: &Path) -> io::Result<usize> {
    fs::create_dir_all(dir)?;
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_frame_file(&path) {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    debug!(removed, dir = %dir.display(), "cleared old frames");
    Ok(removed)
}

/// Writes one rendered frame per expansion. Write failures never interrupt
/// the search: after the first failure no more frames are written and the
/// error is returned by [`FrameRecorder::finish`].
#[derive(Debug)]
pub struct FrameRecorder<'a> {
    grid: &'a Grid,
    dir: PathBuf,
    options: RenderOptions,
    explored: Vec<Point>,
    frames_written: usize,
    error: Option<io::Error>,
}

impl<'a> FrameRecorder<'a> {
    pub fn new(grid: &'a Grid, dir: impl Into<PathBuf>, options: RenderOptions) -> Self {
        Self {
            grid,
            dir: dir.into(),
            options,
            explored: Vec::new(),
            frames_written: 0,
            error: None,
        }
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// The number of frames written, or the first write error.
    pub fn finish(self) -> io::Result<usize> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.frames_written),
        }
    }
}

impl ExpansionObserver for FrameRecorder<'_> {
    fn on_expand(&mut self, explored_count: usize, state: Point) {
        self.explored.push(state);
        if self.error.is_some() {
            return;
        }
        let frame = render_grid(self.grid, &self.options, None, &self.explored, Some(state));
        let path = frame_path(&self.dir, explored_count);
        match fs::write(&path, frame) {
            Ok(()) => self.frames_written += 1,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to write frame, animation stopped");
                self.error = Some(e);
            }
        }
    }
}
