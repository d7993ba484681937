//! Showing buffers to the user.
//!
//! A [`Viewer`] renders a buffer under a title and later blocks until the
//! user dismisses what was shown. [`ViewerSession`] scopes that lifetime:
//! create it, `show` any number of buffers, then `finish` (or drop) it to
//! wait for dismissal and release the viewer.
//!
//! [`PngViewer`] is the headless implementation used by the demo: every shown
//! buffer is encoded to `<dir>/<title>.png` and dismissal is immediate.
use crate::error::{ConvError, Result};
use crate::image::io::save_grayscale_u8;
use crate::image::GrayImageU8;
use std::fs;
use std::path::{Path, PathBuf};

pub trait Viewer {
    fn show(&mut self, title: &str, image: &GrayImageU8) -> Result<()>;

    /// Block until everything shown so far has been dismissed.
    fn wait_dismiss(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Scoped acquisition of a [`Viewer`].
pub struct ViewerSession<V: Viewer> {
    viewer: Option<V>,
}

impl<V: Viewer> ViewerSession<V> {
    pub fn new(viewer: V) -> Self {
        Self {
            viewer: Some(viewer),
        }
    }

    pub fn show(&mut self, title: &str, image: &GrayImageU8) -> Result<()> {
        match self.viewer.as_mut() {
            Some(viewer) => viewer.show(title, image),
            None => Err(ConvError::invalid("viewer session already finished")),
        }
    }

    /// Show `image` and wait for it to be dismissed before returning.
    pub fn show_and_wait(&mut self, title: &str, image: &GrayImageU8) -> Result<()> {
        self.show(title, image)?;
        match self.viewer.as_mut() {
            Some(viewer) => viewer.wait_dismiss(),
            None => Ok(()),
        }
    }

    /// Wait for dismissal and hand the viewer back.
    pub fn finish(mut self) -> Result<V> {
        let mut viewer = self
            .viewer
            .take()
            .ok_or_else(|| ConvError::invalid("viewer session already finished"))?;
        viewer.wait_dismiss()?;
        Ok(viewer)
    }
}

impl<V: Viewer> Drop for ViewerSession<V> {
    fn drop(&mut self) {
        if let Some(mut viewer) = self.viewer.take() {
            if let Err(err) = viewer.wait_dismiss() {
                log::warn!("viewer dismissal failed: {err}");
            }
        }
    }
}

/// Writes each shown buffer as a PNG into a directory.
#[derive(Debug)]
pub struct PngViewer {
    dir: PathBuf,
    shown: Vec<PathBuf>,
}

impl PngViewer {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| ConvError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            shown: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in show order.
    pub fn shown(&self) -> &[PathBuf] {
        &self.shown
    }

    fn file_name(title: &str) -> String {
        let stem: String = title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        format!("{stem}.png")
    }
}

impl Viewer for PngViewer {
    fn show(&mut self, title: &str, image: &GrayImageU8) -> Result<()> {
        let path = self.dir.join(Self::file_name(title));
        save_grayscale_u8(image, &path)?;
        log::info!(
            "{title}: {}x{} -> {}",
            image.width(),
            image.height(),
            path.display()
        );
        self.shown.push(path);
        Ok(())
    }
}
