//! Raster image utilities: resize and format conversion.
//!
//! Thin plumbing around the `image` crate, kept deliberately small: codecs
//! and pixel math belong to the library, this module only adds path
//! validation and the save-then-reload discipline.
//!
//! ## Apply, then re-derive
//!
//! Every save is followed by reloading the in-memory image from the file's
//! own path. When an operation writes to a *different* output path, the
//! reload restores the in-memory state to match `self.path`, so a resize
//! saved elsewhere does not leave this handle silently holding pixels that
//! disagree with the file it claims to represent.

use crate::error::Docx2WcError;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extensions the utilities accept, matching the codecs we rely on.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "bmp", "tiff", "webp", "ico"];

/// An open raster image tied to its backing file.
pub struct ImageFile {
    path: PathBuf,
    image: DynamicImage,
}

impl ImageFile {
    /// Open an image file, validating its extension against the supported
    /// set before decoding.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Docx2WcError> {
        let path = path.as_ref().to_path_buf();
        validate_extension(&path)?;

        if !path.exists() {
            return Err(Docx2WcError::FileNotFound { path });
        }

        let image = image::open(&path).map_err(|e| Docx2WcError::ImageOperation {
            path: path.clone(),
            detail: e.to_string(),
        })?;

        debug!("Opened image: {} ({}x{})", path.display(), image.width(), image.height());
        Ok(Self { path, image })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Image dimensions in pixels as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Resize to the given dimensions and save.
    ///
    /// With `keep_aspect`, the image is scaled to fit *within*
    /// `width × height` preserving its aspect ratio; otherwise dimensions
    /// are applied exactly. Saves to `output_path` when given (its extension
    /// must match the source extension — resizing never converts formats),
    /// otherwise overwrites the source file.
    pub fn resize(
        &mut self,
        width: u32,
        height: u32,
        output_path: Option<&Path>,
        keep_aspect: bool,
    ) -> Result<PathBuf, Docx2WcError> {
        if let Some(out) = output_path {
            let expected = extension_of(&self.path);
            let got = extension_of(out);
            if !expected.eq_ignore_ascii_case(&got) {
                return Err(Docx2WcError::ImageExtensionMismatch {
                    expected: format!(".{expected}"),
                    got: format!(".{got}"),
                });
            }
        }

        self.image = if keep_aspect {
            self.image.thumbnail(width, height)
        } else {
            self.image
                .resize_exact(width, height, image::imageops::FilterType::Lanczos3)
        };

        let target = output_path.unwrap_or(&self.path).to_path_buf();
        let saved = self.save(&target)?;
        info!("Resized {} to {}x{} at {}", self.path.display(), width, height, saved.display());
        Ok(saved)
    }

    /// Save under a different format and return the path written.
    ///
    /// `format` is an extension-style name (`"webp"`, `"png"`, ...). The
    /// output path defaults to the source path with its extension swapped;
    /// a provided path gets its extension swapped too, so the encoder and
    /// the file name can never disagree.
    pub fn convert_format(
        &mut self,
        format: &str,
        output_path: Option<&Path>,
    ) -> Result<PathBuf, Docx2WcError> {
        let format = format.trim_start_matches('.').to_ascii_lowercase();
        if !SUPPORTED_IMAGE_EXTENSIONS.contains(&format.as_str()) {
            return Err(Docx2WcError::UnsupportedImageFormat {
                path: self.path.clone(),
                extension: format,
            });
        }

        let target = output_path
            .unwrap_or(&self.path)
            .with_extension(&format);

        match format.as_str() {
            // The ICO encoder rejects dimensions above 256; favicons are
            // what this is for, so follow the 32x32 convention.
            "ico" => self.image = self.image.thumbnail(32, 32),
            // JPEG has no alpha channel.
            "jpg" | "jpeg" => self.image = DynamicImage::ImageRgb8(self.image.to_rgb8()),
            _ => {}
        }

        let saved = self.save(&target)?;
        info!("Converted {} to {} at {}", self.path.display(), format, saved.display());
        Ok(saved)
    }

    /// Save the image to `output_path` (encoder chosen from its extension),
    /// then reload the in-memory image from this file's own path.
    pub fn save(&mut self, output_path: &Path) -> Result<PathBuf, Docx2WcError> {
        validate_extension(output_path)?;

        self.image
            .save(output_path)
            .map_err(|e| Docx2WcError::ImageOperation {
                path: output_path.to_path_buf(),
                detail: e.to_string(),
            })?;

        // Re-derive state from disk; see module docs.
        self.image = image::open(&self.path).map_err(|e| Docx2WcError::ImageOperation {
            path: self.path.clone(),
            detail: e.to_string(),
        })?;

        Ok(output_path.to_path_buf())
    }
}

impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.dimensions();
        f.debug_struct("ImageFile")
            .field("path", &self.path)
            .field("dimensions", &format!("{w}x{h}"))
            .finish()
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn validate_extension(path: &Path) -> Result<(), Docx2WcError> {
    let ext = extension_of(path);
    if SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(Docx2WcError::UnsupportedImageFormat {
            path: path.to_path_buf(),
            extension: ext,
        })
    }
}
