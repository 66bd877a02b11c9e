//! Report-region capture
//!
//! The document export embeds a raster image of the rendered closing report.
//! Where that image comes from is a collaborator concern: the exporter only
//! consumes [`RegionCapture`], and a missing capture source is reported to
//! the caller, never swallowed.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use image::GenericImageView;

use crate::error::{Error, Result};

/// A captured raster of the report region, normalized to 8-bit RGB PNG.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pub png: Vec<u8>,
    /// Pixel dimensions at the capture's nominal 96 dpi.
    pub width: u32,
    pub height: u32,
}

impl CapturedImage {
    /// Normalize arbitrary PNG input to 8-bit RGB, flattening any alpha
    /// channel, which is the form the document embedder accepts.
    pub fn from_png_bytes(png: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(png)
            .map_err(|err| Error::capture(format!("captura PNG inválida: {err}")))?;
        let (width, height) = decoded.dimensions();

        let mut saida = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(decoded.to_rgb8())
            .write_to(&mut saida, image::ImageFormat::Png)
            .map_err(|err| Error::capture(format!("falha ao normalizar captura: {err}")))?;

        Ok(Self {
            png: saida.into_inner(),
            width,
            height,
        })
    }
}

/// Source of the rendered report region as a raster image.
pub trait RegionCapture {
    fn capture(&self) -> Result<CapturedImage>;
}

/// Capture backed by a PNG file, e.g. a screenshot of the rendered report.
#[derive(Debug, Clone)]
pub struct PngFileCapture {
    path: PathBuf,
}

impl PngFileCapture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RegionCapture for PngFileCapture {
    fn capture(&self) -> Result<CapturedImage> {
        let bytes = fs::read(&self.path).map_err(|err| {
            Error::capture(format!(
                "região do relatório não encontrada em {}: {err}",
                self.path.display()
            ))
        })?;
        CapturedImage::from_png_bytes(&bytes)
    }
}
