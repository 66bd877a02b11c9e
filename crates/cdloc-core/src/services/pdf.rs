//! PDF export of the monthly closing
//!
//! Builds a single page sized to the captured report image plus a header
//! band carrying the organization name and the report title. The image comes
//! from a [`RegionCapture`] collaborator; this generator never looks at the
//! report data itself.

use std::io::Cursor;
use std::path::Path;

use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument};

use crate::error::{Error, Result};
use crate::services::capture::RegionCapture;
use crate::utils::titulo_fechamento;

/// Header band height in px, at the capture's nominal resolution.
const CABECALHO_PX: f64 = 60.0;
const DPI: f64 = 96.0;
/// Left margin of the header lines, in px.
const MARGEM_PX: f64 = 24.0;

fn px_para_mm(px: f64) -> f64 {
    px * 25.4 / DPI
}

/// PDF generator for the monthly closing document.
pub struct PdfClosingGenerator {
    org_name: String,
}

impl PdfClosingGenerator {
    pub fn new(org_name: impl Into<String>) -> Self {
        Self {
            org_name: org_name.into(),
        }
    }

    /// Build the document for `mes` (`YYYY-MM`): two header lines, then the
    /// captured report region below them.
    pub fn create_closing_document(
        &self,
        capture: &dyn RegionCapture,
        mes: &str,
    ) -> Result<Vec<u8>> {
        let imagem = capture.capture()?;
        let titulo = titulo_fechamento(mes);

        let largura = px_para_mm(imagem.width as f64);
        let altura = px_para_mm(imagem.height as f64 + CABECALHO_PX);

        let (doc, pagina, camada) =
            PdfDocument::new(titulo.as_str(), Mm(largura as f32), Mm(altura as f32), "Relatório");
        let layer = doc.get_page(pagina).get_layer(camada);

        let fonte_titulo = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|err| Error::export(format!("fonte indisponível: {err}")))?;
        let fonte_texto = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|err| Error::export(format!("fonte indisponível: {err}")))?;

        // Header lines sit 30 px and 50 px below the top edge; PDF
        // coordinates grow upward from the bottom-left corner.
        layer.use_text(
            self.org_name.as_str(),
            16.0,
            Mm(px_para_mm(MARGEM_PX) as f32),
            Mm((altura - px_para_mm(30.0)) as f32),
            &fonte_titulo,
        );
        layer.use_text(
            titulo.as_str(),
            12.0,
            Mm(px_para_mm(MARGEM_PX) as f32),
            Mm((altura - px_para_mm(50.0)) as f32),
            &fonte_texto,
        );

        let decoder = PngDecoder::new(Cursor::new(imagem.png.as_slice()))
            .map_err(|err| Error::export(format!("captura PNG inválida: {err}")))?;
        let embutida = Image::try_from(decoder)
            .map_err(|err| Error::export(format!("captura não suportada: {err}")))?;
        embutida.add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(0.0)),
                translate_y: Some(Mm(0.0)),
                dpi: Some(DPI as f32),
                ..Default::default()
            },
        );

        doc.save_to_bytes()
            .map_err(|err| Error::export(format!("falha ao gravar PDF: {err}")))
    }

    /// Build the document and write it to `path`.
    pub fn save<P: AsRef<Path>>(
        &self,
        capture: &dyn RegionCapture,
        mes: &str,
        path: P,
    ) -> Result<()> {
        let bytes = self.create_closing_document(capture, mes)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::capture::CapturedImage;

    /// Fixed-image capture stub standing in for the rendered report region.
    struct CapturaFixa(CapturedImage);

    impl RegionCapture for CapturaFixa {
        fn capture(&self) -> Result<CapturedImage> {
            Ok(self.0.clone())
        }
    }

    struct CapturaAusente;

    impl RegionCapture for CapturaAusente {
        fn capture(&self) -> Result<CapturedImage> {
            Err(Error::capture("região do relatório não encontrada"))
        }
    }

    fn captura_de_teste() -> CapturaFixa {
        let imagem = image::RgbImage::from_pixel(8, 8, image::Rgb([200, 200, 200]));
        let mut png = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(imagem)
            .write_to(&mut png, image::ImageFormat::Png)
            .unwrap();
        CapturaFixa(CapturedImage::from_png_bytes(&png.into_inner()).unwrap())
    }

    #[test]
    fn test_create_closing_document() {
        let generator = PdfClosingGenerator::new("CD LOCAÇÕES");
        let bytes = generator
            .create_closing_document(&captura_de_teste(), "2024-03")
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let caminho = dir.path().join("fechamento.pdf");

        let generator = PdfClosingGenerator::new("CD LOCAÇÕES");
        generator
            .save(&captura_de_teste(), "2024-03", &caminho)
            .unwrap();

        assert!(std::fs::metadata(&caminho).unwrap().len() > 0);
    }

    #[test]
    fn test_missing_capture_aborts_with_error() {
        let generator = PdfClosingGenerator::new("CD LOCAÇÕES");
        let err = generator
            .create_closing_document(&CapturaAusente, "2024-03")
            .unwrap_err();

        assert!(matches!(err, Error::Capture(_)));
    }
}
