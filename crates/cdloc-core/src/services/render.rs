//! Rendering of the closing-report region to a raster image
//!
//! Lays the closing report out as an SVG document and rasterizes it, so the
//! document export works from a headless CLI. Implements [`RegionCapture`],
//! keeping the PDF generator ignorant of where the pixels come from.

use std::sync::Arc;

use resvg::{tiny_skia, usvg};

use crate::error::{Error, Result};
use crate::models::Equipamento;
use crate::services::capture::{CapturedImage, RegionCapture};
use crate::services::relatorio::FechamentoMes;
use crate::utils::formatar_data;

const LARGURA: u32 = 800;
const ALTURA_LINHA: f32 = 22.0;
const MARGEM: f32 = 24.0;

struct Linha {
    texto: String,
    recuo: f32,
    negrito: bool,
    tamanho: f32,
}

impl Linha {
    fn titulo(texto: impl Into<String>) -> Self {
        Self { texto: texto.into(), recuo: 0.0, negrito: true, tamanho: 18.0 }
    }

    fn secao(texto: impl Into<String>) -> Self {
        Self { texto: texto.into(), recuo: 0.0, negrito: true, tamanho: 14.0 }
    }

    fn item(texto: impl Into<String>) -> Self {
        Self { texto: texto.into(), recuo: 20.0, negrito: false, tamanho: 13.0 }
    }

    fn item_negrito(texto: impl Into<String>) -> Self {
        Self { texto: texto.into(), recuo: 20.0, negrito: true, tamanho: 13.0 }
    }

    fn em_branco() -> Self {
        Self { texto: String::new(), recuo: 0.0, negrito: false, tamanho: 13.0 }
    }
}

/// Renders the closing-report region and captures it as PNG.
pub struct SvgReportRenderer {
    fechamento: FechamentoMes,
    org_name: String,
}

impl SvgReportRenderer {
    pub fn new(fechamento: FechamentoMes, org_name: impl Into<String>) -> Self {
        Self {
            fechamento,
            org_name: org_name.into(),
        }
    }

    /// Lay the report region out as a standalone SVG document: the summary
    /// card (tallies per kind and service, totals) followed by one card per
    /// company/site group.
    pub fn to_svg(&self) -> String {
        let mut linhas: Vec<Linha> = Vec::new();
        let fechamento = &self.fechamento;

        linhas.push(Linha::titulo(self.org_name.as_str()));
        for equipamento in Equipamento::ALL {
            let servicos = fechamento.totais.servicos(equipamento);
            if servicos.is_empty() {
                continue;
            }
            linhas.push(Linha::secao(format!("{}:", equipamento.as_str())));
            for (servico, contagem) in servicos {
                linhas.push(Linha::item(format!("{servico}: {contagem}")));
            }
            linhas.push(Linha::item_negrito(format!(
                "Total: {}",
                fechamento.totais.total(equipamento)
            )));
        }
        linhas.push(Linha::secao(format!(
            "TOTAL GERAL: {}",
            fechamento.totais.total_geral()
        )));

        for grupo in &fechamento.grupos {
            linhas.push(Linha::em_branco());
            linhas.push(Linha::secao(grupo.chave.clone()));
            for equipamento in Equipamento::ALL {
                let atividades = grupo.atividades(equipamento);
                if atividades.is_empty() {
                    continue;
                }
                linhas.push(Linha::secao(format!("{}:", equipamento.as_str())));
                for atividade in atividades {
                    linhas.push(Linha::item(format!(
                        "{} — Data {}",
                        atividade.servico.to_uppercase(),
                        formatar_data(atividade.data_liberacao.as_deref())
                    )));
                }
            }
        }

        let altura = (MARGEM * 2.0 + linhas.len() as f32 * ALTURA_LINHA).ceil() as u32;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{LARGURA}" height="{altura}" viewBox="0 0 {LARGURA} {altura}">"#
        );
        svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);

        let mut y = MARGEM;
        for linha in &linhas {
            y += ALTURA_LINHA;
            if linha.texto.is_empty() {
                continue;
            }
            let peso = if linha.negrito { "bold" } else { "normal" };
            svg.push_str(&format!(
                r#"<text x="{x:.0}" y="{y:.0}" font-family="sans-serif" font-size="{tamanho}" font-weight="{peso}" fill="black">{texto}</text>"#,
                x = MARGEM + linha.recuo,
                tamanho = linha.tamanho,
                texto = escape_xml(&linha.texto),
            ));
        }

        svg.push_str("</svg>");
        svg
    }
}

impl RegionCapture for SvgReportRenderer {
    fn capture(&self) -> Result<CapturedImage> {
        let svg = self.to_svg();

        let mut opcoes = usvg::Options::default();
        // usvg 0.44: fontdb lives inside Options as an Arc<Database>.
        Arc::make_mut(&mut opcoes.fontdb).load_system_fonts();

        let tree = usvg::Tree::from_str(&svg, &opcoes)
            .map_err(|err| Error::render(format!("SVG do relatório inválido: {err}")))?;

        let tamanho = tree.size().to_int_size();
        let mut pixmap = tiny_skia::Pixmap::new(tamanho.width(), tamanho.height())
            .ok_or_else(|| Error::render("dimensões inválidas para o pixmap"))?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let png = pixmap
            .encode_png()
            .map_err(|err| Error::render(format!("falha ao codificar PNG: {err}")))?;
        CapturedImage::from_png_bytes(&png)
    }
}

fn escape_xml(texto: &str) -> String {
    texto
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
