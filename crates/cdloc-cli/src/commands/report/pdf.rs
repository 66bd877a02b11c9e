//! Document (PDF) export command
//!
//! Export the monthly closing as a document embedding a raster capture of
//! the report region. The capture comes from a user-supplied screenshot or,
//! by default, from the internal renderer.

use anyhow::Result;
use cdloc_core::{
    nome_arquivo_fechamento, rotulo_mes, PdfClosingGenerator, PngFileCapture, RegionCapture,
    SvgReportRenderer, ORG_NAME,
};

use super::helpers::{load_view, resolve_mes};
use crate::commands::Context;
use crate::output::{print_info, print_success};

pub fn export_pdf(
    ctx: &Context,
    mes: Option<String>,
    captura: Option<String>,
    output: Option<String>,
) -> Result<()> {
    let mes = resolve_mes(mes)?;

    print_info(
        &format!("Gerando fechamento do mês {}", rotulo_mes(&mes)),
        ctx.quiet,
    );

    let mut view = load_view(ctx);
    view.toggle_mode();
    view.select_mes(mes.clone());
    let fechamento = view.fechamento()?;

    if fechamento.grupos.is_empty() {
        print_info("Nenhuma atividade no mês selecionado.", ctx.quiet);
        return Ok(());
    }

    let output = output.unwrap_or_else(|| nome_arquivo_fechamento(&mes, "pdf"));

    let capture: Box<dyn RegionCapture> = match captura {
        Some(caminho) => Box::new(PngFileCapture::new(
            shellexpand::tilde(&caminho).into_owned(),
        )),
        None => Box::new(SvgReportRenderer::new(fechamento, ORG_NAME)),
    };

    let generator = PdfClosingGenerator::new(ORG_NAME);
    generator.save(capture.as_ref(), &mes, &output)?;

    print_success(&format!("Documento exportado para {output}"), ctx.quiet);
    Ok(())
}
