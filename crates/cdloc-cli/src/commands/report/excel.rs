//! Spreadsheet export command
//!
//! Export the monthly closing to an Excel workbook.

use anyhow::Result;
use cdloc_core::{nome_arquivo_fechamento, rotulo_mes, ExcelClosingGenerator};

use super::helpers::{load_view, resolve_mes};
use crate::commands::Context;
use crate::output::{print_info, print_success};

pub fn export_excel(ctx: &Context, mes: Option<String>, output: Option<String>) -> Result<()> {
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

    let output = output.unwrap_or_else(|| nome_arquivo_fechamento(&mes, "xlsx"));

    let mut generator = ExcelClosingGenerator::new();
    generator.create_closing_sheet(&fechamento)?;
    generator.save(&output)?;

    print_success(&format!("Fechamento exportado para {output}"), ctx.quiet);
    Ok(())
}
