//! Report commands
//!
//! The services report view: ad-hoc list, monthly closing and its exports.

mod excel;
mod fechamento;
mod helpers;
mod list;
mod pdf;
mod types;

use anyhow::Result;

use crate::commands::Context;

// Re-export public types
pub use types::{AtividadeRow, ReportAction};

pub fn execute(ctx: &Context, action: ReportAction) -> Result<()> {
    match action {
        ReportAction::List {
            construtora,
            obra,
            inicio,
            fim,
        } => list::show_list(ctx, construtora, obra, inicio, fim),
        ReportAction::Fechamento { mes } => fechamento::show_fechamento(ctx, mes),
        ReportAction::Excel { mes, output } => excel::export_excel(ctx, mes, output),
        ReportAction::Pdf {
            mes,
            captura,
            output,
        } => pdf::export_pdf(ctx, mes, captura, output),
    }
}
