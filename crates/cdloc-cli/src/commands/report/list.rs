//! Ad-hoc activity list
//!
//! The default mode of the report view: released activities, filtered and
//! sorted most recent first.

use anyhow::Result;

use super::helpers::load_view;
use super::types::AtividadeRow;
use crate::commands::Context;
use crate::output::{print_info, print_output};

pub fn show_list(
    ctx: &Context,
    construtora: Option<String>,
    obra: Option<String>,
    inicio: Option<String>,
    fim: Option<String>,
) -> Result<()> {
    let mut view = load_view(ctx);
    view.set_construtora(construtora);
    view.set_obra(obra);
    view.set_periodo(inicio, fim);

    let atividades = view.lista();
    if atividades.is_empty() {
        print_info("Nenhuma atividade liberada para os filtros.", ctx.quiet);
        return Ok(());
    }

    let rows: Vec<AtividadeRow> = atividades
        .iter()
        .map(|a| AtividadeRow {
            liberado: cdloc_core::formatar_data(a.data_liberacao.as_deref()),
            servico: a.servico.clone(),
            equipamento: match a.tamanho {
                // The size tag only means anything for a Balancinho.
                Some(tamanho) if a.equipamento == "Balancinho" => {
                    format!("{} [{}m]", a.equipamento, tamanho)
                }
                _ => a.equipamento.clone(),
            },
            construtora: a.construtora.clone(),
            obra: a.obra.clone(),
        })
        .collect();

    print_output(&rows, ctx.format)?;
    Ok(())
}
