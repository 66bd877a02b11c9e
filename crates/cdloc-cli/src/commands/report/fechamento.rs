//! Monthly closing display
//!
//! Prints the closing region the exporters capture: the summary card with
//! tallies per equipment kind and service, then one card per site group.

use anyhow::Result;
use cdloc_core::{formatar_data, rotulo_mes, Equipamento, ORG_NAME};
use colored::Colorize;

use super::helpers::{load_view, resolve_mes};
use crate::commands::Context;
use crate::output::{print_info, OutputFormat};

pub fn show_fechamento(ctx: &Context, mes: Option<String>) -> Result<()> {
    let mes = resolve_mes(mes)?;

    let mut view = load_view(ctx);
    view.toggle_mode();
    view.select_mes(mes.clone());
    let fechamento = view.fechamento()?;

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&fechamento)?);
        return Ok(());
    }

    print_info(
        &format!("Fechamento do mês {}", rotulo_mes(&mes)),
        ctx.quiet,
    );
    println!("{}", ORG_NAME.bold());

    for equipamento in Equipamento::ALL {
        let servicos = fechamento.totais.servicos(equipamento);
        if servicos.is_empty() {
            continue;
        }
        println!("{}:", equipamento.as_str());
        for (servico, contagem) in servicos {
            println!("  {servico}: {contagem}");
        }
        println!("  Total: {}", fechamento.totais.total(equipamento));
    }
    println!("TOTAL GERAL: {}", fechamento.totais.total_geral());

    for grupo in &fechamento.grupos {
        println!();
        println!("🏗️  {}", grupo.chave.bold());
        for equipamento in Equipamento::ALL {
            let atividades = grupo.atividades(equipamento);
            if atividades.is_empty() {
                continue;
            }
            println!("{}:", equipamento.as_str());
            for atividade in atividades {
                println!(
                    "  {} — Data {}",
                    atividade.servico.to_uppercase(),
                    formatar_data(atividade.data_liberacao.as_deref())
                );
            }
        }
    }

    Ok(())
}
