//! Reference data commands
//!
//! Companies and sites backing the report filter choices.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use cdloc_core::{obras_para_selecao, ReportData};

use crate::commands::Context;
use crate::output::{print_info, print_output};

#[derive(Subcommand)]
pub enum DataAction {
    /// List building companies
    Construtoras,

    /// List construction sites, optionally only those of one company
    Obras {
        /// Only sites owned by this company
        #[arg(long)]
        construtora: Option<String>,
    },
}

/// Company row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ConstrutoraRow {
    #[tabled(rename = "Construtora")]
    pub nome: String,
}

/// Site row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ObraRow {
    #[tabled(rename = "Obra")]
    pub nome: String,
    #[tabled(rename = "Construtora")]
    pub construtora: String,
}

pub fn execute(ctx: &Context, action: DataAction) -> Result<()> {
    let data = ReportData::load(&ctx.store);

    match action {
        DataAction::Construtoras => {
            let rows: Vec<ConstrutoraRow> = data
                .construtoras
                .iter()
                .map(|c| ConstrutoraRow {
                    nome: c.nome.clone(),
                })
                .collect();

            if rows.is_empty() {
                print_info("Nenhuma construtora cadastrada.", ctx.quiet);
                return Ok(());
            }
            print_output(&rows, ctx.format)
        }
        DataAction::Obras { construtora } => {
            let obras = obras_para_selecao(&data.obras, construtora.as_deref());
            let rows: Vec<ObraRow> = obras
                .iter()
                .map(|o| ObraRow {
                    nome: o.nome.clone(),
                    construtora: o.construtora.clone(),
                })
                .collect();

            if rows.is_empty() {
                print_info("Nenhuma obra cadastrada.", ctx.quiet);
                return Ok(());
            }
            print_output(&rows, ctx.format)
        }
    }
}
