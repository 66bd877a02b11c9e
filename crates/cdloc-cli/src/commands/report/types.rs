//! Report types
//!
//! Types for report commands.

use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

#[derive(Subcommand)]
pub enum ReportAction {
    /// List released activities with optional filters
    List {
        /// Only activities of this company
        #[arg(long)]
        construtora: Option<String>,

        /// Only activities of this site
        #[arg(long)]
        obra: Option<String>,

        /// Only activities released on or after this date (YYYY-MM-DD)
        #[arg(long)]
        inicio: Option<String>,

        /// Only activities released on or before this date (YYYY-MM-DD)
        #[arg(long)]
        fim: Option<String>,
    },

    /// Show the monthly closing report
    Fechamento {
        /// Report month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        mes: Option<String>,
    },

    /// Export the monthly closing to a spreadsheet
    Excel {
        /// Report month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        mes: Option<String>,

        /// Output file path (default: report title with .xlsx)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Export the monthly closing to a PDF document
    Pdf {
        /// Report month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        mes: Option<String>,

        /// PNG capture of the rendered report region (default: internal renderer)
        #[arg(long)]
        captura: Option<String>,

        /// Output file path (default: report title with .pdf)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Activity row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct AtividadeRow {
    #[tabled(rename = "Liberado")]
    pub liberado: String,
    #[tabled(rename = "Serviço")]
    pub servico: String,
    #[tabled(rename = "Equipamento")]
    pub equipamento: String,
    #[tabled(rename = "Construtora")]
    pub construtora: String,
    #[tabled(rename = "Obra")]
    pub obra: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atividade_row_serialization() {
        let row = AtividadeRow {
            liberado: "05/03/2024".to_string(),
            servico: "Montagem".to_string(),
            equipamento: "Balancinho [6m]".to_string(),
            construtora: "Alfa".to_string(),
            obra: "Torre Norte".to_string(),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("05/03/2024"));
        assert!(json.contains("Balancinho [6m]"));
    }

    #[test]
    fn test_atividade_row_debug() {
        let row = AtividadeRow {
            liberado: "—".to_string(),
            servico: "Instalação".to_string(),
            equipamento: "Mini Grua".to_string(),
            construtora: "Beta".to_string(),
            obra: "Residencial Sul".to_string(),
        };

        let debug = format!("{:?}", row);
        assert!(debug.contains("Mini Grua"));
    }
}
