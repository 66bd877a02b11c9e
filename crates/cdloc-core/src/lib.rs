//! # cdloc-core
//!
//! Core reporting logic for CD Locações - shared between the CLI and any
//! future shell.
//!
//! This crate provides:
//! - Store loading (`store` module)
//! - Data models (`models` module)
//! - Filter/aggregate engine and exporters (`services` module)
//! - Unified error handling (`error` module)

pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};
pub use store::{DataStore, ReportData};

// Re-export commonly used types from models
pub use models::{
    Atividade, Construtora, Equipamento, Obra, ReportFilters, ReportMode, ReportState,
    SERVICO_MANUTENCAO,
};

// Re-export commonly used types from services
pub use services::{
    filter_activities, monthly_closing, obras_para_selecao, CapturedImage, ExcelClosingGenerator,
    FechamentoMes, GrupoObra, PdfClosingGenerator, PngFileCapture, RegionCapture, ReportView,
    SvgReportRenderer, TotaisMes,
};

pub use utils::{
    formatar_data, nome_arquivo_fechamento, rotulo_mes, titulo_fechamento, validar_mes,
};

/// Organization name printed on exported documents.
pub const ORG_NAME: &str = "CD LOCAÇÕES";

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
