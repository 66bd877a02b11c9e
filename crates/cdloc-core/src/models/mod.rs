//! Data models for the services report
//!
//! The record shapes mirror the JSON documents maintained by the rest of the
//! application, so field names stay in the store's Portuguese vocabulary.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Service label excluded from the monthly closing report.
pub const SERVICO_MANUTENCAO: &str = "Manutenção";

/// Closed set of rentable equipment kinds.
///
/// The store keeps the kind as free text; parsing happens when an activity
/// enters the monthly grouping, and unknown labels are rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equipamento {
    Balancinho,
    #[serde(rename = "Mini Grua")]
    MiniGrua,
}

impl Equipamento {
    /// Every known kind, in the fixed order reports iterate them.
    pub const ALL: [Equipamento; 2] = [Equipamento::Balancinho, Equipamento::MiniGrua];

    pub fn as_str(&self) -> &'static str {
        match self {
            Equipamento::Balancinho => "Balancinho",
            Equipamento::MiniGrua => "Mini Grua",
        }
    }

    /// Parse a stored kind label.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Balancinho" => Ok(Equipamento::Balancinho),
            "Mini Grua" => Ok(Equipamento::MiniGrua),
            other => Err(Error::validation(format!(
                "equipamento desconhecido: {other:?}"
            ))),
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Equipamento {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded equipment-rental/service event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atividade {
    pub id: String,
    /// Client company name.
    pub construtora: String,
    /// Construction site name.
    pub obra: String,
    /// Equipment kind label; validated against [`Equipamento`] when grouping.
    pub equipamento: String,
    pub servico: String,
    /// Platform size in metres, meaningful only for Balancinho.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tamanho: Option<f64>,
    /// Release date, ISO `YYYY-MM-DD`. Activities without one appear in no view.
    #[serde(rename = "dataLiberacao", skip_serializing_if = "Option::is_none")]
    pub data_liberacao: Option<String>,
}

/// Client building company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Construtora {
    pub id: String,
    pub nome: String,
}

/// Construction site. `construtora` is the owning company's name, kept
/// denormalized exactly as the store has it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obra {
    pub id: String,
    pub nome: String,
    pub construtora: String,
}

/// Ad-hoc list filter criteria. All set fields are AND-combined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilters {
    pub construtora: Option<String>,
    pub obra: Option<String>,
    /// Inclusive lower bound on the release date (`YYYY-MM-DD`).
    pub data_inicio: Option<String>,
    /// Inclusive upper bound on the release date (`YYYY-MM-DD`).
    pub data_fim: Option<String>,
}

impl ReportFilters {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.construtora.is_none()
            && self.obra.is_none()
            && self.data_inicio.is_none()
            && self.data_fim.is_none()
    }
}

/// The two mutually exclusive display modes of the report view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportMode {
    #[default]
    Lista,
    FechamentoMes,
}

/// Explicit view state: filters, display mode and selected closing month.
/// Mutated only through `ReportView`; the engine functions are pure over it.
#[derive(Debug, Clone, Default)]
pub struct ReportState {
    pub filtros: ReportFilters,
    pub modo: ReportMode,
    /// Selected closing month, `YYYY-MM`.
    pub mes: Option<String>,
}
