//! Filter/aggregate engine for the services report
//!
//! Two independent views over the loaded activity snapshot: the ad-hoc
//! filtered list and the monthly closing. Both are pure functions and are
//! recomputed on every call; nothing here touches the store.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Error, Result};
use crate::models::{
    Atividade, Construtora, Equipamento, Obra, ReportFilters, ReportMode, ReportState,
    SERVICO_MANUTENCAO,
};
use crate::store::ReportData;
use crate::utils::validar_mes;

/// Ad-hoc filtered list: activities without a release date are dropped, the
/// set criteria are AND-combined, and the result is sorted most recent first.
/// The sort is stable, so equal dates keep their input order.
pub fn filter_activities<'a>(
    atividades: &'a [Atividade],
    filtros: &ReportFilters,
) -> Vec<&'a Atividade> {
    let mut liberadas: Vec<&Atividade> = atividades
        .iter()
        .filter(|a| a.data_liberacao.is_some())
        .filter(|a| matches_filters(a, filtros))
        .collect();

    // ISO dates order lexicographically.
    liberadas.sort_by(|a, b| b.data_liberacao.cmp(&a.data_liberacao));
    liberadas
}

fn matches_filters(atividade: &Atividade, filtros: &ReportFilters) -> bool {
    if let Some(construtora) = filtros.construtora.as_deref() {
        if atividade.construtora != construtora {
            return false;
        }
    }
    if let Some(obra) = filtros.obra.as_deref() {
        if atividade.obra != obra {
            return false;
        }
    }

    let data = atividade.data_liberacao.as_deref().unwrap_or("");
    if let Some(inicio) = filtros.data_inicio.as_deref() {
        if data < inicio {
            return false;
        }
    }
    if let Some(fim) = filtros.data_fim.as_deref() {
        if data > fim {
            return false;
        }
    }

    true
}

/// Site choices for the filter controls, constrained to the selected company
/// when one is active.
pub fn obras_para_selecao<'a>(obras: &'a [Obra], construtora: Option<&str>) -> Vec<&'a Obra> {
    obras
        .iter()
        .filter(|obra| construtora.map_or(true, |c| obra.construtora == c))
        .collect()
}

/// One company/site group of the monthly closing. Holds the month's
/// activities of each known equipment kind, date-ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct GrupoObra {
    /// Composite key: `{construtora} - {obra}`.
    pub chave: String,
    equipamentos: [Vec<Atividade>; Equipamento::ALL.len()],
}

impl GrupoObra {
    fn new(chave: String) -> Self {
        Self {
            chave,
            equipamentos: Default::default(),
        }
    }

    pub fn atividades(&self, equipamento: Equipamento) -> &[Atividade] {
        &self.equipamentos[equipamento.index()]
    }

    /// Total number of activities in the group, across every kind.
    pub fn len(&self) -> usize {
        self.equipamentos.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for GrupoObra {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + Equipamento::ALL.len()))?;
        map.serialize_entry("chave", &self.chave)?;
        for equipamento in Equipamento::ALL {
            map.serialize_entry(equipamento.as_str(), self.atividades(equipamento))?;
        }
        map.end()
    }
}

/// Service tallies of the monthly closing, per equipment kind. The per-kind
/// totals and the grand total are computed sums, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TotaisMes {
    contagens: [BTreeMap<String, usize>; Equipamento::ALL.len()],
}

impl TotaisMes {
    pub fn servicos(&self, equipamento: Equipamento) -> &BTreeMap<String, usize> {
        &self.contagens[equipamento.index()]
    }

    /// Total for one equipment kind.
    pub fn total(&self, equipamento: Equipamento) -> usize {
        self.servicos(equipamento).values().sum()
    }

    /// Grand total across every kind and service.
    pub fn total_geral(&self) -> usize {
        Equipamento::ALL.iter().map(|eq| self.total(*eq)).sum()
    }

    fn registrar(&mut self, equipamento: Equipamento, servico: &str) {
        *self.contagens[equipamento.index()]
            .entry(servico.to_string())
            .or_insert(0) += 1;
    }
}

impl Serialize for TotaisMes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Equipamento::ALL.len()))?;
        for equipamento in Equipamento::ALL {
            map.serialize_entry(equipamento.as_str(), self.servicos(equipamento))?;
        }
        map.end()
    }
}

/// The month-scoped closing report.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FechamentoMes {
    /// Selected month, `YYYY-MM`.
    pub mes: String,
    /// Groups in first-encounter order.
    pub grupos: Vec<GrupoObra>,
    pub totais: TotaisMes,
}

/// Build the monthly closing for `mes` (`YYYY-MM`).
///
/// Keeps activities released in that month whose service is not the
/// maintenance category, groups them per company/site pair and tallies
/// services per equipment kind. An unknown equipment kind aborts with a
/// validation error instead of corrupting the grouping.
pub fn monthly_closing(atividades: &[Atividade], mes: &str) -> Result<FechamentoMes> {
    validar_mes(mes)?;

    let mut grupos: Vec<GrupoObra> = Vec::new();
    let mut totais = TotaisMes::default();

    for atividade in atividades {
        match atividade.data_liberacao.as_deref() {
            Some(data) if data.starts_with(mes) => {}
            _ => continue,
        }
        if atividade.servico == SERVICO_MANUTENCAO {
            continue;
        }

        let equipamento = Equipamento::parse(&atividade.equipamento)?;
        let chave = format!("{} - {}", atividade.construtora, atividade.obra);

        let indice = match grupos.iter().position(|g| g.chave == chave) {
            Some(indice) => indice,
            None => {
                grupos.push(GrupoObra::new(chave));
                grupos.len() - 1
            }
        };

        grupos[indice].equipamentos[equipamento.index()].push(atividade.clone());
        totais.registrar(equipamento, &atividade.servico);
    }

    // Each kind's sequence renders oldest first inside a group.
    for grupo in &mut grupos {
        for lista in &mut grupo.equipamentos {
            lista.sort_by(|a, b| a.data_liberacao.cmp(&b.data_liberacao));
        }
    }

    Ok(FechamentoMes {
        mes: mes.to_string(),
        grupos,
        totais,
    })
}

/// The report view: an immutable data snapshot plus the explicit view state.
///
/// Queries are pure over the snapshot; only the controller methods below
/// mutate the state, and none of them touch the loaded collections.
#[derive(Debug, Clone, Default)]
pub struct ReportView {
    data: ReportData,
    state: ReportState,
}

impl ReportView {
    pub fn new(data: ReportData) -> Self {
        Self {
            data,
            state: ReportState::default(),
        }
    }

    pub fn data(&self) -> &ReportData {
        &self.data
    }

    pub fn state(&self) -> &ReportState {
        &self.state
    }

    /// Switch between the ad-hoc list and the monthly closing.
    pub fn toggle_mode(&mut self) {
        self.state.modo = match self.state.modo {
            ReportMode::Lista => ReportMode::FechamentoMes,
            ReportMode::FechamentoMes => ReportMode::Lista,
        };
    }

    /// Set the company filter. Changing the company resets the site filter,
    /// since site choices are constrained to the selected company.
    pub fn set_construtora(&mut self, construtora: Option<String>) {
        self.state.filtros.construtora = construtora;
        self.state.filtros.obra = None;
    }

    pub fn set_obra(&mut self, obra: Option<String>) {
        self.state.filtros.obra = obra;
    }

    pub fn set_periodo(&mut self, inicio: Option<String>, fim: Option<String>) {
        self.state.filtros.data_inicio = inicio;
        self.state.filtros.data_fim = fim;
    }

    pub fn select_mes(&mut self, mes: impl Into<String>) {
        self.state.mes = Some(mes.into());
    }

    /// Ad-hoc list for the current filters.
    pub fn lista(&self) -> Vec<&Atividade> {
        filter_activities(&self.data.atividades, &self.state.filtros)
    }

    /// Monthly closing for the selected month.
    pub fn fechamento(&self) -> Result<FechamentoMes> {
        let mes = self
            .state
            .mes
            .as_deref()
            .ok_or_else(|| Error::validation("nenhum mês selecionado"))?;
        monthly_closing(&self.data.atividades, mes)
    }

    pub fn construtoras(&self) -> &[Construtora] {
        &self.data.construtoras
    }

    /// Site choices for the current company filter.
    pub fn obras(&self) -> Vec<&Obra> {
        obras_para_selecao(&self.data.obras, self.state.filtros.construtora.as_deref())
    }
}
