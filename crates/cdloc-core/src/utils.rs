//! Formatting helpers shared by the report views and exporters.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Format an ISO `YYYY-MM-DD` date as `DD/MM/YYYY`. Absent dates render "—".
pub fn formatar_data(data: Option<&str>) -> String {
    let data = match data {
        None | Some("") => return "—".to_string(),
        Some(d) => d,
    };

    let mut partes = data.splitn(3, '-');
    match (partes.next(), partes.next(), partes.next()) {
        (Some(ano), Some(mes), Some(dia)) => format!("{dia}/{mes}/{ano}"),
        _ => data.to_string(),
    }
}

/// Validate a `YYYY-MM` month selection.
pub fn validar_mes(mes: &str) -> Result<()> {
    let valido = NaiveDate::parse_from_str(&format!("{mes}-01"), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m").to_string() == mes)
        .unwrap_or(false);

    if valido {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "mês inválido: {mes:?}. Use o formato YYYY-MM"
        )))
    }
}

/// Month label used in titles: `YYYY-MM` becomes `MM/YYYY`.
pub fn rotulo_mes(mes: &str) -> String {
    match mes.split_once('-') {
        Some((ano, m)) => format!("{m}/{ano}"),
        None => mes.to_string(),
    }
}

/// Title shared by the closing report and both of its exports.
pub fn titulo_fechamento(mes: &str) -> String {
    format!("Relatório de fechamento do mês {}", rotulo_mes(mes))
}

/// Default output filename for a closing export. The title's `MM/YYYY` label
/// becomes `MM-YYYY` here, since `/` cannot appear in a filename.
pub fn nome_arquivo_fechamento(mes: &str, extensao: &str) -> String {
    format!(
        "Relatório de fechamento do mês {}.{extensao}",
        rotulo_mes(mes).replace('/', "-")
    )
}
