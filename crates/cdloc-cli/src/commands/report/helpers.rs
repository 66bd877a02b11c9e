//! Report helper functions
//!
//! Shared utilities for report commands.

use anyhow::Result;
use cdloc_core::{ReportData, ReportView};

use crate::commands::Context;

/// Resolve the report month: an explicit `YYYY-MM` value or the current month.
pub fn resolve_mes(mes: Option<String>) -> Result<String> {
    let mes = match mes {
        Some(m) => m,
        None => chrono::Local::now().format("%Y-%m").to_string(),
    };
    cdloc_core::validar_mes(&mes)?;
    Ok(mes)
}

/// Load the store snapshot for this invocation and wrap it in a view.
pub fn load_view(ctx: &Context) -> ReportView {
    ReportView::new(ReportData::load(&ctx.store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mes_explicit() {
        assert_eq!(resolve_mes(Some("2024-03".to_string())).unwrap(), "2024-03");
    }

    #[test]
    fn test_resolve_mes_defaults_to_current_month() {
        let mes = resolve_mes(None).unwrap();
        assert_eq!(mes, chrono::Local::now().format("%Y-%m").to_string());
    }

    #[test]
    fn test_resolve_mes_invalid() {
        assert!(resolve_mes(Some("2024-3".to_string())).is_err());
        assert!(resolve_mes(Some("03/2024".to_string())).is_err());
    }

    #[test]
    fn test_resolve_mes_error_names_format() {
        let err = resolve_mes(Some("ontem".to_string())).unwrap_err();
        assert!(err.to_string().contains("YYYY-MM"));
    }
}
