//! Services module

pub mod capture;
pub mod excel;
pub mod pdf;
pub mod relatorio;
pub mod render;

pub use capture::{CapturedImage, PngFileCapture, RegionCapture};
pub use excel::ExcelClosingGenerator;
pub use pdf::PdfClosingGenerator;
pub use relatorio::{
    filter_activities, monthly_closing, obras_para_selecao, FechamentoMes, GrupoObra, ReportView,
    TotaisMes,
};
pub use render::SvgReportRenderer;
