//! Excel export of the monthly closing
//!
//! Generates the closing spreadsheet in the layout the office expects: one
//! "Relatório" sheet, a title row, then per company/site group a separator
//! row, the group name, a column header and one row per activity.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};

use crate::error::Result;
use crate::models::Equipamento;
use crate::services::relatorio::FechamentoMes;
use crate::utils::{formatar_data, titulo_fechamento};

/// Excel generator for the monthly closing report.
pub struct ExcelClosingGenerator {
    workbook: Workbook,
    // Styles
    title_format: Format,
    group_format: Format,
    header_format: Format,
    cell_format: Format,
}

impl ExcelClosingGenerator {
    /// Create a new generator with the report's styles.
    pub fn new() -> Self {
        let workbook = Workbook::new();

        let title_format = Format::new().set_bold().set_font_size(14);

        // Group-name row: light blue band
        let group_format = Format::new()
            .set_bold()
            .set_background_color(Color::RGB(0xB4C6E7))
            .set_border(FormatBorder::Thin);

        // Column header: blue background, white bold text
        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(0x4472C4))
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);

        let cell_format = Format::new().set_border(FormatBorder::Thin);

        Self {
            workbook,
            title_format,
            group_format,
            header_format,
            cell_format,
        }
    }

    /// Write the closing sheet. Equipment kinds iterate in their fixed order
    /// and each kind's activities come date-ascending from the grouping.
    pub fn create_closing_sheet(&mut self, fechamento: &FechamentoMes) -> Result<()> {
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name("Relatório")?;

        worksheet.write_with_format(
            0,
            0,
            titulo_fechamento(&fechamento.mes),
            &self.title_format,
        )?;

        let mut row: u32 = 0;
        for grupo in &fechamento.grupos {
            // Blank separator row before each group.
            row += 2;
            worksheet.write_with_format(row, 0, grupo.chave.as_str(), &self.group_format)?;

            row += 1;
            for (col, header) in ["Data", "Equipamento", "Serviço"].iter().enumerate() {
                worksheet.write_with_format(row, col as u16, *header, &self.header_format)?;
            }

            for equipamento in Equipamento::ALL {
                for atividade in grupo.atividades(equipamento) {
                    row += 1;
                    worksheet.write_with_format(
                        row,
                        0,
                        formatar_data(atividade.data_liberacao.as_deref()),
                        &self.cell_format,
                    )?;
                    worksheet.write_with_format(row, 1, equipamento.as_str(), &self.cell_format)?;
                    worksheet.write_with_format(
                        row,
                        2,
                        atividade.servico.as_str(),
                        &self.cell_format,
                    )?;
                }
            }
        }

        // Column widths
        worksheet.set_column_width(0, 14)?;
        worksheet.set_column_width(1, 16)?;
        worksheet.set_column_width(2, 28)?;

        Ok(())
    }

    /// Save the workbook to a file.
    pub fn save<P: AsRef<Path>>(mut self, path: P) -> Result<()> {
        self.workbook.save(path)?;
        Ok(())
    }

    /// Save the workbook to a byte vector.
    pub fn save_to_buffer(mut self) -> Result<Vec<u8>> {
        let buffer = self.workbook.save_to_buffer()?;
        Ok(buffer)
    }
}

impl Default for ExcelClosingGenerator {
    fn default() -> Self {
        Self::new()
    }
}
