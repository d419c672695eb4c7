use crate::{coursera::CourseInfoTable, CrawlerError};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::info;

pub const HEADER: [&str; 5] = ["Name", "Language", "Start date", "Number of weeks", "Rate"];

/// Writes the table to a single-sheet workbook at `path`, replacing any existing file.
///
/// Row 0 is [`HEADER`], then one row per record in table order. Absent fields
/// leave their cell empty.
pub fn write_xlsx<P: AsRef<Path>>(path: P, table: &CourseInfoTable) -> Result<(), CrawlerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, title) in (0u16..).zip(HEADER) {
        worksheet.write_string(0, col, title)?;
    }

    for (row, record) in (1u32..).zip(table) {
        worksheet.write_string(row, 0, &record.name)?;
        worksheet.write_string(row, 1, &record.language)?;
        if let Some(start_date) = &record.start_date {
            worksheet.write_string(row, 2, start_date)?;
        }
        worksheet.write_number(row, 3, record.week_count as f64)?;
        if let Some(rate) = &record.rate {
            worksheet.write_string(row, 4, rate)?;
        }
    }

    workbook.save(path.as_ref())?;
    info!("Wrote {} courses to {}", table.len(), path.as_ref().display());
    Ok(())
}
