#[derive(Debug, thiserror::Error)]
pub enum CrawlerError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid catalog index: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("Catalog has {available} course urls, {required} required")]
    InsufficientData { available: usize, required: usize },

    #[error("Missing {field} on {url}")]
    RequiredFieldMissing { field: &'static str, url: String },

    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}
