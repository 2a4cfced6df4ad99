mod export;
pub mod markdown;

pub use export::write_export;
pub use markdown::MarkdownReport;
