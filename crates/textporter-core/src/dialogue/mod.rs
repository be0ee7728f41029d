pub mod classify;
pub mod extract;

pub use classify::classify;
pub use extract::{extract, ExtractionReport, PageDialogues};
