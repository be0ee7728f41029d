use textporter_core::error::TextporterError;
use textporter_core::styles::{snapshot, StyleStore};

pub fn print(store: &StyleStore) -> Result<(), TextporterError> {
    let json = snapshot::to_snapshot_string(store)?;
    println!("{json}");
    Ok(())
}
