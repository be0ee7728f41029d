use textporter_core::error::TextporterError;
use textporter_core::pages::PageSelection;

pub fn run(expr: &str) -> Result<(), TextporterError> {
    let pages = PageSelection::from(expr).resolve()?;
    let list: Vec<String> = pages.iter().map(|p| p.to_string()).collect();
    println!("{}", list.join(","));
    Ok(())
}
