use textporter_core::dialogue::ExtractionReport;
use textporter_core::model::StyleRecord;
use textporter_core::styles::StyleStore;

pub fn print_extraction(report: &ExtractionReport, store: &StyleStore) {
    println!(
        "=== {} dialogue line(s) on {} page(s) ===\n",
        report.dialogue_count(),
        report.pages.len()
    );

    for page in &report.pages {
        if page.lines.is_empty() {
            continue;
        }
        println!("  Page {}", page.page_number);
        let max_name = page
            .lines
            .iter()
            .map(|l| l.speaker.chars().count())
            .max()
            .unwrap_or(10);
        for line in &page.lines {
            println!("    {:<width$}  {}", line.speaker, line.text, width = max_name);
        }
        println!();
    }

    if !report.new_speakers.is_empty() {
        println!("  New speakers: {}\n", report.new_speakers.join(", "));
    }

    if !report.failed_pages.is_empty() {
        let failed: Vec<String> = report.failed_pages.iter().map(|p| p.to_string()).collect();
        println!("  Pages without text: {}\n", failed.join(", "));
    }

    print_styles(store, true);
}

pub fn print_styles(store: &StyleStore, include_default: bool) {
    let speakers = store.list_speakers(include_default);
    if speakers.is_empty() {
        println!("  (no speakers)");
        return;
    }

    let max_name = speakers
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(10)
        .max("Speaker".len());
    let max_font = speakers
        .iter()
        .map(|s| store.get(s).font.chars().count())
        .max()
        .unwrap_or(10)
        .max("Font".len());

    println!(
        "  {:<nw$}  {:<fw$}  {:>4}  {:<11}  Lines",
        "Speaker",
        "Font",
        "Size",
        "Color",
        nw = max_name,
        fw = max_font
    );
    println!("  {}", "-".repeat(max_name + max_font + 4 + 11 + 15));

    for speaker in speakers {
        let style = store.get(speaker);
        println!(
            "  {:<nw$}  {:<fw$}  {:>4}  {:<11}  {}",
            speaker,
            style.font,
            style.size,
            style.color.to_string(),
            style.dialogue_lines.len(),
            nw = max_name,
            fw = max_font
        );
    }
}

pub fn print_style(speaker: &str, style: &StyleRecord) {
    println!("{speaker}");
    println!("  font:  {}", style.font);
    println!("  size:  {}", style.size);
    println!("  color: {}", style.color);
    if !style.dialogue_lines.is_empty() {
        println!("  dialogue:");
        for line in &style.dialogue_lines {
            println!("    {line}");
        }
    }
}
