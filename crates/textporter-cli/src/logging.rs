use tracing_subscriber::fmt;

/// Log to stderr when `verbose` is set; stay silent otherwise.
pub fn init(verbose: bool) {
    if !verbose {
        return;
    }
    let installed = fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init();
    if let Err(e) = installed {
        eprintln!("warning: could not enable logging: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_survives_existing_subscriber() {
        let _ = fmt().with_writer(std::io::sink).try_init();
        init(true);
        init(false);
    }
}
