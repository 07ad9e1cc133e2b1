use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use simplify_app::logging::{self, LogDestination};
use simplify_app::{config, FileHostPage, Session};
use simplify_core::{Msg, PageState};
use simplify_logging::simplify_error;

/// Demo host: runs the simplify flow against a saved page and writes the
/// simplified document (undo control included) to stdout.
fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (html_path, page_url) = match (args.next(), args.next()) {
        (Some(path), Some(url)) => (PathBuf::from(path), url),
        _ => {
            eprintln!("Usage: simplify_app <page.html> <page-url> [config.ron]");
            return ExitCode::from(2);
        }
    };
    let config_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILENAME));

    logging::initialize(LogDestination::Terminal);
    let config = config::load(&config_path);

    let outer_html = match std::fs::read_to_string(&html_path) {
        Ok(text) => text,
        Err(err) => {
            simplify_error!("Failed to read {:?}: {}", html_path, err);
            return ExitCode::FAILURE;
        }
    };

    let host = Arc::new(FileHostPage::new(page_url, outer_html));
    let mut session = Session::new(host, &config);
    session.initialize();

    // Prefetch debounce + request timeout, with a little slack for the engine.
    let overall = config.prefetch_delay()
        + Duration::from_secs(config.request_timeout_secs)
        + Duration::from_secs(2);
    let settled = session.run_until(
        |page| matches!(page, PageState::Ready | PageState::FetchFailed),
        overall,
    );

    if !settled || session.page() != PageState::Ready {
        simplify_error!("Cleaning service did not deliver a snapshot");
        return ExitCode::FAILURE;
    }

    // The click writes the replacement document through the host.
    session.dispatch(Msg::ButtonClicked);
    ExitCode::SUCCESS
}
