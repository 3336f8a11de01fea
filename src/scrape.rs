//! Collection driver: one fetch, one pass over matched fragments, one write.

use crate::diagnose;
use crate::extract;
use crate::output;
use crate::runtime::fetcher::Fetcher;
use crate::targets::ScrapeTarget;
use crate::types::{Legislator, RunOutcome};
use std::path::Path;

/// Run the extractor over every fragment in document order. A fragment that
/// fails to extract is logged and skipped; it never aborts the pass. Only
/// records with a usable name are kept.
pub fn extract_all(fragments: &[String], target: &ScrapeTarget) -> Vec<Legislator> {
    let mut records = Vec::new();

    for fragment in fragments {
        match extract::extract_record(fragment, &target.url, target) {
            Ok(record) if record.has_name() => {
                tracing::info!(
                    "[{}] {} - {} - {}",
                    records.len() + 1,
                    record.name,
                    record.party.as_deref().unwrap_or("?"),
                    record.position.as_deref().unwrap_or("?"),
                );
                records.push(record);
            }
            Ok(_) => {
                tracing::debug!("Skipping entry without a usable name");
            }
            Err(err) => {
                tracing::warn!("Error parsing entry: {err}");
            }
        }
    }

    records
}

/// Pure counterpart of [`run`] for already-fetched HTML: select fragments
/// and extract records, with no diagnostics and no file output.
pub fn collect_from_html(html: &str, target: &ScrapeTarget) -> Result<Vec<Legislator>, String> {
    let dom = extract::parse_dom(html)?;
    let parser = dom.parser();
    let fragments = extract::select_fragments(&dom, parser, &target.list);
    Ok(extract_all(&fragments, target))
}

/// One full scrape: fetch the page, enumerate fragments, extract records,
/// and write the JSON output. Every failure mode is folded into the
/// returned [`RunOutcome`]; nothing propagates.
pub async fn run(fetcher: &dyn Fetcher, target: &ScrapeTarget) -> RunOutcome {
    tracing::info!("Connecting to: {}", target.url);

    let html = match fetcher.fetch(&target.url).await {
        Ok(html) => html,
        Err(reason) => {
            tracing::error!("Error connecting to website: {reason}");
            return RunOutcome::FetchFailed { reason };
        }
    };

    let dom = match extract::parse_dom(&html) {
        Ok(dom) => dom,
        Err(reason) => {
            tracing::error!("{reason}");
            return RunOutcome::FetchFailed { reason };
        }
    };
    let parser = dom.parser();

    tracing::info!("Page loaded successfully");
    if let Some(title) = extract::page_title(&dom, parser) {
        tracing::info!("Page title: {title}");
    }

    let fragments = extract::select_fragments(&dom, parser, &target.list);
    if fragments.is_empty() {
        tracing::warn!("No elements matched {}", target.list.describe());
        diagnose::report(&dom, parser, target);
        return RunOutcome::NoMatches;
    }
    tracing::info!("Found {} candidate entries", fragments.len());

    let records = extract_all(&fragments, target);
    tracing::info!("Total records scraped: {}", records.len());

    if records.is_empty() {
        tracing::warn!("No entry yielded a usable name; not writing output");
        return RunOutcome::NoMatches;
    }

    match output::write_records(&records, Path::new(&target.output_path)) {
        Ok(()) => RunOutcome::Completed {
            count: records.len(),
        },
        Err(reason) => {
            tracing::error!("Error saving JSON: {reason}");
            RunOutcome::WriteFailed { reason }
        }
    }
}
