//! Zero-match diagnostics. When the primary selector finds nothing, report
//! how the target's alternative selectors fare plus coarse structural counts,
//! to aid manual investigation. Observational only; produces no data output.

use crate::extract::{count_matches, count_tags};
use crate::targets::ScrapeTarget;
use tl::{Parser, VDom};

pub fn report(dom: &VDom<'_>, parser: &Parser<'_>, target: &ScrapeTarget) {
    tracing::warn!("Checking alternative selectors:");
    for probe in &target.probes {
        let count = count_matches(dom, parser, probe);
        if count > 0 {
            tracing::warn!("  ok  {} : {} elements", probe.describe(), count);
        } else {
            tracing::warn!("  --  {} : 0 elements", probe.describe());
        }
    }

    tracing::warn!("Page structure:");
    tracing::warn!("  total divs: {}", count_tags(dom, "div"));
    tracing::warn!("  total links: {}", count_tags(dom, "a"));
    tracing::warn!("  total images: {}", count_tags(dom, "img"));
}
