//! Pure extraction logic: no I/O, no shared state. Given the HTML of one
//! roster entry, derive a [`Legislator`] by applying the target's selector
//! rules plus a handful of text-pattern rules over the description line.

use crate::targets::{ElementMatch, FragmentSelector, ScrapeTarget};
use crate::types::Legislator;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tl::{HTMLTag, Parser, VDom};

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DISTRICT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"District\s+([A-Z0-9]+)").unwrap());

// Parenthetical abbreviations are matched case-sensitively, word forms
// case-insensitively, abbreviations first.
const PARTIES: [(&str, &str, &str); 3] = [
    ("(R)", "republican", "Republican"),
    ("(D)", "democrat", "Democrat"),
    ("(I)", "independent", "Independent"),
];

pub fn parse_dom(html: &str) -> Result<VDom<'_>, String> {
    tl::parse(html, tl::ParserOptions::default()).map_err(|e| format!("Failed to parse HTML: {e}"))
}

pub fn normalize_text(input: &str) -> String {
    let normalized = input
        .replace("&nbsp;", " ")
        .replace('\u{00A0}', " ")
        .replace("&amp;", "&")
        .replace("&mdash;", "-")
        .replace("&ndash;", "-");
    WHITESPACE_RE
        .replace_all(normalized.trim(), " ")
        .trim()
        .to_string()
}

/// Resolve an href against the page URL, dropping any fragment.
pub fn resolve_url(base_url: &str, href: &str) -> Result<String, String> {
    if href.starts_with("mailto:") || href.starts_with("tel:") || href.starts_with("javascript:") {
        return Err("Unsupported URL scheme".to_string());
    }
    let base = reqwest::Url::parse(base_url).map_err(|e| format!("Invalid base URL: {e}"))?;
    let mut url = base
        .join(href)
        .map_err(|e| format!("Failed to resolve URL: {e}"))?;
    url.set_fragment(None);
    Ok(url.to_string())
}

fn class_set(tag: &HTMLTag) -> HashSet<String> {
    tag.attributes()
        .class()
        .map(|c| c.as_utf8_str())
        .unwrap_or_default()
        .split_whitespace()
        .map(ToString::to_string)
        .collect()
}

fn tag_matches(tag: &HTMLTag, rule: &ElementMatch) -> bool {
    if tag.name().as_utf8_str().as_ref() != rule.tag {
        return false;
    }
    match &rule.class {
        Some(class) => class_set(tag).contains(class.as_str()),
        None => true,
    }
}

/// Select all fragments matching the selector, in document order. Each
/// fragment is returned as its raw outer HTML so extraction stays a pure
/// function of one entry.
pub fn select_fragments(dom: &VDom<'_>, parser: &Parser<'_>, selector: &FragmentSelector) -> Vec<String> {
    let mut fragments = Vec::new();

    match &selector.parent {
        Some(parent_rule) => {
            for node in dom.nodes().iter() {
                let Some(tag) = node.as_tag() else {
                    continue;
                };
                if !tag_matches(tag, parent_rule) {
                    continue;
                }
                for child_handle in tag.children().top().iter() {
                    let Some(child) = child_handle.get(parser) else {
                        continue;
                    };
                    let Some(child_tag) = child.as_tag() else {
                        continue;
                    };
                    if tag_matches(child_tag, &selector.item) {
                        fragments.push(child_tag.raw().as_utf8_str().to_string());
                    }
                }
            }
        }
        None => {
            for node in dom.nodes().iter() {
                let Some(tag) = node.as_tag() else {
                    continue;
                };
                if tag_matches(tag, &selector.item) {
                    fragments.push(tag.raw().as_utf8_str().to_string());
                }
            }
        }
    }

    fragments
}

pub fn count_matches(dom: &VDom<'_>, parser: &Parser<'_>, selector: &FragmentSelector) -> usize {
    select_fragments(dom, parser, selector).len()
}

pub fn count_tags(dom: &VDom<'_>, name: &str) -> usize {
    dom.nodes()
        .iter()
        .filter(|node| {
            node.as_tag()
                .is_some_and(|tag| tag.name().as_utf8_str().as_ref() == name)
        })
        .count()
}

pub fn page_title(dom: &VDom<'_>, parser: &Parser<'_>) -> Option<String> {
    for node in dom.nodes().iter() {
        let Some(tag) = node.as_tag() else {
            continue;
        };
        if tag.name().as_utf8_str().as_ref() != "title" {
            continue;
        }
        let title = normalize_text(&tag.inner_text(parser));
        if !title.is_empty() {
            return Some(title);
        }
    }
    None
}

/// Best-effort extraction of one record from one fragment. Missing data
/// leaves fields absent; only a fragment that fails to parse at all is an
/// error, which the driver isolates to that entry.
pub fn extract_record(
    fragment_html: &str,
    base_url: &str,
    target: &ScrapeTarget,
) -> Result<Legislator, String> {
    let dom = parse_dom(fragment_html)?;
    let parser = dom.parser();
    let mut record = Legislator::empty();
    record.title = Some(target.title.clone());

    // Name and detail URL come from the first anchor only.
    for node in dom.nodes().iter() {
        let Some(tag) = node.as_tag() else {
            continue;
        };
        if tag.name().as_utf8_str().as_ref() != "a" {
            continue;
        }
        record.name = normalize_text(&tag.inner_text(parser));
        if let Some(href) = tag.attributes().get("href").flatten() {
            if let Ok(url) = resolve_url(base_url, href.as_utf8_str().as_ref()) {
                record.url = Some(url);
            }
        }
        break;
    }

    if !record.has_name() {
        if let Some(alt) = photo_alt_text(&dom, parser, &target.photo_holder_class) {
            record.name = alt;
        }
    }

    if let Some(description) = container_text(&dom, parser, &target.description_class) {
        record.party = detect_party(&description);
        record.position = detect_district(&description);
        record.address = derive_address(&description);
    }

    // Contact anchors may sit anywhere in the fragment, in any order.
    for node in dom.nodes().iter() {
        let Some(tag) = node.as_tag() else {
            continue;
        };
        if tag.name().as_utf8_str().as_ref() != "a" {
            continue;
        }
        let Some(href) = tag.attributes().get("href").flatten() else {
            continue;
        };
        let href = href.as_utf8_str();
        if let Some(email) = href.strip_prefix("mailto:") {
            if record.email.is_none() && !email.is_empty() {
                record.email = Some(email.to_string());
            }
        } else if let Some(phone) = href.strip_prefix("tel:") {
            if record.phone.is_none() && !phone.trim().is_empty() {
                record.phone = Some(phone.trim().to_string());
            }
        }
    }

    Ok(record)
}

/// Alt text of an image nested under the photo-holder container, used as a
/// name fallback when the first anchor carries no text.
fn photo_alt_text(dom: &VDom<'_>, parser: &Parser<'_>, holder_class: &str) -> Option<String> {
    for node in dom.nodes().iter() {
        let Some(tag) = node.as_tag() else {
            continue;
        };
        if !class_set(tag).contains(holder_class) {
            continue;
        }
        for child in tag.children().all(parser).iter() {
            let Some(child_tag) = child.as_tag() else {
                continue;
            };
            if child_tag.name().as_utf8_str().as_ref() != "img" {
                continue;
            }
            let Some(alt) = child_tag.attributes().get("alt").flatten() else {
                continue;
            };
            let alt = normalize_text(alt.as_utf8_str().as_ref());
            if !alt.is_empty() {
                return Some(alt);
            }
        }
    }
    None
}

fn container_text(dom: &VDom<'_>, parser: &Parser<'_>, class: &str) -> Option<String> {
    for node in dom.nodes().iter() {
        let Some(tag) = node.as_tag() else {
            continue;
        };
        if !class_set(tag).contains(class) {
            continue;
        }
        let text = normalize_text(&tag.inner_text(parser));
        if !text.is_empty() {
            return Some(text);
        }
    }
    None
}

pub fn detect_party(description: &str) -> Option<String> {
    for (marker, _, party) in PARTIES {
        if description.contains(marker) {
            return Some(party.to_string());
        }
    }
    let lowered = description.to_lowercase();
    for (_, word, party) in PARTIES {
        if lowered.contains(word) {
            return Some(party.to_string());
        }
    }
    None
}

pub fn detect_district(description: &str) -> Option<String> {
    DISTRICT_RE
        .captures(description)
        .map(|captures| format!("District {}", &captures[1]))
}

/// Comma-separated remainder of the description: the lead-in segment is
/// dropped, as is anything that names the district or is a bare party
/// marker in either form. Survivors are rejoined with ", ".
pub fn derive_address(description: &str) -> Option<String> {
    let segments = description
        .split(',')
        .skip(1)
        .map(str::trim)
        .filter(|segment| {
            !segment.is_empty()
                && !segment.contains("District")
                && !PARTIES
                    .iter()
                    .any(|(marker, word, _)| segment == marker || segment.eq_ignore_ascii_case(word))
        })
        .collect::<Vec<_>>();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join(", "))
    }
}
