use crate::targets::{ElementMatch, FragmentSelector, ScrapeTarget};

const SENATE_URL: &str = "https://akleg.gov/senate.php";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const TIMEOUT_MS: u64 = 10_000;
const OUTPUT_FILE: &str = "senators.json";

/// Built-in target for the Alaska Senate roster page.
pub fn target() -> ScrapeTarget {
    ScrapeTarget {
        name: "Alaska Senate".to_string(),
        url: SENATE_URL.to_string(),
        user_agent: USER_AGENT.to_string(),
        timeout_ms: TIMEOUT_MS,
        list: FragmentSelector {
            parent: Some(ElementMatch::with_class("ul", "people-list")),
            item: ElementMatch::tag("li"),
        },
        title: "Senator".to_string(),
        photo_holder_class: "img-holder".to_string(),
        description_class: "description-holder".to_string(),
        probes: vec![
            FragmentSelector {
                parent: Some(ElementMatch::with_class("ul", "people-list")),
                item: ElementMatch::tag("li"),
            },
            FragmentSelector {
                parent: Some(ElementMatch::with_class("ul", "people-holder")),
                item: ElementMatch::tag("li"),
            },
            FragmentSelector {
                parent: None,
                item: ElementMatch::with_class("li", "same-height-left"),
            },
            FragmentSelector {
                parent: None,
                item: ElementMatch::with_class("div", "legislator"),
            },
            FragmentSelector {
                parent: None,
                item: ElementMatch::tag("tr"),
            },
        ],
        output_path: OUTPUT_FILE.to_string(),
    }
}
