use legroster::targets::{akleg, ElementMatch, FragmentSelector, ScrapeTarget};

#[test]
fn builtin_alaska_target_has_the_observed_constants() {
    let target = akleg::target();
    assert_eq!(target.url, "https://akleg.gov/senate.php");
    assert_eq!(target.timeout_ms, 10_000);
    assert_eq!(target.title, "Senator");
    assert_eq!(target.output_path, "senators.json");
    assert_eq!(target.list.describe(), "ul.people-list > li");
    assert!(!target.probes.is_empty());
}

#[test]
fn selector_descriptions_render_css_like() {
    let with_parent = FragmentSelector {
        parent: Some(ElementMatch::with_class("ul", "people-holder")),
        item: ElementMatch::tag("li"),
    };
    assert_eq!(with_parent.describe(), "ul.people-holder > li");

    let bare = FragmentSelector {
        parent: None,
        item: ElementMatch::with_class("div", "legislator"),
    };
    assert_eq!(bare.describe(), "div.legislator");
}

#[test]
fn target_round_trips_through_json() {
    let target = akleg::target();
    let json = serde_json::to_string_pretty(&target).expect("target serializes");
    let reparsed: ScrapeTarget = serde_json::from_str(&json).expect("target reparses");
    assert_eq!(reparsed, target);
}

#[test]
fn loads_a_target_definition_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("target.json");

    let json = r#"
    {
        "name": "Example House",
        "url": "https://legislature.example.gov/house",
        "user_agent": "Mozilla/5.0",
        "timeout_ms": 5000,
        "list": { "parent": { "tag": "ul", "class": "members" }, "item": { "tag": "li" } },
        "title": "Representative",
        "photo_holder_class": "photo",
        "description_class": "bio",
        "probes": [
            { "item": { "tag": "tr" } }
        ],
        "output_path": "house.json"
    }
    "#;
    std::fs::write(&path, json).expect("write target file");

    let target = ScrapeTarget::load_from_file(&path).expect("target loads");
    assert_eq!(target.name, "Example House");
    assert_eq!(target.title, "Representative");
    assert_eq!(target.list.describe(), "ul.members > li");
    assert_eq!(target.probes[0].describe(), "tr");

    assert!(ScrapeTarget::load_from_file(dir.path().join("missing.json")).is_err());
}
