use super::*;

fn car(km: &str) -> Thumbnail {
    Thumbnail::new([("property", "vehiculo"), ("km", km), ("pricerange", "mid")])
}

#[test]
fn mileage_bucket_selects_matching_vehicle() {
    let item = car("25000");
    let mid = FilterSet::default()
        .with("property", &["vehiculo"])
        .with("km", &["mid"]);
    assert!(mid.matches(&item));

    let low = FilterSet::default()
        .with("property", &["vehiculo"])
        .with("km", &["low"]);
    assert!(!low.matches(&item));
}

#[test]
fn mileage_bucket_edges() {
    assert!(MileageBucket::Low.contains(19_999));
    assert!(!MileageBucket::Low.contains(20_000));
    assert!(MileageBucket::Mid.contains(20_000));
    assert!(MileageBucket::Mid.contains(50_000));
    assert!(!MileageBucket::High.contains(50_000));
    assert!(MileageBucket::High.contains(100_000));
    assert!(MileageBucket::VeryHigh.contains(100_001));
    assert_eq!(MileageBucket::parse("very-high"), Some(MileageBucket::VeryHigh));
    assert_eq!(MileageBucket::parse("huge"), None);
}

#[test]
fn unparsable_mileage_matches_no_bucket() {
    let f = FilterSet::default().with("km", &["low", "mid", "high", "very-high"]);
    assert!(!f.matches(&car("")));
    assert!(!f.matches(&car("n/a")));
    assert!(f.matches(&car("120000 km")));
}

#[test]
fn no_filters_show_everything_and_hide_the_notice() {
    let mut grid = Showcase::new(vec![car("1"), car("30000"), Thumbnail::new([("property", "casa")])]);
    assert!(grid.no_results().is_none());

    let form = FormState::default();
    let filters = FilterSet::from_form(&form);
    assert!(filters.is_empty());
    assert_eq!(grid.apply(&filters), 3);
    assert!(grid.items().iter().all(Thumbnail::is_visible));
    assert_eq!(grid.no_results().map(|n| n.hidden), Some(true));
}

#[test]
fn unmatched_category_shows_the_notice() {
    let mut grid = Showcase::new(vec![car("1"), car("30000")]);
    let filters = FilterSet::default().with("property", &["casa"]);
    assert_eq!(grid.apply(&filters), 0);
    let notice = grid.no_results().unwrap();
    assert!(!notice.hidden);
    assert_eq!(notice.text, "No se encontraron resultados.");
    assert_eq!(notice.id, "no-results-message");
}

#[test]
fn notice_hides_again_when_results_return() {
    let mut grid = Showcase::new(vec![car("1")]);
    grid.apply(&FilterSet::default().with("property", &["lote"]));
    assert_eq!(grid.no_results().map(|n| n.hidden), Some(false));
    grid.apply(&FilterSet::default());
    assert_eq!(grid.no_results().map(|n| n.hidden), Some(true));
}

#[test]
fn price_range_needs_a_category() {
    let item = car("1000");
    let price_only = FilterSet::default().with("priceRange", &["high"]);
    assert!(price_only.matches(&item));

    let with_category = price_only.clone().with("property", &["vehiculo"]);
    assert!(!with_category.matches(&item));

    let matching = FilterSet::default()
        .with("property", &["VEHICULO"])
        .with("priceRange", &["Mid"]);
    assert!(matching.matches(&item));
}

#[test]
fn other_filters_match_case_insensitively() {
    let item = Thumbnail::new([("property", "casa"), ("location", "Bogota")]);
    assert!(FilterSet::default().with("location", &["bogota"]).matches(&item));
    assert!(!FilterSet::default().with("location", &["cali"]).matches(&item));
    assert!(!FilterSet::default().with("rooms", &["3"]).matches(&item));
}

#[test]
fn form_collection_rules() {
    let mut form = FormState::default();
    form.check("property", "casa", true);
    form.check("property", "lote", true);
    form.check("property", "vehiculo", false);
    form.select("location", "bogota");
    form.select("priceRange", "all");
    form.select("rooms", "");

    let filters = FilterSet::from_form(&form);
    assert_eq!(filters.categories(), ["casa", "lote"]);
    assert_eq!(filters.get("location"), ["bogota"]);
    assert!(filters.get("priceRange").is_empty());
    assert!(filters.get("rooms").is_empty());

    form.check("property", "lote", false);
    assert_eq!(FilterSet::from_form(&form).categories(), ["casa"]);

    form.reset();
    assert!(FilterSet::from_form(&form).is_empty());
}

#[test]
fn select_replaces_checkbox_values_of_the_same_name() {
    let mut form = FormState::default();
    form.check("location", "cali", true);
    form.select("location", "bogota");
    assert_eq!(FilterSet::from_form(&form).get("location"), ["bogota"]);
}
