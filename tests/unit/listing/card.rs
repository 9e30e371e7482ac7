use super::*;

fn sample() -> Listing {
    Listing::from_json_str(
        r#"{
            "tipo": "apto",
            "titulo": "X",
            "precio": "$1",
            "imagen": "i.jpg",
            "link": "/d",
            "atributos": { "hab": 3 }
        }"#,
    )
    .unwrap()
}

#[test]
fn minimal_record_renders_title_price_and_attribute() {
    let html = render_card(&sample());
    assert!(html.contains(r#"<h3 class="card-titulo">X</h3>"#));
    assert!(html.contains(r#"<div class="card-precio">$1</div>"#));
    assert_eq!(html.matches("<li>").count(), 1);
    assert!(html.contains(r#"<li><span class="ico ico-hab"></span> 3</li>"#));
    assert!(!html.contains("ico-eye"));
    assert!(!html.contains("ico-heart"));
    assert!(html.starts_with(r#"<article class="card tipo-apto">"#));
    assert!(html.contains(r#"<a href="/d" class="card-link">"#));
    assert!(html.contains(r#"<img src="i.jpg" alt="X" />"#));
}

#[test]
fn zero_counts_hide_badges() {
    let mut listing = sample();
    listing.views = Some(0);
    listing.favorites = Some(0);
    let html = render_card(&listing);
    assert!(!html.contains("ico-eye"));
    assert!(!html.contains("ico-heart"));
}

#[test]
fn counts_show_badges() {
    let mut listing = sample();
    listing.views = Some(128);
    listing.favorites = Some(42);
    let html = render_card(&listing);
    assert!(html.contains(r#"<span class="ico ico-eye">128</span>"#));
    assert!(html.contains(r#"<span class="ico ico-heart">42</span>"#));
}

#[test]
fn attribute_order_is_preserved() {
    let listing = Listing::from_json_str(
        r#"{ "tipo": "apto", "titulo": "T", "precio": "$", "imagen": "a", "link": "/",
             "atributos": { "m2": 94, "hab": 3, "bañ": 2, "estr": "4" } }"#,
    )
    .unwrap();
    let html = render_card(&listing);
    let order: Vec<usize> = ["ico-m2", "ico-hab", "ico-bañ", "ico-estr"]
        .iter()
        .map(|k| html.find(k).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{order:?}");
    assert!(html.contains("</span> 4</li>"));
}

#[test]
fn english_keys_are_accepted() {
    let listing = Listing::from_json_str(
        r#"{ "category": "casa", "title": "Casa", "price": "$2", "image": "c.jpg", "link": "/c",
             "views": 5 }"#,
    )
    .unwrap();
    assert_eq!(listing.category, "casa");
    assert_eq!(listing.views, Some(5));
    assert!(listing.attributes.is_empty());
}

#[test]
fn text_is_escaped() {
    let mut listing = sample();
    listing.title = r#"<b>"Lote" & más</b>"#.to_owned();
    let html = render_card(&listing);
    assert!(html.contains("&lt;b&gt;&quot;Lote&quot; &amp; más&lt;/b&gt;"));
    assert!(!html.contains("<b>"));
}

#[test]
fn render_cards_concatenates() {
    let a = sample();
    let b = sample();
    let html = render_cards([&a, &b]);
    assert_eq!(html.matches("<article").count(), 2);
}

#[test]
fn missing_required_field_is_a_serde_error() {
    let err = Listing::from_json_str(r#"{ "tipo": "apto" }"#).unwrap_err();
    assert!(matches!(err, VitrinaError::Serde(_)));
}
