//! Listing card markup.

use std::fmt::Write as _;

use crate::foundation::error::{VitrinaError, VitrinaResult};

/// One listing as delivered to the page. Field names accept both English and the site's
/// Spanish keys.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Listing {
    /// Category tag, e.g. `apto`, `casa`, `vehiculo`.
    #[serde(alias = "tipo")]
    pub category: String,
    /// Headline shown on the card.
    #[serde(alias = "titulo")]
    pub title: String,
    /// Price exactly as displayed.
    #[serde(alias = "precio")]
    pub price: String,
    /// Image URL.
    #[serde(alias = "imagen")]
    pub image: String,
    /// Detail page URL.
    pub link: String,
    /// View count; no badge when absent or zero.
    #[serde(default, alias = "vistas")]
    pub views: Option<u64>,
    /// Favorite count; no badge when absent or zero.
    #[serde(default, alias = "favoritos")]
    pub favorites: Option<u64>,
    /// Attribute key -> display value, in display order.
    #[serde(default, alias = "atributos")]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Listing {
    /// Parse one record.
    pub fn from_json_str(s: &str) -> VitrinaResult<Self> {
        serde_json::from_str(s).map_err(|e| VitrinaError::serde(e.to_string()))
    }
}

/// Markup for one card. Pure: the caller decides where it goes.
pub fn render_card(listing: &Listing) -> String {
    let title = escape_html(&listing.title);
    let mut badges = String::new();
    if let Some(views) = listing.views.filter(|&n| n > 0) {
        let _ = write!(badges, r#"<span class="ico ico-eye">{views}</span>"#);
    }
    if let Some(favorites) = listing.favorites.filter(|&n| n > 0) {
        let _ = write!(badges, r#"<span class="ico ico-heart">{favorites}</span>"#);
    }

    let mut attributes = String::new();
    for (key, value) in &listing.attributes {
        let _ = write!(
            attributes,
            r#"<li><span class="ico ico-{}"></span> {}</li>"#,
            escape_html(key),
            escape_html(&display_value(value))
        );
    }

    format!(
        concat!(
            r#"<article class="card tipo-{category}">"#,
            r#"<a href="{link}" class="card-link">"#,
            r#"<figure class="card-media"><img src="{image}" alt="{title}" /></figure>"#,
            r#"<div class="card-body">"#,
            r#"<h3 class="card-titulo">{title}</h3>"#,
            r#"<div class="card-precio">{price}</div>"#,
            r#"<div class="card-datos">{badges}</div>"#,
            r#"<ul class="card-atributos">{attributes}</ul>"#,
            r#"</div></a></article>"#,
        ),
        category = escape_html(&listing.category),
        link = escape_html(&listing.link),
        image = escape_html(&listing.image),
        title = title,
        price = escape_html(&listing.price),
        badges = badges,
        attributes = attributes,
    )
}

/// Cards for every listing, concatenated in order.
pub fn render_cards<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> String {
    listings.into_iter().map(render_card).collect()
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/listing/card.rs"]
mod tests;
