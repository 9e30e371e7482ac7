//! Thumbnail filtering driven by the search form.
//!
//! The form is reduced to a [`FilterSet`] (filter name -> accepted values). Each thumbnail
//! exposes its `data-*` values; a thumbnail stays visible when it satisfies every active
//! filter. Category and price bucket are checked first; every other filter is either the
//! mileage classifier (`km`) or a case-insensitive value match.

use std::collections::{BTreeMap, HashMap};

const CATEGORY: &str = "property";
const PRICE_RANGE: &str = "priceRange";
const PRICE_RANGE_DATA: &str = "pricerange";
const MILEAGE: &str = "km";

/// Element id of the "no results" notice.
pub const NO_RESULTS_ID: &str = "no-results-message";
/// Text of the "no results" notice.
pub const NO_RESULTS_TEXT: &str = "No se encontraron resultados.";

/// A checkbox control of the search form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkbox {
    /// Control name.
    pub name: String,
    /// Value submitted when ticked.
    pub value: String,
    /// Whether the box is ticked.
    pub checked: bool,
}

/// A select control of the search form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Select {
    /// Control name.
    pub name: String,
    /// Selected value; `"all"` means no restriction.
    pub value: String,
}

/// Current state of the search form's controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    /// Checkboxes in form order.
    pub checkboxes: Vec<Checkbox>,
    /// Selects in form order.
    pub selects: Vec<Select>,
}

impl FormState {
    /// Tick or untick a box, adding it when the form does not have it yet.
    pub fn check(&mut self, name: &str, value: &str, checked: bool) {
        match self
            .checkboxes
            .iter_mut()
            .find(|c| c.name == name && c.value == value)
        {
            Some(cb) => cb.checked = checked,
            None => self.checkboxes.push(Checkbox {
                name: name.to_owned(),
                value: value.to_owned(),
                checked,
            }),
        }
    }

    /// Choose a select value, adding the select when needed.
    pub fn select(&mut self, name: &str, value: &str) {
        match self.selects.iter_mut().find(|s| s.name == name) {
            Some(sel) => sel.value = value.to_owned(),
            None => self.selects.push(Select {
                name: name.to_owned(),
                value: value.to_owned(),
            }),
        }
    }

    /// Uncheck every box and put every select back on "all".
    pub fn reset(&mut self) {
        for cb in &mut self.checkboxes {
            cb.checked = false;
        }
        for sel in &mut self.selects {
            sel.value = "all".to_owned();
        }
    }
}

/// Mileage buckets used by the `km` filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MileageBucket {
    /// Under 20 000.
    Low,
    /// 20 000 to 50 000 inclusive.
    Mid,
    /// Over 50 000 up to 100 000 inclusive.
    High,
    /// Over 100 000.
    VeryHigh,
}

impl MileageBucket {
    /// Bucket for a form value (`low`, `mid`, `high`, `very-high`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "mid" => Some(Self::Mid),
            "high" => Some(Self::High),
            "very-high" => Some(Self::VeryHigh),
            _ => None,
        }
    }

    /// Whether `km` falls in this bucket.
    pub fn contains(self, km: i64) -> bool {
        match self {
            Self::Low => km < 20_000,
            Self::Mid => (20_000..=50_000).contains(&km),
            Self::High => km > 50_000 && km <= 100_000,
            Self::VeryHigh => km > 100_000,
        }
    }
}

/// Leading integer of `s` (after trimming), as `parseInt` would read it.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().ok()
}

/// Active filters: name -> accepted values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: BTreeMap<String, Vec<String>>,
}

impl FilterSet {
    /// Checked boxes accumulate under their name; a select other than empty or "all"
    /// replaces whatever its name had.
    pub fn from_form(form: &FormState) -> Self {
        let mut filters: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for cb in form.checkboxes.iter().filter(|c| c.checked) {
            filters.entry(cb.name.clone()).or_default().push(cb.value.clone());
        }
        for sel in &form.selects {
            if !sel.value.is_empty() && sel.value != "all" {
                filters.insert(sel.name.clone(), vec![sel.value.clone()]);
            }
        }
        Self { filters }
    }

    /// Replace the accepted values for `name`.
    pub fn with(mut self, name: &str, values: &[&str]) -> Self {
        self.filters.insert(
            name.to_owned(),
            values.iter().map(|v| (*v).to_owned()).collect(),
        );
        self
    }

    /// Accepted values for `name`, empty when it is not filtered.
    pub fn get(&self, name: &str) -> &[String] {
        self.filters.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// True when no filter restricts anything.
    pub fn is_empty(&self) -> bool {
        self.filters.values().all(Vec::is_empty)
    }

    /// Requested categories.
    pub fn categories(&self) -> &[String] {
        self.get(CATEGORY)
    }

    /// Whether `item` passes every active filter.
    pub fn matches(&self, item: &Thumbnail) -> bool {
        let categories = self.categories();
        if !categories.is_empty() && !any_ci(categories, item.data(CATEGORY)) {
            return false;
        }

        let prices = self.get(PRICE_RANGE);
        if !categories.is_empty()
            && !prices.is_empty()
            && !any_ci(prices, item.data(PRICE_RANGE_DATA))
        {
            return false;
        }

        self.filters
            .iter()
            .filter(|(name, values)| {
                name.as_str() != CATEGORY && name.as_str() != PRICE_RANGE && !values.is_empty()
            })
            .all(|(name, values)| {
                if name == MILEAGE {
                    let Some(km) = parse_leading_int(item.data(MILEAGE)) else {
                        return false;
                    };
                    values
                        .iter()
                        .filter_map(|v| MileageBucket::parse(v))
                        .any(|bucket| bucket.contains(km))
                } else {
                    any_ci(values, item.data(name))
                }
            })
    }
}

fn any_ci(wanted: &[String], actual: &str) -> bool {
    wanted.iter().any(|w| w.to_lowercase() == actual.to_lowercase())
}

/// A grid thumbnail: its `data-*` values and whether it is currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Thumbnail {
    data: HashMap<String, String>,
    visible: bool,
}

impl Thumbnail {
    /// Visible thumbnail with the given `data-*` values (keys without the prefix).
    pub fn new<K, V>(data: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            data: data
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            visible: true,
        }
    }

    /// Value of `data-<key>`, empty when absent.
    pub fn data(&self, key: &str) -> &str {
        self.data.get(key).map_or("", String::as_str)
    }

    /// Whether the last [`Showcase::apply`] kept it.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// The "no results" notice, created the first time filters are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoResults {
    /// Element id.
    pub id: &'static str,
    /// Message shown.
    pub text: &'static str,
    /// Hidden while at least one thumbnail is visible.
    pub hidden: bool,
}

/// The thumbnail grid.
#[derive(Clone, Debug, Default)]
pub struct Showcase {
    items: Vec<Thumbnail>,
    no_results: Option<NoResults>,
}

impl Showcase {
    /// Grid over `items`; the notice does not exist until the first apply.
    pub fn new(items: Vec<Thumbnail>) -> Self {
        Self {
            items,
            no_results: None,
        }
    }

    /// Show exactly the thumbnails `filters` accepts. Returns how many remain visible.
    pub fn apply(&mut self, filters: &FilterSet) -> usize {
        let mut visible = 0;
        for item in &mut self.items {
            item.visible = filters.matches(item);
            visible += usize::from(item.visible);
        }

        let notice = self.no_results.get_or_insert_with(|| NoResults {
            id: NO_RESULTS_ID,
            text: NO_RESULTS_TEXT,
            hidden: true,
        });
        notice.hidden = visible > 0;
        tracing::debug!(visible, total = self.items.len(), "filters applied");
        visible
    }

    /// Thumbnails in grid order.
    pub fn items(&self) -> &[Thumbnail] {
        &self.items
    }

    /// The notice, once created.
    pub fn no_results(&self) -> Option<&NoResults> {
        self.no_results.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/listing/filter.rs"]
mod tests;
