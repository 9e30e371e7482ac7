//! "More filters" panel: which advanced filter groups are shown, the expand toggle and the
//! warning shown when it is pressed before choosing a category.

use std::collections::BTreeSet;

use crate::foundation::core::Millis;
use crate::listing::filter::FilterSet;

/// Toggle label while collapsed.
pub const LABEL_COLLAPSED: &str = "Más filtros";
/// Toggle label while expanded.
pub const LABEL_EXPANDED: &str = "Menos filtros";

const TOOLTIP_MS: Millis = Millis(2000.0);

/// Advanced filter block shown for a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FilterGroup {
    /// Houses and apartments.
    Housing,
    /// Vehicles.
    Vehicle,
    /// Land lots.
    Lot,
}

impl FilterGroup {
    /// Group for a category value; houses and apartments share one.
    pub fn for_category(category: &str) -> Option<Self> {
        match category {
            "casa" | "apartamento" => Some(Self::Housing),
            "vehiculo" => Some(Self::Vehicle),
            "lote" => Some(Self::Lot),
            _ => None,
        }
    }

    /// Class of the block in the page markup.
    pub fn selector(self) -> &'static str {
        match self {
            Self::Housing => ".advanced-housing-filters",
            Self::Vehicle => ".advanced-vehicle-filters",
            Self::Lot => ".advanced-lote-filters",
        }
    }
}

/// What pressing the toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// No category selected; the warning tooltip is showing instead.
    NeedsCategory,
    /// The panel opened.
    Expanded,
    /// The panel closed.
    Collapsed,
}

/// State of the "more filters" panel.
#[derive(Clone, Debug, Default)]
pub struct FilterPanel {
    groups: BTreeSet<FilterGroup>,
    expanded: bool,
    tooltip_left: Option<Millis>,
}

impl FilterPanel {
    /// Collapsed panel with no groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the visible groups after the form changed.
    pub fn update(&mut self, filters: &FilterSet) {
        let categories = filters.categories();
        self.groups = categories
            .iter()
            .filter_map(|c| FilterGroup::for_category(c))
            .collect();

        if categories.is_empty() {
            self.expanded = false;
        } else {
            self.tooltip_left = None;
        }
    }

    /// The "more filters" button was pressed.
    pub fn toggle(&mut self, filters: &FilterSet) -> ToggleOutcome {
        if filters.categories().is_empty() {
            self.tooltip_left = Some(TOOLTIP_MS);
            return ToggleOutcome::NeedsCategory;
        }

        self.tooltip_left = None;
        self.expanded = !self.expanded;
        if self.expanded {
            self.update(filters);
            ToggleOutcome::Expanded
        } else {
            ToggleOutcome::Collapsed
        }
    }

    /// Let time pass for the tooltip.
    pub fn tick(&mut self, dt: Millis) {
        if let Some(left) = self.tooltip_left {
            let left = left.saturating_sub(dt);
            self.tooltip_left = left.is_positive().then_some(left);
        }
    }

    /// Form reset: collapse and hide everything.
    pub fn reset(&mut self) {
        self.groups.clear();
        self.expanded = false;
        self.tooltip_left = None;
    }

    /// Groups currently shown.
    pub fn groups(&self) -> impl Iterator<Item = FilterGroup> + '_ {
        self.groups.iter().copied()
    }

    /// Whether the panel is open.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the "choose a category" warning is showing.
    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_left.is_some()
    }

    /// Current toggle label.
    pub fn label(&self) -> &'static str {
        if self.expanded {
            LABEL_EXPANDED
        } else {
            LABEL_COLLAPSED
        }
    }

    /// Value for the button's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/listing/panel.rs"]
mod tests;
