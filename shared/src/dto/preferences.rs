use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One of the three filter dimensions offered on the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Venues,
    Neighborhoods,
    Genres,
}

impl FilterCategory {
    /// Order in which the sections appear in the panel.
    pub const PANEL_ORDER: [FilterCategory; 3] = [
        FilterCategory::Neighborhoods,
        FilterCategory::Genres,
        FilterCategory::Venues,
    ];

    /// Order in which values are written to the listing query string.
    pub const QUERY_ORDER: [FilterCategory; 3] = [
        FilterCategory::Venues,
        FilterCategory::Neighborhoods,
        FilterCategory::Genres,
    ];

    /// Tag stored in the checkbox `data-filter-type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCategory::Venues => "venues",
            FilterCategory::Neighborhoods => "neighborhoods",
            FilterCategory::Genres => "genres",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FilterCategory::Venues => "Venues",
            FilterCategory::Neighborhoods => "Neighborhoods",
            FilterCategory::Genres => "Genres",
        }
    }

    /// Repeated parameter name understood by the listing endpoint.
    pub fn query_key(&self) -> &'static str {
        match self {
            FilterCategory::Venues => "venues[]",
            FilterCategory::Neighborhoods => "neighborhoods[]",
            FilterCategory::Genres => "genres[]",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "venues" => Some(FilterCategory::Venues),
            "neighborhoods" => Some(FilterCategory::Neighborhoods),
            "genres" => Some(FilterCategory::Genres),
            _ => None,
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a single checkbox as read from the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxState {
    pub category: FilterCategory,
    pub value: String,
    pub checked: bool,
}

impl CheckboxState {
    pub fn new(category: FilterCategory, value: impl Into<String>, checked: bool) -> Self {
        Self {
            category,
            value: value.into(),
            checked,
        }
    }
}

/// The viewer's selected filter values.
///
/// Each list is a set in disguise: values are unique and their order carries
/// no meaning beyond transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub venues: Vec<String>,
    #[serde(default)]
    pub neighborhoods: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Preferences {
    /// Rebuilds preferences from the checkboxes currently on the page.
    ///
    /// Checked values are collected per category in the order they were read;
    /// a value that shows up twice is kept once.
    pub fn from_checkboxes<I>(checkboxes: I) -> Self
    where
        I: IntoIterator<Item = CheckboxState>,
    {
        let mut preferences = Self::default();
        for checkbox in checkboxes.into_iter().filter(|c| c.checked) {
            let values = preferences.values_mut(checkbox.category);
            if !values.contains(&checkbox.value) {
                values.push(checkbox.value);
            }
        }
        preferences
    }

    pub fn values(&self, category: FilterCategory) -> &[String] {
        match category {
            FilterCategory::Venues => &self.venues,
            FilterCategory::Neighborhoods => &self.neighborhoods,
            FilterCategory::Genres => &self.genres,
        }
    }

    fn values_mut(&mut self, category: FilterCategory) -> &mut Vec<String> {
        match category {
            FilterCategory::Venues => &mut self.venues,
            FilterCategory::Neighborhoods => &mut self.neighborhoods,
            FilterCategory::Genres => &mut self.genres,
        }
    }

    pub fn is_selected(&self, category: FilterCategory, value: &str) -> bool {
        self.values(category).iter().any(|v| v == value)
    }

    pub fn selected_count(&self, category: FilterCategory) -> usize {
        self.values(category).len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty() && self.neighborhoods.is_empty() && self.genres.is_empty()
    }

    /// Drops repeated values, keeping the first occurrence.
    ///
    /// Server-supplied preferences go through this before they are trusted.
    pub fn dedup(mut self) -> Self {
        for category in FilterCategory::QUERY_ORDER {
            let mut seen = HashSet::new();
            self.values_mut(category).retain(|v| seen.insert(v.clone()));
        }
        self
    }

    /// Compares selections while ignoring order.
    pub fn same_selection(&self, other: &Preferences) -> bool {
        FilterCategory::QUERY_ORDER.iter().all(|&category| {
            let mine: HashSet<&String> = self.values(category).iter().collect();
            let theirs: HashSet<&String> = other.values(category).iter().collect();
            mine == theirs
        })
    }

    /// One `(key, value)` pair per selected value, e.g. `("venues[]", "Smalls")`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        FilterCategory::QUERY_ORDER
            .iter()
            .flat_map(|&category| {
                self.values(category)
                    .iter()
                    .map(move |value| (category.query_key(), value.clone()))
            })
            .collect()
    }

    /// Percent-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
