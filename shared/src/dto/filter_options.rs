use crate::dto::preferences::{FilterCategory, Preferences};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A venue as listed by `/get_filter_options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueOption {
    pub name: String,
}

/// A selectable value of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub category: FilterCategory,
}

/// Body of `GET /get_filter_options`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    pub neighborhoods: Vec<String>,
    pub genres: Vec<String>,
    pub venues: Vec<VenueOption>,
    /// Only present when the viewer is signed in and has saved a selection.
    #[serde(rename = "userPreferences", default, skip_serializing_if = "Option::is_none")]
    pub user_preferences: Option<Preferences>,
}

impl FilterOptionsResponse {
    /// Options of one category in server order. Repeated values are listed once.
    pub fn options(&self, category: FilterCategory) -> Vec<FilterOption> {
        let values: Vec<&str> = match category {
            FilterCategory::Venues => self.venues.iter().map(|v| v.name.as_str()).collect(),
            FilterCategory::Neighborhoods => self.neighborhoods.iter().map(String::as_str).collect(),
            FilterCategory::Genres => self.genres.iter().map(String::as_str).collect(),
        };
        let mut seen = HashSet::new();
        values
            .into_iter()
            .filter(|value| seen.insert(*value))
            .map(|value| FilterOption {
                value: value.to_string(),
                category,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.neighborhoods.is_empty() && self.genres.is_empty() && self.venues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_without_user_preferences() {
        let body = r#"{
            "neighborhoods": ["Harlem"],
            "genres": ["Jazz"],
            "venues": [{"name": "Smalls Jazz Club"}, {"name": "Mezzrow Jazz Club"}]
        }"#;
        let response: FilterOptionsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.user_preferences, None);
        assert_eq!(
            response.options(FilterCategory::Venues),
            vec![
                FilterOption { value: "Smalls Jazz Club".into(), category: FilterCategory::Venues },
                FilterOption { value: "Mezzrow Jazz Club".into(), category: FilterCategory::Venues },
            ]
        );
    }

    #[test]
    fn test_deserialize_with_user_preferences() {
        let body = r#"{
            "neighborhoods": [], "genres": ["Jazz"], "venues": [],
            "userPreferences": {"venues": [], "neighborhoods": [], "genres": ["Jazz"]}
        }"#;
        let response: FilterOptionsResponse = serde_json::from_str(body).unwrap();
        let saved = response.user_preferences.unwrap();
        assert!(saved.is_selected(FilterCategory::Genres, "Jazz"));
    }

    #[test]
    fn test_repeated_values_are_listed_once() {
        let body = r#"{
            "neighborhoods": ["Harlem", "West Village", "Harlem"],
            "genres": [],
            "venues": [{"name": "Smalls"}, {"name": "Mezzrow"}, {"name": "Smalls"}]
        }"#;
        let response: FilterOptionsResponse = serde_json::from_str(body).unwrap();

        let venues: Vec<_> = response
            .options(FilterCategory::Venues)
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(venues, vec!["Smalls".to_string(), "Mezzrow".to_string()]);

        let neighborhoods: Vec<_> = response
            .options(FilterCategory::Neighborhoods)
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(neighborhoods, vec!["Harlem".to_string(), "West Village".to_string()]);
    }

    #[test]
    fn test_missing_category_is_malformed() {
        let body = r#"{"neighborhoods": [], "genres": []}"#;
        assert!(serde_json::from_str::<FilterOptionsResponse>(body).is_err());
    }
}
