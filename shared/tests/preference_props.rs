use proptest::prelude::*;
use shared::{CheckboxState, FilterCategory, Preferences};
use std::collections::HashSet;

fn category() -> impl Strategy<Value = FilterCategory> {
    prop_oneof![
        Just(FilterCategory::Venues),
        Just(FilterCategory::Neighborhoods),
        Just(FilterCategory::Genres),
    ]
}

fn checkbox() -> impl Strategy<Value = CheckboxState> {
    (category(), "[A-Za-z &']{1,12}", any::<bool>())
        .prop_map(|(category, value, checked)| CheckboxState::new(category, value, checked))
}

proptest! {
    #[test]
    fn recomputed_category_equals_checked_set(boxes in prop::collection::vec(checkbox(), 0..40)) {
        let preferences = Preferences::from_checkboxes(boxes.clone());

        for category in FilterCategory::PANEL_ORDER {
            let expected: HashSet<&str> = boxes
                .iter()
                .filter(|b| b.checked && b.category == category)
                .map(|b| b.value.as_str())
                .collect();
            let actual: HashSet<&str> = preferences.values(category).iter().map(String::as_str).collect();

            prop_assert_eq!(&actual, &expected);
            prop_assert_eq!(preferences.values(category).len(), expected.len());
        }
    }

    #[test]
    fn query_pairs_cover_every_value(boxes in prop::collection::vec(checkbox(), 0..40)) {
        let preferences = Preferences::from_checkboxes(boxes);
        let pairs = preferences.to_query_pairs();
        let total: usize = FilterCategory::QUERY_ORDER
            .iter()
            .map(|&c| preferences.selected_count(c))
            .sum();

        prop_assert_eq!(pairs.len(), total);
        for (key, value) in pairs {
            let category = FilterCategory::QUERY_ORDER
                .into_iter()
                .find(|c| c.query_key() == key)
                .unwrap();
            prop_assert!(preferences.is_selected(category, &value));
        }
    }

    #[test]
    fn json_round_trip_keeps_selection(boxes in prop::collection::vec(checkbox(), 0..20)) {
        let preferences = Preferences::from_checkboxes(boxes);
        let body = serde_json::to_string(&preferences).unwrap();
        let back: Preferences = serde_json::from_str(&body).unwrap();
        prop_assert!(back.same_selection(&preferences));
    }
}
