use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A concert as returned by the listing endpoint.
///
/// Only `date` and `neighborhood` are relied upon; everything else is display
/// data and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concert {
    pub date: String,
    pub neighborhood: String,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub times: Vec<String>,
    #[serde(default)]
    pub ticket_link: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub special_notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Concert {
    pub fn new(date: impl Into<String>, neighborhood: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            neighborhood: neighborhood.into(),
            artists: Vec::new(),
            venue: None,
            times: Vec::new(),
            ticket_link: None,
            price_range: None,
            special_notes: None,
            extra: Map::new(),
        }
    }

    pub fn headline(&self) -> String {
        if self.artists.is_empty() {
            self.venue.clone().unwrap_or_default()
        } else {
            self.artists.join(", ")
        }
    }
}

/// Body of the programmatic `GET /?...` listing request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConcertListResponse {
    pub concerts: Vec<Concert>,
    pub event_count: u64,
}

impl ConcertListResponse {
    pub fn count_label(&self) -> String {
        match self.event_count {
            1 => "1 event found".to_string(),
            n => format!("{} events found", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_fields_are_kept() {
        let body = r#"{
            "concerts": [{
                "date": "2024-06-01",
                "neighborhood": "West Village",
                "artists": ["Bill Charlap Trio"],
                "venue": "Village Vanguard",
                "times": ["8:00 PM", "10:00 PM"],
                "id": 42
            }],
            "event_count": 1
        }"#;
        let response: ConcertListResponse = serde_json::from_str(body).unwrap();
        let concert = &response.concerts[0];

        assert_eq!(concert.headline(), "Bill Charlap Trio");
        assert_eq!(concert.times, vec!["8:00 PM", "10:00 PM"]);
        assert_eq!(concert.extra.get("id"), Some(&Value::from(42)));
        assert_eq!(response.count_label(), "1 event found");
    }

    #[test]
    fn test_grouping_keys_are_required() {
        let body = r#"{"concerts": [{"date": "2024-06-01"}], "event_count": 1}"#;
        assert!(serde_json::from_str::<ConcertListResponse>(body).is_err());
    }

    #[test]
    fn test_count_label_plural() {
        let response = ConcertListResponse { concerts: vec![], event_count: 0 };
        assert_eq!(response.count_label(), "0 events found");
    }

    #[test]
    fn test_headline_falls_back_to_venue() {
        let mut concert = Concert::new("2024-06-01", "Harlem");
        concert.venue = Some("Minton's Playhouse".into());
        assert_eq!(concert.headline(), "Minton's Playhouse");
    }
}
