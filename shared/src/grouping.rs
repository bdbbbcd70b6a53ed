use crate::dto::concert::Concert;
use std::collections::HashMap;

/// Concerts of one date that share a neighborhood.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborhoodGroup {
    pub neighborhood: String,
    pub concerts: Vec<Concert>,
}

/// All concerts on one date, split by neighborhood.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    pub date: String,
    pub neighborhoods: Vec<NeighborhoodGroup>,
}

impl DateGroup {
    pub fn concert_count(&self) -> usize {
        self.neighborhoods.iter().map(|n| n.concerts.len()).sum()
    }
}

/// Groups concerts by exact date string, then by exact neighborhood string.
///
/// Both levels keep first-seen order so the server's ordering carries through.
pub fn group_concerts(concerts: &[Concert]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    let mut date_index: HashMap<&str, usize> = HashMap::new();
    let mut neighborhood_index: HashMap<(&str, &str), usize> = HashMap::new();

    for concert in concerts {
        let d = *date_index.entry(concert.date.as_str()).or_insert_with(|| {
            groups.push(DateGroup {
                date: concert.date.clone(),
                neighborhoods: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[d];
        let n = *neighborhood_index
            .entry((concert.date.as_str(), concert.neighborhood.as_str()))
            .or_insert_with(|| {
                group.neighborhoods.push(NeighborhoodGroup {
                    neighborhood: concert.neighborhood.clone(),
                    concerts: Vec::new(),
                });
                group.neighborhoods.len() - 1
            });
        group.neighborhoods[n].concerts.push(concert.clone());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_dates_first_with_two_neighborhoods() {
        let concerts = vec![
            Concert::new("2024-06-01", "A"),
            Concert::new("2024-06-01", "B"),
            Concert::new("2024-06-02", "A"),
        ];

        let groups = group_concerts(&concerts);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, "2024-06-01");
        assert_eq!(groups[0].neighborhoods.len(), 2);
        assert_eq!(groups[1].date, "2024-06-02");
        assert_eq!(groups[1].neighborhoods.len(), 1);
    }

    #[test]
    fn test_first_seen_order_is_kept() {
        let concerts = vec![
            Concert::new("2024-06-02", "Harlem"),
            Concert::new("2024-06-01", "West Village"),
            Concert::new("2024-06-02", "East Village"),
            Concert::new("2024-06-02", "Harlem"),
        ];

        let groups = group_concerts(&concerts);
        let dates: Vec<_> = groups.iter().map(|g| g.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-02", "2024-06-01"]);

        let hoods: Vec<_> = groups[0].neighborhoods.iter().map(|n| n.neighborhood.as_str()).collect();
        assert_eq!(hoods, vec!["Harlem", "East Village"]);
        assert_eq!(groups[0].concert_count(), 3);
    }

    #[test]
    fn test_no_normalization() {
        let concerts = vec![
            Concert::new("2024-06-01", "Harlem"),
            Concert::new("2024-06-01 ", "harlem"),
        ];
        let groups = group_concerts(&concerts);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_concerts(&[]).is_empty());
    }
}
