//! # Research Publications
//!
//! The research page lists peer-reviewed work about the sensing system. The
//! list lives in the `publications` section as a JSON array; this module
//! orders it and reduces it to headline metrics (count, citations, h-index).

use fallsense_core::SectionKey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ContentError;
use crate::sections::load_typed;
use crate::store::ContentStore;

/// One publication record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    /// Assigned when the section is written if the record has none.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub year: u16,
    #[serde(default)]
    pub citations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Headline numbers for a publication list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationMetrics {
    pub total_publications: usize,
    pub total_citations: u64,
    pub h_index: u32,
}

impl PublicationMetrics {
    /// Reduce a publication list to its metrics.
    pub fn from_publications(publications: &[Publication]) -> Self {
        Self {
            total_publications: publications.len(),
            total_citations: publications.iter().map(|p| u64::from(p.citations)).sum(),
            h_index: h_index(publications.iter().map(|p| p.citations)),
        }
    }
}

/// Largest `h` such that `h` publications have at least `h` citations each.
pub fn h_index(citations: impl IntoIterator<Item = u32>) -> u32 {
    let mut counts: Vec<u32> = citations.into_iter().collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts
        .iter()
        .zip(1u32..)
        .take_while(|(&c, rank)| c >= *rank)
        .count() as u32
}

/// Newest first; ties broken by citations (descending), then title.
pub fn sorted_by_recency(mut publications: Vec<Publication>) -> Vec<Publication> {
    publications.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then_with(|| b.citations.cmp(&a.citations))
            .then_with(|| a.title.cmp(&b.title))
    });
    publications
}

/// Publications stored in the `publications` section; empty when absent.
pub fn load_publications(store: &dyn ContentStore) -> Result<Vec<Publication>, ContentError> {
    Ok(load_typed(store, &SectionKey::publications())?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryContentStore;
    use serde_json::json;

    fn publication(title: &str, year: u16, citations: u32) -> Publication {
        Publication {
            id: Uuid::new_v4(),
            title: title.to_string(),
            authors: vec!["A. Author".to_string()],
            venue: None,
            year,
            citations,
            url: None,
        }
    }

    #[test]
    fn h_index_examples() {
        assert_eq!(h_index([]), 0);
        assert_eq!(h_index([0, 0]), 0);
        assert_eq!(h_index([3, 0, 6, 1, 5]), 3);
        assert_eq!(h_index([1, 3, 1]), 1);
        assert_eq!(h_index([100]), 1);
        assert_eq!(h_index([10, 8, 5, 4, 3]), 4);
        assert_eq!(h_index([25, 8, 5, 3, 3]), 3);
    }

    #[test]
    fn metrics_reduce_list() {
        let pubs = vec![
            publication("a", 2021, 12),
            publication("b", 2022, 4),
            publication("c", 2023, 1),
        ];
        let m = PublicationMetrics::from_publications(&pubs);
        assert_eq!(m.total_publications, 3);
        assert_eq!(m.total_citations, 17);
        assert_eq!(m.h_index, 2);
    }

    #[test]
    fn recency_order() {
        let sorted = sorted_by_recency(vec![
            publication("old", 2019, 50),
            publication("new-b", 2024, 2),
            publication("new-a", 2024, 2),
            publication("new-cited", 2024, 9),
        ]);
        let titles: Vec<&str> = sorted.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["new-cited", "new-a", "new-b", "old"]);
    }

    #[test]
    fn load_from_store() {
        let store = InMemoryContentStore::new();
        assert!(load_publications(&store).unwrap().is_empty());

        store.upsert(
            SectionKey::publications(),
            json!([
                {"title": "Radar-based fall detection", "year": 2023, "citations": 7},
                {"title": "Night-time mobility", "year": 2021}
            ]),
        );
        let pubs = load_publications(&store).unwrap();
        assert_eq!(pubs.len(), 2);
        assert_eq!(pubs[1].citations, 0);
        assert!(pubs[1].authors.is_empty());
    }

    #[test]
    fn malformed_list_is_an_error() {
        let store = InMemoryContentStore::new();
        store.upsert(SectionKey::publications(), json!([{"year": 2023}]));
        assert!(load_publications(&store).is_err());
    }

    #[test]
    fn metrics_serialize_camel_case() {
        let m = PublicationMetrics {
            total_publications: 2,
            total_citations: 9,
            h_index: 2,
        };
        assert_eq!(
            serde_json::to_value(m).unwrap(),
            json!({"totalPublications": 2, "totalCitations": 9, "hIndex": 2})
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// h never exceeds the number of publications, and at least h
        /// publications have h or more citations.
        #[test]
        fn h_index_definition(citations in proptest::collection::vec(0u32..200, 0..60)) {
            let h = h_index(citations.iter().copied());
            prop_assert!(h as usize <= citations.len());
            prop_assert!(citations.iter().filter(|&&c| c >= h).count() >= h as usize);
            prop_assert!(citations.iter().filter(|&&c| c > h).count() < (h as usize) + 1);
        }
    }
}
