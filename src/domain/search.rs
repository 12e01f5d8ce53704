//! Free-text search predicate over advocate records.

use serde::{Deserialize, Serialize};

use crate::domain::advocate::Advocate;

/// Decides which advocates qualify for a search term.
///
/// Built once per request and threaded through both the data fetch and the
/// count fetch, so the two can never disagree on the filter. The storage
/// layer renders this into SQL; [`SearchFilter::matches`] is the reference
/// semantics the SQL rendering must agree with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchFilter {
    /// No filter: every record qualifies.
    #[default]
    All,
    /// Case-insensitive substring match on the searchable fields. The term
    /// is stored trimmed and lower-cased.
    Substring(String),
}

impl SearchFilter {
    /// Normalizes a raw search term. Whitespace-only terms mean "no filter".
    /// Never fails, whatever the input string contains.
    pub fn new(term: &str) -> Self {
        let normalized = term.trim().to_lowercase();
        if normalized.is_empty() {
            Self::All
        } else {
            Self::Substring(normalized)
        }
    }

    /// The normalized term, or `None` when the filter selects everything.
    pub fn term(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Substring(term) => Some(term),
        }
    }

    /// Whether the advocate matches this filter.
    ///
    /// The term must appear as a substring of the lower-cased first name,
    /// last name, city, degree, the separator-free concatenation of the
    /// specialties, or the decimal form of the years of experience. The
    /// phone number is not searched.
    pub fn matches(&self, advocate: &Advocate) -> bool {
        let term = match self {
            Self::All => return true,
            Self::Substring(term) => term.as_str(),
        };

        [
            advocate.first_name.as_str(),
            advocate.last_name.as_str(),
            advocate.city.as_str(),
            advocate.degree.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
            || advocate.specialties.concat().to_lowercase().contains(term)
            || advocate.years_of_experience.to_string().contains(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advocate() -> Advocate {
        Advocate {
            id: 1,
            first_name: "Alice".into(),
            last_name: "Johnson".into(),
            city: "Chicago".into(),
            degree: "PhD".into(),
            specialties: vec!["Bipolar".into(), "LGBTQ".into()],
            years_of_experience: 10,
            phone_number: 5554443333,
            ..Advocate::default()
        }
    }

    #[test]
    fn empty_and_whitespace_terms_match_everything() {
        assert_eq!(SearchFilter::new(""), SearchFilter::All);
        assert_eq!(SearchFilter::new("   "), SearchFilter::All);
        assert!(SearchFilter::new("").matches(&advocate()));
    }

    #[test]
    fn matching_is_case_and_whitespace_insensitive() {
        let record = advocate();
        assert!(SearchFilter::new("phd").matches(&record));
        assert!(SearchFilter::new("  PHD  ").matches(&record));
        assert_eq!(
            SearchFilter::new("chicago").matches(&record),
            SearchFilter::new("  CHICAGO  ").matches(&record)
        );
    }

    #[test]
    fn matches_each_searchable_field() {
        let record = advocate();
        assert!(SearchFilter::new("alic").matches(&record));
        assert!(SearchFilter::new("johnson").matches(&record));
        assert!(SearchFilter::new("chic").matches(&record));
        assert!(SearchFilter::new("phd").matches(&record));
        assert!(SearchFilter::new("lgbtq").matches(&record));
        assert!(SearchFilter::new("10").matches(&record));
    }

    #[test]
    fn degree_match_is_substring_not_equality() {
        let mut record = advocate();
        record.degree = "MD".into();
        assert!(!SearchFilter::new("phd").matches(&record));
        assert!(SearchFilter::new("md").matches(&record));
    }

    #[test]
    fn specialties_are_concatenated_without_separator() {
        // "Bipolar" + "LGBTQ" = "BipolarLGBTQ": a term spanning the entry
        // boundary matches.
        assert!(SearchFilter::new("bipolarlgbtq").matches(&advocate()));
    }

    #[test]
    fn phone_number_is_not_searched() {
        assert!(!SearchFilter::new("555").matches(&advocate()));
        assert!(!SearchFilter::new("5554443333").matches(&advocate()));
    }

    #[test]
    fn years_match_is_raw_substring() {
        let mut record = advocate();
        record.years_of_experience = 100;
        // Substring semantics: "10" matches inside "100".
        assert!(SearchFilter::new("10").matches(&record));
    }

    #[test]
    fn wildcard_characters_carry_no_meaning() {
        let record = advocate();
        assert!(!SearchFilter::new("%").matches(&record));
        assert!(!SearchFilter::new("_").matches(&record));
        assert!(!SearchFilter::new("a%b").matches(&record));
    }

    #[test]
    fn total_over_arbitrary_input() {
        let record = advocate();
        for term in ["\u{0}", "\u{1F980}", "\\", "''; DROP TABLE advocates;--"] {
            let _ = SearchFilter::new(term).matches(&record);
        }
    }
}
