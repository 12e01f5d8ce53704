use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::search::SearchFilter;

/// A directory entry for one professional advocate.
///
/// The directory may contain duplicates; nothing beyond `id` is unique.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Ordered list of specialty labels.
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    /// Digit string of length 7 or 10 by convention; not validated further.
    pub phone_number: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Advocate {
    /// Whether this record matches the raw search term. See
    /// [`SearchFilter::matches`] for the matching rule.
    pub fn matches(&self, term: &str) -> bool {
        SearchFilter::new(term).matches(self)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl NewAdvocate {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        city: String,
        degree: String,
        specialties: Vec<String>,
        years_of_experience: i32,
        phone_number: i64,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            city: city.trim().to_string(),
            degree: degree.trim().to_string(),
            specialties: specialties
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            years_of_experience: years_of_experience.max(0),
            phone_number,
        }
    }
}

/// Formats a stored phone number into a UI-friendly string.
///
/// 10-digit numbers become `555-321-7654`, 7-digit numbers `763-6307`.
/// Anything else renders as an empty string.
pub fn format_phone_number(phone_number: i64) -> String {
    let digits = phone_number.to_string();
    match digits.len() {
        10 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        7 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_advocate_trims_fields_and_drops_empty_specialties() {
        let advocate = NewAdvocate::new(
            "  John ".into(),
            " Doe".into(),
            "New York ".into(),
            " MD".into(),
            vec!["  ADHD ".into(), "   ".into(), "Trauma".into()],
            12,
            5553217654,
        );
        assert_eq!(advocate.first_name, "John");
        assert_eq!(advocate.last_name, "Doe");
        assert_eq!(advocate.city, "New York");
        assert_eq!(advocate.degree, "MD");
        assert_eq!(advocate.specialties, vec!["ADHD", "Trauma"]);
    }

    #[test]
    fn formats_ten_digit_numbers() {
        assert_eq!(format_phone_number(5553217654), "555-321-7654");
    }

    #[test]
    fn formats_seven_digit_numbers() {
        assert_eq!(format_phone_number(7636307), "763-6307");
    }

    #[test]
    fn unformattable_numbers_render_empty() {
        assert_eq!(format_phone_number(11), "");
    }
}
