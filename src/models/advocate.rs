use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::advocate::{Advocate as DomainAdvocate, NewAdvocate as DomainNewAdvocate};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::advocates)]
/// Diesel model for [`crate::domain::advocate::Advocate`].
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// JSON array of specialty labels.
    pub specialties: String,
    /// Separator-free concatenation of the labels, matched by the search
    /// filter. Written together with `specialties`, never independently.
    pub specialties_text: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::advocates)]
/// Insertable form of [`Advocate`].
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: String,
    pub specialties_text: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl From<Advocate> for DomainAdvocate {
    fn from(advocate: Advocate) -> Self {
        Self {
            id: advocate.id,
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            // The column always holds the JSON written by NewAdvocate.
            specialties: serde_json::from_str(&advocate.specialties).unwrap_or_default(),
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
            created_at: advocate.created_at,
            updated_at: advocate.updated_at,
        }
    }
}

impl From<&DomainNewAdvocate> for NewAdvocate {
    fn from(advocate: &DomainNewAdvocate) -> Self {
        Self {
            first_name: advocate.first_name.clone(),
            last_name: advocate.last_name.clone(),
            city: advocate.city.clone(),
            degree: advocate.degree.clone(),
            specialties: serde_json::to_string(&advocate.specialties)
                .unwrap_or_else(|_| "[]".to_string()),
            specialties_text: advocate.specialties.concat(),
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}
