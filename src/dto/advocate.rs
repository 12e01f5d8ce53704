//! Wire payloads for the advocates listing. Field names follow the HTTP
//! contract (camelCase); the same types are consumed by the browse
//! controller on the client side.

use serde::{Deserialize, Serialize};

use crate::domain::advocate::Advocate;
use crate::pagination::PaginationMetadata;

/// Query parameters accepted by the listing service.
#[derive(Debug, Default)]
pub struct AdvocatesQuery {
    /// Page number requested by the caller; defaults to 1.
    pub page: Option<usize>,
    /// Free-form search string applied to the directory.
    pub search_term: Option<String>,
}

/// One advocate row as serialized over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocateDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl From<Advocate> for AdvocateDto {
    fn from(advocate: Advocate) -> Self {
        Self {
            id: advocate.id,
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            specialties: advocate.specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}

/// The atomic listing payload: a page of records and the metadata derived
/// from the same filtered total. Never produced partially.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvocatesResponse {
    pub data: Vec<AdvocateDto>,
    pub pagination: PaginationMetadata,
}
