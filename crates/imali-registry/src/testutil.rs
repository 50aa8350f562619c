//! Shared test fixtures for the registry crate.

use chrono::NaiveDate;

use imali_core::{FileFormat, FileRef, IdentityDocument, Role};

use crate::participant::{Participant, PersonName, ValidityEnd, ValidityPeriod};

pub(crate) fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A legally complete associate-shaped participant with the given role
/// and share, ready to be specialized by individual tests.
pub(crate) fn sample_participant(role: Role, share: f64) -> Participant {
    Participant {
        person_id: None,
        name: PersonName {
            last: "TRAORE".into(),
            first: "Awa".into(),
        },
        birth_date: ymd(1990, 5, 14),
        birth_place: "Bamako".into(),
        nationality: "Malienne".into(),
        role,
        share_percentage: share,
        validity: ValidityPeriod {
            start: ymd(2026, 1, 1),
            end: ValidityEnd::Open,
        },
        identity: IdentityDocument {
            kind: "PASSEPORT".into(),
            number: "B1234567".into(),
            file: Some(FileRef {
                name: "passport.pdf".into(),
                format: FileFormat::Pdf,
                size_bytes: 90_000,
            }),
        },
        marital_status: None,
        criminal_record: None,
        honor_declaration: None,
        honor_signature: None,
        marriage_certificate: None,
        birth_certificate: None,
    }
}
