//! Medical-leave certificate models.

use serde::{Deserialize, Serialize};

/// The caller-supplied portion of a medical-leave record: everything
/// except the surrogate id and the store-owned timestamps.
///
/// Date and time fields are opaque text. The source contract treats
/// them as uninterpreted strings (Gregorian and Hijri side by side), so
/// no calendar validation happens here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveFields {
    /// Unique natural key, externally assigned, immutable after creation
    pub service_code: String,
    /// Patient identity/national ID - not unique on its own
    pub identity_number: String,
    pub patient_name_ar: String,
    pub patient_name_en: String,
    pub nationality_ar: String,
    pub nationality_en: String,
    pub workplace_ar: String,
    pub workplace_en: String,
    pub doctor_name_ar: String,
    pub doctor_name_en: String,
    pub job_title_ar: String,
    pub job_title_en: String,
    pub admission_date_gregorian: String,
    pub admission_date_hijri: String,
    pub discharge_date_gregorian: String,
    pub discharge_date_hijri: String,
    pub report_issue_date: String,
    pub facility_name_ar: String,
    pub facility_name_en: String,
    pub report_time: String,
    pub duration_days: i64,
}

/// A persisted medical-leave record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalLeave {
    /// Surrogate row id - ordering tiebreaker only, never a lookup key
    pub id: i64,
    #[serde(flatten)]
    pub fields: LeaveFields,
    /// Creation timestamp, fixed at insert
    pub created_at: String,
    /// Last update timestamp, refreshed on every update
    pub updated_at: String,
}

impl MedicalLeave {
    /// The business key this record is addressed by.
    pub fn service_code(&self) -> &str {
        &self.fields.service_code
    }
}

/// Store-owned timestamp in RFC 3339 UTC with fixed millisecond
/// precision, so lexicographic order matches chronological order.
pub fn now_timestamp() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
