//! SQLite schema definition.

/// Complete database schema for medleave.
///
/// Timestamps are written by the store in RFC 3339; the SQLite defaults
/// only cover rows inserted outside of it.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS medical_leaves (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    service_code TEXT NOT NULL UNIQUE,
    identity_number TEXT NOT NULL,
    patient_name_ar TEXT NOT NULL,
    patient_name_en TEXT NOT NULL,
    nationality_ar TEXT NOT NULL,
    nationality_en TEXT NOT NULL,
    workplace_ar TEXT NOT NULL,
    workplace_en TEXT NOT NULL,
    doctor_name_ar TEXT NOT NULL,
    doctor_name_en TEXT NOT NULL,
    job_title_ar TEXT NOT NULL,
    job_title_en TEXT NOT NULL,
    admission_date_gregorian TEXT NOT NULL,
    admission_date_hijri TEXT NOT NULL,
    discharge_date_gregorian TEXT NOT NULL,
    discharge_date_hijri TEXT NOT NULL,
    report_issue_date TEXT NOT NULL,
    facility_name_ar TEXT NOT NULL,
    facility_name_en TEXT NOT NULL,
    report_time TEXT NOT NULL,
    duration_days INTEGER NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_service_code ON medical_leaves(service_code);
CREATE INDEX IF NOT EXISTS idx_identity_number ON medical_leaves(identity_number);
CREATE INDEX IF NOT EXISTS idx_service_identity ON medical_leaves(service_code, identity_number);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_service_code_unique_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        let insert = |conn: &Connection, code: &str| {
            conn.execute(
                r#"
                INSERT INTO medical_leaves (
                    service_code, identity_number, patient_name_ar, patient_name_en,
                    nationality_ar, nationality_en, workplace_ar, workplace_en,
                    doctor_name_ar, doctor_name_en, job_title_ar, job_title_en,
                    admission_date_gregorian, admission_date_hijri,
                    discharge_date_gregorian, discharge_date_hijri,
                    report_issue_date, facility_name_ar, facility_name_en,
                    report_time, duration_days
                ) VALUES (?1, '1000', 'a', 'a', 'a', 'a', 'a', 'a', 'a', 'a', 'a', 'a',
                          'a', 'a', 'a', 'a', 'a', 'a', 'a', 'a', 1)
                "#,
                [code],
            )
        };

        assert!(insert(&conn, "SC-001").is_ok());
        assert!(insert(&conn, "SC-001").is_err());
        assert!(insert(&conn, "SC-002").is_ok());
    }
}
