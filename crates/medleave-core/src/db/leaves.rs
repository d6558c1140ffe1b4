//! Medical-leave record operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, StoreError, StoreResult};
use crate::models::{now_timestamp, LeaveFields, MedicalLeave};

const COLUMNS: &str = "id, service_code, identity_number, patient_name_ar, patient_name_en, \
     nationality_ar, nationality_en, workplace_ar, workplace_en, \
     doctor_name_ar, doctor_name_en, job_title_ar, job_title_en, \
     admission_date_gregorian, admission_date_hijri, \
     discharge_date_gregorian, discharge_date_hijri, \
     report_issue_date, facility_name_ar, facility_name_en, \
     report_time, duration_days, created_at, updated_at";

fn leave_from_row(row: &Row<'_>) -> rusqlite::Result<MedicalLeave> {
    Ok(MedicalLeave {
        id: row.get(0)?,
        fields: LeaveFields {
            service_code: row.get(1)?,
            identity_number: row.get(2)?,
            patient_name_ar: row.get(3)?,
            patient_name_en: row.get(4)?,
            nationality_ar: row.get(5)?,
            nationality_en: row.get(6)?,
            workplace_ar: row.get(7)?,
            workplace_en: row.get(8)?,
            doctor_name_ar: row.get(9)?,
            doctor_name_en: row.get(10)?,
            job_title_ar: row.get(11)?,
            job_title_en: row.get(12)?,
            admission_date_gregorian: row.get(13)?,
            admission_date_hijri: row.get(14)?,
            discharge_date_gregorian: row.get(15)?,
            discharge_date_hijri: row.get(16)?,
            report_issue_date: row.get(17)?,
            facility_name_ar: row.get(18)?,
            facility_name_en: row.get(19)?,
            report_time: row.get(20)?,
            duration_days: row.get(21)?,
        },
        created_at: row.get(22)?,
        updated_at: row.get(23)?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

impl Database {
    /// Insert a new medical-leave record and return its row id.
    ///
    /// A `service_code` already on file is a normal outcome and comes
    /// back as [`StoreError::Duplicate`] with no state mutated.
    pub fn insert_leave(&self, fields: &LeaveFields) -> StoreResult<i64> {
        let now = now_timestamp();
        let result = self.conn.execute(
            r#"
            INSERT INTO medical_leaves (
                service_code, identity_number, patient_name_ar, patient_name_en,
                nationality_ar, nationality_en, workplace_ar, workplace_en,
                doctor_name_ar, doctor_name_en, job_title_ar, job_title_en,
                admission_date_gregorian, admission_date_hijri,
                discharge_date_gregorian, discharge_date_hijri,
                report_issue_date, facility_name_ar, facility_name_en,
                report_time, duration_days, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                      ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23)
            "#,
            params![
                fields.service_code,
                fields.identity_number,
                fields.patient_name_ar,
                fields.patient_name_en,
                fields.nationality_ar,
                fields.nationality_en,
                fields.workplace_ar,
                fields.workplace_en,
                fields.doctor_name_ar,
                fields.doctor_name_en,
                fields.job_title_ar,
                fields.job_title_en,
                fields.admission_date_gregorian,
                fields.admission_date_hijri,
                fields.discharge_date_gregorian,
                fields.discharge_date_hijri,
                fields.report_issue_date,
                fields.facility_name_ar,
                fields.facility_name_en,
                fields.report_time,
                fields.duration_days,
                now,
                now,
            ],
        );

        match result {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => {
                Err(StoreError::Duplicate(fields.service_code.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Exact-match lookup on the service code / identity number pair.
    pub fn find_leave(
        &self,
        service_code: &str,
        identity_number: &str,
    ) -> StoreResult<Option<MedicalLeave>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {COLUMNS} FROM medical_leaves \
                     WHERE service_code = ?1 AND identity_number = ?2"
                ),
                params![service_code, identity_number],
                leave_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all records, most recently created first.
    pub fn list_leaves(&self) -> StoreResult<Vec<MedicalLeave>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM medical_leaves ORDER BY created_at DESC, id DESC"
        ))?;

        let rows = stmt.query_map([], leave_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Replace every field of the record identified by `service_code`
    /// except `id`, `created_at`, and the key itself; `updated_at` is
    /// refreshed. Returns `false` when no row matched.
    ///
    /// `fields.service_code` is ignored - the key comes from the
    /// explicit argument and cannot be changed through an update.
    pub fn update_leave(&self, service_code: &str, fields: &LeaveFields) -> StoreResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE medical_leaves SET
                identity_number = ?2,
                patient_name_ar = ?3,
                patient_name_en = ?4,
                nationality_ar = ?5,
                nationality_en = ?6,
                workplace_ar = ?7,
                workplace_en = ?8,
                doctor_name_ar = ?9,
                doctor_name_en = ?10,
                job_title_ar = ?11,
                job_title_en = ?12,
                admission_date_gregorian = ?13,
                admission_date_hijri = ?14,
                discharge_date_gregorian = ?15,
                discharge_date_hijri = ?16,
                report_issue_date = ?17,
                facility_name_ar = ?18,
                facility_name_en = ?19,
                report_time = ?20,
                duration_days = ?21,
                updated_at = ?22
            WHERE service_code = ?1
            "#,
            params![
                service_code,
                fields.identity_number,
                fields.patient_name_ar,
                fields.patient_name_en,
                fields.nationality_ar,
                fields.nationality_en,
                fields.workplace_ar,
                fields.workplace_en,
                fields.doctor_name_ar,
                fields.doctor_name_en,
                fields.job_title_ar,
                fields.job_title_en,
                fields.admission_date_gregorian,
                fields.admission_date_hijri,
                fields.discharge_date_gregorian,
                fields.discharge_date_hijri,
                fields.report_issue_date,
                fields.facility_name_ar,
                fields.facility_name_en,
                fields.report_time,
                fields.duration_days,
                now_timestamp(),
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Delete the record with that service code. Returns `false` when
    /// no row matched.
    pub fn delete_leave(&self, service_code: &str) -> StoreResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM medical_leaves WHERE service_code = ?", [service_code])?;
        Ok(rows_affected > 0)
    }
}
