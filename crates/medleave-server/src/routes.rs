//! HTTP handlers for the medical-leave endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use medleave_core::LeaveFields;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

/// Create/update request body. Every field is optional at the wire
/// level so that a missing one can be reported by name instead of
/// failing deserialization wholesale.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LeavePayload {
    pub service_code: Option<String>,
    pub identity_number: Option<String>,
    pub patient_name_ar: Option<String>,
    pub patient_name_en: Option<String>,
    pub nationality_ar: Option<String>,
    pub nationality_en: Option<String>,
    pub workplace_ar: Option<String>,
    pub workplace_en: Option<String>,
    pub doctor_name_ar: Option<String>,
    pub doctor_name_en: Option<String>,
    pub job_title_ar: Option<String>,
    pub job_title_en: Option<String>,
    pub admission_date_gregorian: Option<String>,
    pub admission_date_hijri: Option<String>,
    pub discharge_date_gregorian: Option<String>,
    pub discharge_date_hijri: Option<String>,
    pub report_issue_date: Option<String>,
    pub facility_name_ar: Option<String>,
    pub facility_name_en: Option<String>,
    pub report_time: Option<String>,
    pub duration_days: Option<i64>,
}

fn required(value: Option<String>, name: &'static str) -> Result<String, &'static str> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(name),
    }
}

impl LeavePayload {
    /// Validate the create body: all 21 fields required. Fields are
    /// checked in declaration order and the first missing or blank one
    /// is returned by name.
    pub fn into_create_fields(mut self) -> Result<LeaveFields, &'static str> {
        let service_code = required(self.service_code.take(), "service_code")?;
        self.into_fields_with_key(service_code)
    }

    /// Validate the update body: 20 fields required, the service code
    /// comes from the URL and any copy in the body is ignored.
    pub fn into_update_fields(self, service_code: String) -> Result<LeaveFields, &'static str> {
        self.into_fields_with_key(service_code)
    }

    fn into_fields_with_key(self, service_code: String) -> Result<LeaveFields, &'static str> {
        Ok(LeaveFields {
            service_code,
            identity_number: required(self.identity_number, "identity_number")?,
            patient_name_ar: required(self.patient_name_ar, "patient_name_ar")?,
            patient_name_en: required(self.patient_name_en, "patient_name_en")?,
            nationality_ar: required(self.nationality_ar, "nationality_ar")?,
            nationality_en: required(self.nationality_en, "nationality_en")?,
            workplace_ar: required(self.workplace_ar, "workplace_ar")?,
            workplace_en: required(self.workplace_en, "workplace_en")?,
            doctor_name_ar: required(self.doctor_name_ar, "doctor_name_ar")?,
            doctor_name_en: required(self.doctor_name_en, "doctor_name_en")?,
            job_title_ar: required(self.job_title_ar, "job_title_ar")?,
            job_title_en: required(self.job_title_en, "job_title_en")?,
            admission_date_gregorian: required(
                self.admission_date_gregorian,
                "admission_date_gregorian",
            )?,
            admission_date_hijri: required(self.admission_date_hijri, "admission_date_hijri")?,
            discharge_date_gregorian: required(
                self.discharge_date_gregorian,
                "discharge_date_gregorian",
            )?,
            discharge_date_hijri: required(self.discharge_date_hijri, "discharge_date_hijri")?,
            report_issue_date: required(self.report_issue_date, "report_issue_date")?,
            facility_name_ar: required(self.facility_name_ar, "facility_name_ar")?,
            facility_name_en: required(self.facility_name_en, "facility_name_en")?,
            report_time: required(self.report_time, "report_time")?,
            duration_days: self.duration_days.ok_or("duration_days")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub service_code: Option<String>,
    pub identity_number: Option<String>,
}

type JsonBody<T> = Result<Json<T>, JsonRejection>;

/// `POST /api/medical-leaves`
pub async fn create_leave(
    State(state): State<AppState>,
    payload: JsonBody<LeavePayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(payload) = payload?;
    let fields = payload.into_create_fields().map_err(ApiError::MissingField)?;

    let db = state.db.lock().await;
    db.insert_leave(&fields)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "medical leave record saved" })),
    ))
}

/// `POST /api/medical-leaves/search`
pub async fn search_leave(
    State(state): State<AppState>,
    payload: JsonBody<SearchRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(payload) = payload?;

    let service_code = payload.service_code.as_deref().unwrap_or("").trim();
    let identity_number = payload.identity_number.as_deref().unwrap_or("").trim();
    if service_code.is_empty() || identity_number.is_empty() {
        return Err(ApiError::MissingSearchKeys);
    }

    let db = state.db.lock().await;
    match db.find_leave(service_code, identity_number)? {
        Some(record) => Ok((
            StatusCode::OK,
            Json(json!({ "found": true, "data": record })),
        )),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "found": false, "message": "no matching record found" })),
        )),
    }
}

/// `GET /api/medical-leaves`
pub async fn list_leaves(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let db = state.db.lock().await;
    let records = db.list_leaves()?;
    Ok((StatusCode::OK, Json(json!({ "data": records }))))
}

/// `PUT /api/medical-leaves/:service_code`
pub async fn update_leave(
    State(state): State<AppState>,
    Path(service_code): Path<String>,
    payload: JsonBody<LeavePayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(payload) = payload?;
    let fields = payload
        .into_update_fields(service_code.clone())
        .map_err(ApiError::MissingField)?;

    let db = state.db.lock().await;
    if db.update_leave(&service_code, &fields)? {
        Ok((
            StatusCode::OK,
            Json(json!({ "message": "medical leave record updated" })),
        ))
    } else {
        Err(ApiError::NotFound)
    }
}

/// `DELETE /api/medical-leaves/:service_code`
pub async fn delete_leave(
    State(state): State<AppState>,
    Path(service_code): Path<String>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let db = state.db.lock().await;
    if db.delete_leave(&service_code)? {
        Ok((
            StatusCode::OK,
            Json(json!({ "message": "medical leave record deleted" })),
        ))
    } else {
        Err(ApiError::NotFound)
    }
}

/// `GET /api/health`
pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
