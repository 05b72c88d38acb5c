use axum::body::Bytes;
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use validator::Validate;

use user_lib::paging::{Direction, PageRequest, Sort, DEFAULT_PAGE_SIZE};

use crate::error::ApiError;

/// Properties the user listings may be sorted on. The names are the
/// wire names clients send, not the Rust field names.
pub const SORTABLE_PROPERTIES: &[&str] = &["id", "name", "email", "userCredo", "role", "userStatus"];

/// Parses a JSON request body. Handlers read the raw bytes and call
/// this after the policy check so that a malformed body can never
/// preempt a 401 or 403.
pub fn json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Parses and validates a JSON request body in one step.
pub fn valid_json_body<T: DeserializeOwned + Validate>(body: &Bytes) -> Result<T, ApiError> {
    validated(json_body(body)?)
}

pub fn validated<T: Validate>(payload: T) -> Result<T, ApiError> {
    if let Err(errors) = payload.validate() {
        let mut fields: Vec<(&str, String)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, field_errors)| {
                let detail = field_errors
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "invalid value".to_string());
                (field, detail)
            })
            .collect();
        fields.sort_by_key(|(field, _)| *field);
        let message = match fields.first() {
            Some((field, detail)) => format!("{field}: {detail}"),
            None => "validation failed".to_string(),
        };
        return Err(ApiError::BadRequest(message));
    }
    Ok(payload)
}

/// Path segments arrive as strings; the route table cannot reject
/// them, so unparseable ids become a 400 here.
pub fn path_i64(segment: &str, name: &str) -> Result<i64, ApiError> {
    segment
        .parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("{name} must be a number")))
}

pub fn path_datetime(segment: &str, name: &str) -> Result<NaiveDateTime, ApiError> {
    segment
        .parse::<NaiveDateTime>()
        .map_err(|_| ApiError::BadRequest(format!("{name} must be an ISO-8601 date time")))
}

pub fn require_param<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, ApiError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::missing_param(name)),
    }
}

pub fn param_i64(value: &Option<String>, name: &str) -> Result<i64, ApiError> {
    path_i64(require_param(value, name)?, name)
}

/// Builds a page request from the optional `page`, `size` and `sort`
/// query parameters, applying the first-page-of-twenty default.
pub fn page_request(
    page: &Option<String>,
    size: &Option<String>,
    sort: &Option<String>,
) -> Result<PageRequest, ApiError> {
    let page = match page.as_deref() {
        None | Some("") => 0,
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| ApiError::BadRequest("page must be a non-negative number".to_string()))?,
    };

    let size = match size.as_deref() {
        None | Some("") => DEFAULT_PAGE_SIZE,
        Some(raw) => {
            let parsed = raw
                .parse::<u32>()
                .map_err(|_| ApiError::BadRequest("size must be a positive number".to_string()))?;
            if parsed == 0 {
                return Err(ApiError::BadRequest(
                    "size must be a positive number".to_string(),
                ));
            }
            parsed
        }
    };

    let mut request = PageRequest::new(page, size);
    if let Some(raw) = sort.as_deref().filter(|s| !s.is_empty()) {
        request = request.sorted_by(parse_sort(raw)?);
    }
    Ok(request)
}

fn parse_sort(raw: &str) -> Result<Sort, ApiError> {
    let mut parts = raw.split(',');
    let property = parts.next().unwrap_or("").trim();
    if property.is_empty() {
        return Err(ApiError::BadRequest("sort property is required".to_string()));
    }
    if !SORTABLE_PROPERTIES.contains(&property) {
        // Mirrors the message clients already match on.
        return Err(ApiError::BadRequest(format!("{property} property not exist")));
    }

    let direction = match parts.next().map(str::trim) {
        None | Some("") => Direction::Asc,
        Some(d) if d.eq_ignore_ascii_case("asc") => Direction::Asc,
        Some(d) if d.eq_ignore_ascii_case("desc") => Direction::Desc,
        Some(_) => {
            return Err(ApiError::BadRequest(
                "sort direction must be asc or desc".to_string(),
            ))
        }
    };

    Ok(Sort {
        property: property.to_string(),
        direction,
    })
}
