use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::{Employee, EmployeeInput};
use tracing::info;

use crate::errors::ApiError;
use crate::routes::ServerState;

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId)
}

// Decoded by hand so a missing Content-Type or a bad body both end up as 400 "Invalid input".
// Only the first JSON value counts; anything after it is ignored, and `null` is an all-default record.
fn parse_input(body: &[u8]) -> Result<EmployeeInput, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<EmployeeInput>>();
    match values.next() {
        Some(Ok(input)) => Ok(input.unwrap_or_default()),
        _ => Err(ApiError::InvalidInput),
    }
}

/// All records, keyed by id.
pub async fn list_employees(
    State(state): State<ServerState>,
) -> Result<Json<BTreeMap<i64, Employee>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

pub async fn get_employee(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    let id = parse_id(&raw_id)?;
    state.store.get(id).await?.map(Json).ok_or(ApiError::NotFound)
}

pub async fn create_employee(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Employee>, ApiError> {
    let input = parse_input(&body)?;
    let created = state.store.create(input).await?;
    info!(id = created.id, "employee added");
    Ok(Json(created))
}

/// Wholesale replace; the path id wins over any id in the body.
pub async fn update_employee(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Employee>, ApiError> {
    let id = parse_id(&raw_id)?;
    let input = parse_input(&body)?;
    let updated = state.store.update(id, input).await?;
    info!(id, "employee record updated");
    Ok(Json(updated))
}

pub async fn delete_employee(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    if !state.store.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    info!(id, "employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_signed_integers_only() {
        assert_eq!(parse_id("42").ok(), Some(42));
        assert_eq!(parse_id("-3").ok(), Some(-3));
        assert!(matches!(parse_id("abc"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_id("1.5"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_id(""), Err(ApiError::InvalidId)));
    }

    #[test]
    fn parse_input_rejects_malformed_json() {
        assert!(matches!(parse_input(b"{\"name\":"), Err(ApiError::InvalidInput)));
        assert!(matches!(parse_input(b"[1,2]"), Err(ApiError::InvalidInput)));
        assert!(matches!(parse_input(b""), Err(ApiError::InvalidInput)));
        assert!(parse_input(b"{}").is_ok());
    }

    #[test]
    fn parse_input_accepts_null_and_trailing_data() {
        assert_eq!(parse_input(b"null").ok(), Some(EmployeeInput::default()));

        let first = parse_input(br#"{"name":"A"} {}"#).ok().map(|i| i.name);
        assert_eq!(first, Some("A".to_string()));

        let nulled = parse_input(br#"{"name":"Ann","department":null}"#).ok();
        assert_eq!(nulled.map(|i| i.department), Some(String::new()));
    }
}
