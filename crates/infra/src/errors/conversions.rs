//! Conversions from external infrastructure errors into domain errors.

use nutriflow_domain::NutriFlowError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub NutriFlowError);

impl From<InfraError> for NutriFlowError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<NutriFlowError> for InfraError {
    fn from(value: NutriFlowError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → NutriFlowError */
/* -------------------------------------------------------------------------- */

impl From<SqlError> for InfraError {
    fn from(err: SqlError) -> Self {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        let domain = match err {
            RE::SqliteFailure(code, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (code.code, code.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        NutriFlowError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        NutriFlowError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        NutriFlowError::Database("unique constraint violation".into())
                    }
                    (ErrorCode::ConstraintViolation, 787) => {
                        NutriFlowError::Database("foreign key constraint violation".into())
                    }
                    _ => NutriFlowError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        code.code, code.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => {
                NutriFlowError::NotFound("no rows returned by query".into())
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                NutriFlowError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                NutriFlowError::Database(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => {
                NutriFlowError::Database("invalid UTF-8 returned from sqlite".into())
            }
            other => NutriFlowError::Database(format!("sqlite error: {other}")),
        };

        InfraError(domain)
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → NutriFlowError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(err: r2d2::Error) -> Self {
        InfraError(NutriFlowError::Database(format!("connection pool error: {err}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → NutriFlowError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        let domain = if err.is_timeout() {
            NutriFlowError::Network(format!("HTTP request timed out: {err}"))
        } else if err.is_connect() {
            NutriFlowError::Network(format!("HTTP connection failed: {err}"))
        } else if err.is_builder() {
            NutriFlowError::Internal(format!("failed to build HTTP request: {err}"))
        } else {
            NutriFlowError::Network(format!("HTTP error: {err}"))
        };

        InfraError(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rows_maps_to_not_found() {
        let err: InfraError = SqlError::QueryReturnedNoRows.into();
        assert!(matches!(err.0, NutriFlowError::NotFound(_)));
    }

    #[test]
    fn conversion_failures_map_to_database() {
        let err: InfraError = SqlError::InvalidColumnType(
            0,
            "calories".into(),
            rusqlite::types::Type::Text,
        )
        .into();
        assert!(matches!(err.0, NutriFlowError::Database(_)));
    }
}
