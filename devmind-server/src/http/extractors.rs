//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON request body.
///
/// Unlike `axum::Json` this ignores the request `Content-Type` and maps
/// every decode failure (empty body, syntax, wrong types) to a 400. A body
/// over the router's `DefaultBodyLimit` is a 413.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                ApiError::invalid_json()
            }
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            tracing::debug!("rejected request body: {}", e);
            ApiError::invalid_json()
        })
    }
}

/// Parse a path segment as a row id. Ids are positive.
pub fn parse_row_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

/// Declares a path-id extractor answering 400 `Invalid <resource> ID`.
macro_rules! row_id_extractor {
    ($name:ident, $resource:literal) => {
        pub struct $name(pub i64);

        impl<S> FromRequestParts<S> for $name
        where
            S: Send + Sync,
        {
            type Rejection = ApiError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &S,
            ) -> Result<Self, Self::Rejection> {
                let invalid = || ApiError::BadRequest(concat!("Invalid ", $resource, " ID").into());

                let Path(raw): Path<String> = Path::from_request_parts(parts, state)
                    .await
                    .map_err(|_| invalid())?;

                parse_row_id(&raw).map(Self).ok_or_else(invalid)
            }
        }
    };
}

row_id_extractor!(NoteId, "note");
row_id_extractor!(TagId, "tag");
row_id_extractor!(TimelineId, "timeline");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_ids() {
        assert_eq!(parse_row_id("1"), Some(1));
        assert_eq!(parse_row_id("9999"), Some(9999));
        assert_eq!(parse_row_id("abc"), None);
        assert_eq!(parse_row_id("0"), None);
        assert_eq!(parse_row_id("-3"), None);
        assert_eq!(parse_row_id("1.5"), None);
        assert_eq!(parse_row_id(""), None);
    }
}
