//! Tags - named, colored labels

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::note::non_blank;
use crate::ValidationError;

/// Color stored when the client does not pick one. Not validated.
pub const DEFAULT_TAG_COLOR: &str = "#3b82f6";

/// A stored tag. `name` is unique across all tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/tags`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTagRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// A tag ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
    pub color: String,
}

impl TryFrom<CreateTagRequest> for NewTag {
    type Error = ValidationError;

    fn try_from(req: CreateTagRequest) -> Result<Self, Self::Error> {
        let name = non_blank(req.name).ok_or(ValidationError::Required { field: "name" })?;
        Ok(Self {
            name,
            color: non_blank(req.color).unwrap_or_else(|| DEFAULT_TAG_COLOR.to_owned()),
        })
    }
}
