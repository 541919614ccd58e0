//! Timelines - titled containers of milestones

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::note::non_blank;
use crate::{ValidationError, EMPTY_JSON_ARRAY};

/// A stored timeline. `milestones` is opaque JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub milestones: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/timelines`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTimelineRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub milestones: Option<String>,
}

/// A timeline ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeline {
    pub title: String,
    pub description: String,
    pub milestones: String,
}

impl TryFrom<CreateTimelineRequest> for NewTimeline {
    type Error = ValidationError;

    fn try_from(req: CreateTimelineRequest) -> Result<Self, Self::Error> {
        let title = non_blank(req.title).ok_or(ValidationError::Required { field: "title" })?;
        Ok(Self {
            title,
            description: req.description.unwrap_or_default(),
            milestones: req.milestones.unwrap_or_else(|| EMPTY_JSON_ARRAY.to_owned()),
        })
    }
}

/// Body of `PUT /api/timelines/{id}`. Same rules as note patches:
/// present fields overwrite, a blank `title` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelinePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub milestones: Option<String>,
}

impl TimelinePatch {
    pub fn normalized(self) -> Self {
        Self {
            title: non_blank(self.title),
            ..self
        }
    }

    pub fn apply(self, timeline: &mut Timeline) {
        let patch = self.normalized();
        if let Some(title) = patch.title {
            timeline.title = title;
        }
        if let Some(description) = patch.description {
            timeline.description = description;
        }
        if let Some(milestones) = patch.milestones {
            timeline.milestones = milestones;
        }
        timeline.updated_at = crate::next_updated_at(timeline.updated_at);
    }
}
