/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {resource} '{key}' already exists")]
    Conflict { resource: &'static str, key: String },
}

impl DbError {
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Map a unique-constraint violation on insert to `Conflict`.
    pub(crate) fn from_insert(err: sqlx::Error, resource: &'static str, key: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict {
                resource,
                key: key.to_owned(),
            },
            _ => Self::Sqlx(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        assert_eq!(
            DbError::not_found("note", 9999).to_string(),
            "not found: note '9999'"
        );
    }

    #[test]
    fn non_database_errors_stay_sqlx() {
        let err = DbError::from_insert(sqlx::Error::RowNotFound, "tag", "work");
        assert!(matches!(err, DbError::Sqlx(_)));
    }
}
