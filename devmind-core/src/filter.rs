//! Note list filtering
//!
//! `GET /api/notes` accepts four query parameters which compose
//! conjunctively:
//! - `search`: title or content contains the text, case-insensitively
//! - `tag`: the raw tags blob contains the text (plain substring, so `go`
//!   also matches `golang`)
//! - `pinned=true`: only pinned notes
//! - `archived=true`: include archived notes, which are hidden otherwise
//!
//! Only the literal value `true` switches the flag filters. When a
//! parameter repeats, the first occurrence wins and the rest are ignored.

use serde::Deserialize;

use crate::Note;

/// Raw query string of `GET /api/notes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteQuery {
    pub search: Option<String>,
    pub tag: Option<String>,
    pub pinned: Option<String>,
    pub archived: Option<String>,
}

impl FromIterator<(String, String)> for NoteQuery {
    /// Collect decoded query pairs. Unknown keys are ignored.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "search" => &mut query.search,
                "tag" => &mut query.tag,
                "pinned" => &mut query.pinned,
                "archived" => &mut query.archived,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// Normalized note filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub search: Option<String>,
    pub tag: Option<String>,
    pub pinned_only: bool,
    pub include_archived: bool,
}

impl From<NoteQuery> for NoteFilter {
    fn from(q: NoteQuery) -> Self {
        Self {
            search: q.search.filter(|s| !s.is_empty()),
            tag: q.tag.filter(|t| !t.is_empty()),
            pinned_only: q.pinned.as_deref() == Some("true"),
            include_archived: q.archived.as_deref() == Some("true"),
        }
    }
}

impl NoteFilter {
    /// In-process equivalent of the SQL the Postgres store builds.
    pub fn matches(&self, note: &Note) -> bool {
        if !self.include_archived && note.is_archived {
            return false;
        }
        if self.pinned_only && !note.is_pinned {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !note.tags.contains(tag.as_str()) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !note.title.to_lowercase().contains(&needle)
                && !note.content.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

/// Escape `%`, `_` and `\` so user text matches literally inside a
/// `LIKE ... ESCAPE '\'` pattern, then wrap it in `%` for substring search.
pub fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(title: &str, content: &str, tags: &str, pinned: bool, archived: bool) -> Note {
        let now = Utc::now();
        Note {
            id: 1,
            title: title.into(),
            content: content.into(),
            content_type: "markdown".into(),
            tags: tags.into(),
            is_pinned: pinned,
            is_archived: archived,
            created_at: now,
            updated_at: now,
        }
    }

    fn filter(query: &str) -> NoteFilter {
        let q: NoteQuery = serde_json::from_str(query).unwrap();
        NoteFilter::from(q)
    }

    #[test]
    fn default_hides_archived_only() {
        let f = NoteFilter::default();
        assert!(f.matches(&note("A", "", "[]", false, false)));
        assert!(f.matches(&note("A", "", "[]", true, false)));
        assert!(!f.matches(&note("A", "", "[]", false, true)));
    }

    #[test]
    fn archived_true_includes_archived() {
        let f = filter(r#"{"archived":"true"}"#);
        assert!(f.matches(&note("A", "", "[]", false, true)));
        assert!(f.matches(&note("A", "", "[]", false, false)));
    }

    #[test]
    fn only_literal_true_counts() {
        let f = filter(r#"{"archived":"1","pinned":"yes"}"#);
        assert!(!f.include_archived);
        assert!(!f.pinned_only);
    }

    #[test]
    fn pinned_restricts() {
        let f = filter(r#"{"pinned":"true"}"#);
        assert!(f.matches(&note("A", "", "[]", true, false)));
        assert!(!f.matches(&note("A", "", "[]", false, false)));
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_content() {
        let f = filter(r#"{"search":"HeLLo"}"#);
        assert!(f.matches(&note("hello there", "", "[]", false, false)));
        assert!(f.matches(&note("A", "say Hello", "[]", false, false)));
        assert!(!f.matches(&note("A", "goodbye", "[]", false, false)));
    }

    #[test]
    fn tag_is_substring_of_blob() {
        let f = filter(r#"{"tag":"go"}"#);
        assert!(f.matches(&note("A", "", r#"["golang"]"#, false, false)));
        assert!(!f.matches(&note("A", "", r#"["rust"]"#, false, false)));
    }

    #[test]
    fn tag_match_is_case_sensitive() {
        let f = filter(r#"{"tag":"Work"}"#);
        assert!(!f.matches(&note("A", "", r#"["work"]"#, false, false)));
    }

    #[test]
    fn empty_params_do_not_restrict() {
        let f = filter(r#"{"search":"","tag":""}"#);
        assert_eq!(f, NoteFilter::default());
    }

    #[test]
    fn filters_compose() {
        let f = filter(r#"{"search":"plan","tag":"work","pinned":"true"}"#);
        assert!(f.matches(&note("Plan", "", r#"["work"]"#, true, false)));
        assert!(!f.matches(&note("Plan", "", r#"["work"]"#, false, false)));
        assert!(!f.matches(&note("Plan", "", r#"["home"]"#, true, false)));
    }

    fn pairs(raw: &[(&str, &str)]) -> NoteQuery {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_param_keeps_first_value() {
        let f = NoteFilter::from(pairs(&[("archived", "true"), ("archived", "false")]));
        assert!(f.include_archived);

        let f = NoteFilter::from(pairs(&[("pinned", "no"), ("pinned", "true")]));
        assert!(!f.pinned_only);

        let q = pairs(&[("search", "first"), ("search", "second"), ("page", "2")]);
        assert_eq!(q.search.as_deref(), Some("first"));
    }

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("abc"), "%abc%");
        assert_eq!(like_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(like_pattern(r"a\b"), r"%a\\b%");
    }
}
