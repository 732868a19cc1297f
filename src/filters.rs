// src/filters.rs
//! Sparse search filters and their query-string form.
//!
//! The serialized form is both the shareable URL state and the request
//! query sent to `/api/jobs`, so the keys are the backend's camelCase
//! parameter names. Round-trip law: `FilterState::from_query(state.to_query())`
//! is equivalent to `state`, and absent filters never come back as empty
//! strings.

use crate::types::job::{EmploymentType, WorkArrangement};
use url::form_urlencoded;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub work_arrangement: Option<WorkArrangement>,
    pub platform: Option<String>,
    pub min_score: Option<f64>,
    pub posted_within: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active constraints (the filter-badge count).
    pub fn active_count(&self) -> usize {
        [
            self.keyword.is_some(),
            self.location.is_some(),
            self.employment_type.is_some(),
            self.work_arrangement.is_some(),
            self.platform.is_some(),
            self.min_score.is_some(),
            self.posted_within.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Serialize to (key, value) pairs in a stable order. Absent filters
    /// produce no pair.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(keyword) = &self.keyword {
            pairs.push(("keyword", keyword.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(employment_type) = &self.employment_type {
            pairs.push(("employmentType", employment_type.as_str().to_string()));
        }
        if let Some(work_arrangement) = &self.work_arrangement {
            pairs.push(("workArrangement", work_arrangement.as_str().to_string()));
        }
        if let Some(platform) = &self.platform {
            pairs.push(("platform", platform.clone()));
        }
        if let Some(min_score) = self.min_score {
            pairs.push(("minScore", format_score(min_score)));
        }
        if let Some(posted_within) = &self.posted_within {
            pairs.push(("postedWithin", posted_within.clone()));
        }
        pairs
    }

    /// Serialize to a URL query string (no leading `?`).
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// Parse from a query string. Unknown keys and empty values are
    /// ignored; unparseable enum values drop the constraint rather than
    /// storing garbage.
    pub fn from_query(query: &str) -> Self {
        let mut state = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "keyword" => state.keyword = Some(value.into_owned()),
                "location" => state.location = Some(value.into_owned()),
                "employmentType" => state.employment_type = EmploymentType::parse(&value),
                "workArrangement" => state.work_arrangement = WorkArrangement::parse(&value),
                "platform" => state.platform = Some(value.into_owned()),
                "minScore" => state.min_score = value.parse().ok(),
                "postedWithin" => state.posted_within = Some(value.into_owned()),
                _ => {}
            }
        }
        state
    }
}

/// Scores serialize without a trailing `.0` so `0.7` and `1` both
/// round-trip cleanly.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}

/// A filter set bound to a page number. All filter mutations reset the
/// page to 1 so the user is never left on an out-of-range page.
#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    pub filters: FilterState,
    page: u32,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}

impl JobQuery {
    pub fn new(filters: FilterState) -> Self {
        Self { filters, page: 1 }
    }

    pub fn page(&self) -> u32 {
        self.page.max(1)
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_keyword(&mut self, keyword: Option<String>) {
        self.filters.keyword = non_empty(keyword);
        self.page = 1;
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.filters.location = non_empty(location);
        self.page = 1;
    }

    pub fn set_employment_type(&mut self, employment_type: Option<EmploymentType>) {
        self.filters.employment_type = employment_type;
        self.page = 1;
    }

    pub fn set_work_arrangement(&mut self, work_arrangement: Option<WorkArrangement>) {
        self.filters.work_arrangement = work_arrangement;
        self.page = 1;
    }

    pub fn set_platform(&mut self, platform: Option<String>) {
        self.filters.platform = non_empty(platform);
        self.page = 1;
    }

    pub fn set_min_score(&mut self, min_score: Option<f64>) {
        self.filters.min_score = min_score;
        self.page = 1;
    }

    pub fn set_posted_within(&mut self, posted_within: Option<String>) {
        self.filters.posted_within = non_empty(posted_within);
        self.page = 1;
    }

    /// Query string including the page (only when > 1, matching the URL
    /// the web client produces).
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.filters.to_pairs() {
            serializer.append_pair(key, &value);
        }
        if self.page > 1 {
            serializer.append_pair("page", &self.page.to_string());
        }
        serializer.finish()
    }

    pub fn from_query(query: &str) -> Self {
        let filters = FilterState::from_query(query);
        let mut page = 1;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if key == "page" {
                page = value.parse().unwrap_or(1);
            }
        }
        Self {
            filters,
            page: u32::max(page, 1),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_round_trip() {
        let mut state = FilterState::new();
        state.keyword = Some("rust developer".to_string());
        state.location = Some("Gold Coast".to_string());
        state.employment_type = Some(EmploymentType::FullTime);
        state.work_arrangement = Some(WorkArrangement::Remote);
        state.platform = Some("seek".to_string());
        state.min_score = Some(0.7);
        state.posted_within = Some("1w".to_string());

        let query = state.to_query();
        let parsed = FilterState::from_query(&query);
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_empty_round_trip() {
        let state = FilterState::new();
        assert_eq!(state.to_query(), "");
        assert_eq!(FilterState::from_query(""), state);
    }

    #[test]
    fn test_absent_keys_never_return_as_empty_strings() {
        let parsed = FilterState::from_query("keyword=&location=");
        assert_eq!(parsed.keyword, None);
        assert_eq!(parsed.location, None);
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let parsed = FilterState::from_query("keyword=rust&utm_source=mail");
        assert_eq!(parsed.keyword, Some("rust".to_string()));
        assert_eq!(parsed.active_count(), 1);
    }

    #[test]
    fn test_invalid_enum_value_drops_constraint() {
        let parsed = FilterState::from_query("employmentType=gig");
        assert_eq!(parsed.employment_type, None);
    }

    #[test]
    fn test_values_are_url_encoded() {
        let mut state = FilterState::new();
        state.keyword = Some("c++ & rust".to_string());
        let query = state.to_query();
        assert!(!query.contains(' '));
        assert_eq!(FilterState::from_query(&query).keyword, state.keyword);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut query = JobQuery::new(FilterState::new());
        query.set_page(3);
        assert_eq!(query.page(), 3);

        query.set_location(Some("Perth".to_string()));
        assert_eq!(query.page(), 1);
        assert_eq!(query.filters.location, Some("Perth".to_string()));
    }

    #[test]
    fn test_setting_filter_to_empty_removes_key() {
        let mut query = JobQuery::new(FilterState::new());
        query.set_keyword(Some("rust".to_string()));
        query.set_keyword(Some(String::new()));
        assert_eq!(query.filters.keyword, None);
        assert_eq!(query.to_query(), "");
    }

    #[test]
    fn test_page_only_serialized_above_one() {
        let mut query = JobQuery::new(FilterState::new());
        query.set_keyword(Some("rust".to_string()));
        assert_eq!(query.to_query(), "keyword=rust");

        query.set_page(2);
        assert_eq!(query.to_query(), "keyword=rust&page=2");

        let parsed = JobQuery::from_query("keyword=rust&page=2");
        assert_eq!(parsed, query);
    }

    #[test]
    fn test_min_score_round_trip_whole_and_fractional() {
        let mut state = FilterState::new();
        state.min_score = Some(1.0);
        assert_eq!(state.to_query(), "minScore=1");
        assert_eq!(FilterState::from_query("minScore=1").min_score, Some(1.0));
        state.min_score = Some(0.65);
        let parsed = FilterState::from_query(&state.to_query());
        assert_eq!(parsed.min_score, Some(0.65));
    }
}
