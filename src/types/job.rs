// src/types/job.rs
//! Job wire types (backend JSON, snake_case) and the normalized client
//! model. Normalization is a pure, total mapping: unknown enum strings
//! become `Unknown`, missing optionals become defaults. Nothing outside
//! this boundary touches raw wire fields.

use serde::{Deserialize, Serialize};

// ===== Wire types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiJobSource {
    pub platform: String,
    pub job_posting_id: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSalary {
    #[serde(default)]
    pub min: Option<u64>,
    #[serde(default)]
    pub max: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiJob {
    pub _id: String,
    #[serde(default)]
    pub dedup_key: String,
    pub job_title: String,
    pub company_name_normalized: String,
    #[serde(default)]
    pub job_location: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub work_arrangement: WorkArrangement,
    #[serde(default)]
    pub apply_link: String,
    #[serde(default)]
    pub sources: Vec<ApiJobSource>,
    #[serde(default)]
    pub salary: Option<ApiSalary>,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiJobsMeta {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

/// List endpoint envelope: `{ data: [...], meta: {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiJobsResponse {
    pub data: Vec<ApiJob>,
    pub meta: ApiJobsMeta,
}

/// Single-item envelope: `{ data: {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiJobResponse {
    pub data: ApiJob,
}

// ===== Model types =====

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Casual,
    Temporary,
    #[default]
    #[serde(other)]
    Unknown,
}

impl EmploymentType {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full Time",
            EmploymentType::PartTime => "Part Time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Casual => "Casual",
            EmploymentType::Temporary => "Temporary",
            EmploymentType::Unknown => "Unknown",
        }
    }

    /// Wire value used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::PartTime => "part_time",
            EmploymentType::Contract => "contract",
            EmploymentType::Casual => "casual",
            EmploymentType::Temporary => "temporary",
            EmploymentType::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full_time" => Some(EmploymentType::FullTime),
            "part_time" => Some(EmploymentType::PartTime),
            "contract" => Some(EmploymentType::Contract),
            "casual" => Some(EmploymentType::Casual),
            "temporary" => Some(EmploymentType::Temporary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkArrangement {
    Onsite,
    Hybrid,
    Remote,
    #[default]
    #[serde(other)]
    Unknown,
}

impl WorkArrangement {
    pub fn label(&self) -> &'static str {
        match self {
            WorkArrangement::Onsite => "Onsite",
            WorkArrangement::Hybrid => "Hybrid",
            WorkArrangement::Remote => "Remote",
            WorkArrangement::Unknown => "Unknown",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkArrangement::Onsite => "onsite",
            WorkArrangement::Hybrid => "hybrid",
            WorkArrangement::Remote => "remote",
            WorkArrangement::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "onsite" => Some(WorkArrangement::Onsite),
            "hybrid" => Some(WorkArrangement::Hybrid),
            "remote" => Some(WorkArrangement::Remote),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSource {
    pub platform: String,
    pub job_id: String,
    pub url: String,
}

/// Structured pay range. Either bound may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Salary {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub currency: String,
    pub period: SalaryPeriod,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SalaryPeriod {
    Hour,
    Day,
    Month,
    #[default]
    Year,
}

impl SalaryPeriod {
    pub fn suffix(&self) -> &'static str {
        match self {
            SalaryPeriod::Hour => "/hour",
            SalaryPeriod::Day => "/day",
            SalaryPeriod::Month => "/month",
            SalaryPeriod::Year => "/year",
        }
    }

    fn parse(value: &str) -> Self {
        match value {
            "hour" => SalaryPeriod::Hour,
            "day" => SalaryPeriod::Day,
            "month" => SalaryPeriod::Month,
            _ => SalaryPeriod::Year,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub description: String,
    pub employment_type: EmploymentType,
    pub work_arrangement: WorkArrangement,
    pub apply_link: String,
    pub sources: Vec<JobSource>,
    pub salary: Option<Salary>,
    pub match_score: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ApiJob> for Job {
    fn from(api: ApiJob) -> Self {
        Self {
            id: api._id,
            title: api.job_title,
            company: api.company_name_normalized,
            location: api.job_location,
            city: api.city,
            state: api.state,
            country: api.country,
            description: api.job_description,
            employment_type: api.employment_type,
            work_arrangement: api.work_arrangement,
            apply_link: api.apply_link,
            sources: api
                .sources
                .into_iter()
                .map(|s| JobSource {
                    platform: s.platform,
                    job_id: s.job_posting_id,
                    url: s.url,
                })
                .collect(),
            salary: api.salary.map(|s| Salary {
                min: s.min,
                max: s.max,
                currency: s.currency.unwrap_or_else(|| "AUD".to_string()),
                period: s
                    .period
                    .as_deref()
                    .map(SalaryPeriod::parse)
                    .unwrap_or_default(),
            }),
            match_score: api.match_score,
            created_at: api.created_at,
            updated_at: api.updated_at,
        }
    }
}

/// One fetched page of jobs plus pagination metadata, replaced wholesale
/// on every fetch.
#[derive(Debug, Clone)]
pub struct JobsPage {
    pub jobs: Vec<Job>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl From<ApiJobsResponse> for JobsPage {
    fn from(response: ApiJobsResponse) -> Self {
        let meta = response.meta;
        Self {
            jobs: response.data.into_iter().map(Job::from).collect(),
            total: meta.total,
            page: meta.page.max(1),
            limit: meta.limit.max(1),
            // Kept at >= 1 even for an empty result, so pager math never
            // sees a zero denominator.
            total_pages: meta.total_pages.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_wire_job() -> serde_json::Value {
        serde_json::json!({
            "_id": "66f0a1",
            "dedup_key": "acme-rust-dev-sydney",
            "job_title": "Rust Developer",
            "company_name_normalized": "Acme Pty Ltd",
            "job_location": "Sydney, NSW",
            "city": "Sydney",
            "state": "NSW",
            "country": "Australia",
            "job_description": "Build things.",
            "employment_type": "full_time",
            "work_arrangement": "hybrid",
            "apply_link": "https://apply.example.com/1",
            "sources": [
                {"platform": "seek", "job_posting_id": "s-1", "url": "https://seek.example/1"}
            ],
            "created_at": "2026-08-01T00:00:00Z",
            "updated_at": "2026-08-02T00:00:00Z"
        })
    }

    #[test]
    fn test_normalize_job() {
        let api: ApiJob = serde_json::from_value(sample_wire_job()).unwrap();
        let job = Job::from(api);
        assert_eq!(job.id, "66f0a1");
        assert_eq!(job.title, "Rust Developer");
        assert_eq!(job.company, "Acme Pty Ltd");
        assert_eq!(job.employment_type, EmploymentType::FullTime);
        assert_eq!(job.work_arrangement, WorkArrangement::Hybrid);
        assert_eq!(job.sources.len(), 1);
        assert_eq!(job.sources[0].job_id, "s-1");
        assert!(job.salary.is_none());
        assert!(job.match_score.is_none());
    }

    #[test]
    fn test_unknown_enum_values_are_total() {
        let mut value = sample_wire_job();
        value["employment_type"] = "gig_economy".into();
        value["work_arrangement"] = "asteroid".into();
        let api: ApiJob = serde_json::from_value(value).unwrap();
        assert_eq!(api.employment_type, EmploymentType::Unknown);
        assert_eq!(api.work_arrangement, WorkArrangement::Unknown);
        assert_eq!(api.employment_type.label(), "Unknown");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let value = serde_json::json!({
            "_id": "1",
            "job_title": "T",
            "company_name_normalized": "C"
        });
        let api: ApiJob = serde_json::from_value(value).unwrap();
        let job = Job::from(api);
        assert_eq!(job.location, "");
        assert!(job.sources.is_empty());
        assert_eq!(job.employment_type, EmploymentType::Unknown);
    }

    #[test]
    fn test_salary_wire_defaults() {
        let mut value = sample_wire_job();
        value["salary"] = serde_json::json!({"min": 90000, "period": "year"});
        value["match_score"] = serde_json::json!(0.82);
        let api: ApiJob = serde_json::from_value(value).unwrap();
        let job = Job::from(api);
        let salary = job.salary.unwrap();
        assert_eq!(salary.min, Some(90000));
        assert_eq!(salary.max, None);
        assert_eq!(salary.currency, "AUD");
        assert_eq!(salary.period, SalaryPeriod::Year);
        assert_eq!(job.match_score, Some(0.82));
    }

    #[test]
    fn test_jobs_page_total_pages_floor() {
        let response = ApiJobsResponse {
            data: vec![],
            meta: ApiJobsMeta {
                total: 0,
                page: 1,
                limit: 10,
                total_pages: 0,
            },
        };
        let page = JobsPage::from(response);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_list_envelope_parses() {
        let raw = serde_json::json!({
            "data": [sample_wire_job()],
            "meta": {"total": 42, "page": 2, "limit": 10, "totalPages": 5}
        });
        let response: ApiJobsResponse = serde_json::from_value(raw).unwrap();
        let page = JobsPage::from(response);
        assert_eq!(page.jobs.len(), 1);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 5);
    }
}
