// src/render.rs
//! Plain-text views over fetch state. Pure functions from data to
//! strings; `now` is injected so the posted-time labels are testable.

use chrono::{DateTime, Utc};

use crate::fetcher::FetchState;
use crate::format::{format_salary, relative_time};
use crate::pager::{next_enabled, page_tokens, prev_enabled, PageToken};
use crate::types::job::{Job, JobsPage};

pub const LOADING_MESSAGE: &str = "Loading jobs...";
pub const EMPTY_MESSAGE: &str = "No jobs found. Try adjusting your filters.";
pub const ERROR_MESSAGE: &str = "Failed to load jobs. Run the same command again to retry.";
pub const NOT_FOUND_MESSAGE: &str = "Job not found. It may have been removed.";

/// One job as a summary card. `active` marks the single selected entry.
pub fn render_job_card(job: &Job, active: bool, now: DateTime<Utc>) -> String {
    let marker = if active { "> " } else { "  " };
    let mut lines = vec![
        format!("{}{} — {}", marker, job.title, job.company),
        format!("    {}", job.location),
        format!(
            "    {} | {} | posted {}",
            job.employment_type.label(),
            job.work_arrangement.label(),
            relative_time(&job.created_at, now)
        ),
    ];
    if let Some(salary) = &job.salary {
        lines.push(format!("    {}", format_salary(salary)));
    }
    if let Some(score) = job.match_score {
        lines.push(format!("    match score: {:.0}%", score * 100.0));
    }
    lines.join("\n")
}

/// The list view: headline, cards, and (when there is more than one
/// page) a pager line. The empty state is distinct from loading.
pub fn render_job_list(
    state: &FetchState,
    active_id: Option<&str>,
    now: DateTime<Utc>,
) -> String {
    match state {
        FetchState::Loading => LOADING_MESSAGE.to_string(),
        FetchState::Error(_) => ERROR_MESSAGE.to_string(),
        FetchState::Loaded(page) => render_page(page, active_id, now),
    }
}

fn render_page(page: &JobsPage, active_id: Option<&str>, now: DateTime<Utc>) -> String {
    if page.jobs.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut out = format!("{} jobs found\n\n", page.total);
    for job in &page.jobs {
        let active = active_id == Some(job.id.as_str());
        out.push_str(&render_job_card(job, active, now));
        out.push_str("\n\n");
    }

    // Callers hide the pager entirely for a single page.
    if page.total_pages > 1 {
        out.push_str(&render_pager_line(page.page, page.total_pages));
        out.push('\n');
    }
    out
}

/// e.g. `<  1 ... 4 [5] 6 ... 10  >` with disabled arrows dimmed out.
pub fn render_pager_line(current_page: u32, total_pages: u32) -> String {
    let mut parts = Vec::new();
    parts.push(if prev_enabled(current_page) { "<" } else { " " }.to_string());

    for token in page_tokens(current_page, total_pages) {
        match token {
            PageToken::Ellipsis => parts.push("...".to_string()),
            PageToken::Page(n) if n == current_page => parts.push(format!("[{}]", n)),
            PageToken::Page(n) => parts.push(n.to_string()),
        }
    }

    parts.push(
        if next_enabled(current_page, total_pages) {
            ">"
        } else {
            " "
        }
        .to_string(),
    );
    parts.join(" ")
}

/// Full detail view for a single job.
pub fn render_job_detail(job: &Job, now: DateTime<Utc>) -> String {
    let mut out = format!(
        "{}\n{}\n{}\n{} | {} | posted {}\n",
        job.title,
        job.company,
        job.location,
        job.employment_type.label(),
        job.work_arrangement.label(),
        relative_time(&job.created_at, now)
    );
    if let Some(salary) = &job.salary {
        out.push_str(&format!("{}\n", format_salary(salary)));
    }
    if let Some(score) = job.match_score {
        out.push_str(&format!("match score: {:.0}%\n", score * 100.0));
    }
    if !job.description.is_empty() {
        out.push_str(&format!("\n{}\n", job.description));
    }
    if !job.sources.is_empty() {
        out.push_str("\nListed on:\n");
        for source in &job.sources {
            out.push_str(&format!("  {} — {}\n", source.platform, source.url));
        }
    }
    if !job.apply_link.is_empty() {
        out.push_str(&format!("\nApply: {}\n", job.apply_link));
    }
    out
}
