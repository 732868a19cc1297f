// src/cli.rs
use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::ClientConfig;
use crate::core::ApiClient;
use crate::error::ApiError;
use crate::fetcher::{FetchState, JobListFetcher};
use crate::filters::{FilterState, JobQuery};
use crate::render;
use crate::session::{FileTokenStore, TokenStore};
use crate::types::auth::ProfileUpdate;
use crate::types::job::{EmploymentType, WorkArrangement};
use crate::wizard::{Credentials, VerificationCode};

#[derive(Parser)]
#[command(name = "jobseeker")]
#[command(about = "Search and apply for jobs from the 491 JobSeeker backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend base URL; overrides JOBSEEKER_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search job listings with filters
    Search {
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// full_time | part_time | contract | casual | temporary
        #[arg(long)]
        employment_type: Option<String>,
        /// onsite | hybrid | remote
        #[arg(long)]
        work_arrangement: Option<String>,
        #[arg(long)]
        platform: Option<String>,
        /// Minimum AI match score, 0.0 - 1.0
        #[arg(long)]
        min_score: Option<f64>,
        /// e.g. 1d, 3d, 1w, 1m
        #[arg(long)]
        posted_within: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show one job by id
    Show { id: String },
    /// Log in and persist the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new account (step 1 of 3; verify-email follows)
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Verify the emailed code (step 2 of 3; log in afterwards)
    VerifyEmail {
        /// Defaults to the email stored by `register`
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        code: String,
    },
    /// Show the logged-in user
    Whoami,
    /// Update profile fields (step 3 of 3, or any time later)
    UpdateProfile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        visa_type: Option<String>,
        #[arg(long)]
        visa_expiry: Option<String>,
        #[arg(long)]
        linkedin_url: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Log out and clear the local session
    Logout,
    /// Resume upload and AI analysis
    Resume {
        #[command(subcommand)]
        command: ResumeCommand,
    },
}

#[derive(Subcommand)]
pub enum ResumeCommand {
    /// Upload a resume file (pdf, doc, docx)
    Upload { file: PathBuf },
    /// Show resume metadata and any analysis
    Show { resume_id: String },
    /// Run AI analysis on an uploaded resume
    Analyze { resume_id: String },
    /// Delete an uploaded resume
    Delete { resume_id: String },
}

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = ClientConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config = config.with_base_url(api_url);
    }

    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(config.token_path.clone()));
    let client = Arc::new(ApiClient::new(&config, Arc::clone(&tokens))?);

    match cli.command {
        Command::Search {
            keyword,
            location,
            employment_type,
            work_arrangement,
            platform,
            min_score,
            posted_within,
            page,
        } => {
            let mut query = JobQuery::new(FilterState::new());
            query.set_keyword(keyword);
            query.set_location(location);
            query.set_employment_type(parse_employment_type(employment_type.as_deref())?);
            query.set_work_arrangement(parse_work_arrangement(work_arrangement.as_deref())?);
            query.set_platform(platform);
            query.set_min_score(min_score);
            query.set_posted_within(posted_within);
            query.set_page(page);

            let fetcher = JobListFetcher::new(client);
            let state = fetcher.load(query).await;
            println!("{}", render::render_job_list(&state, None, Utc::now()));
            if let FetchState::Error(message) = state {
                anyhow::bail!(message);
            }
        }

        Command::Show { id } => match client.fetch_job(&id).await {
            Ok(job) => println!("{}", render::render_job_detail(&job, Utc::now())),
            Err(ApiError::NotFound) => println!("{}", render::NOT_FOUND_MESSAGE),
            Err(e) => {
                println!("{}", render::ERROR_MESSAGE);
                return Err(e.into());
            }
        },

        Command::Login { email, password } => {
            let data = client.login(&email, &password).await?;
            info!("Logged in as {}", data.user.email);
            println!("✓ Logged in as {}", data.user.email);
        }

        Command::Register {
            email,
            password,
            confirm_password,
        } => {
            // Client-side validation blocks the request entirely.
            let credentials = Credentials {
                email,
                password,
                confirm_password,
            };
            credentials.validate()?;

            let user = client
                .register(&credentials.email, &credentials.password)
                .await?;
            println!("✓ Registered {}", user.email);
            println!("  Check your inbox, then run: jobseeker verify-email --code <code>");
        }

        Command::VerifyEmail { email, code } => {
            let code = VerificationCode { code };
            code.validate()?;

            let email = email
                .or_else(|| tokens.pending_email())
                .context("No pending registration; pass --email")?;
            let user = client.verify_email(&email, &code.code).await?;
            let _ = tokens.clear_pending_email();
            println!("✓ Email verified for {}", user.email);
            println!("  Log in with: jobseeker login --email {} --password <password>", user.email);
        }

        Command::Whoami => {
            let user = client.current_user().await?;
            let name = if user.full_name.is_empty() {
                user.email.clone()
            } else {
                user.full_name.clone()
            };
            println!("{} <{}>", name, user.email);
            if let Some(visa_type) = &user.visa_type {
                println!("  visa: {}", visa_type);
            }
            if let Some(location) = &user.location {
                println!("  location: {}", location);
            }
        }

        Command::UpdateProfile {
            first_name,
            last_name,
            visa_type,
            visa_expiry,
            linkedin_url,
            location,
        } => {
            let update = ProfileUpdate {
                first_name,
                last_name,
                visa_type,
                visa_expiry,
                linkedin_url,
                location,
            };
            let user = client.update_profile(&update).await?;
            println!("✓ Profile updated for {}", user.email);
        }

        Command::Logout => {
            // Local session clears even when the server call fails.
            if let Err(e) = client.logout().await {
                info!("Logout request failed (session cleared anyway): {}", e);
            }
            println!("✓ Logged out");
        }

        Command::Resume { command } => match command {
            ResumeCommand::Upload { file } => {
                let result = client.upload_resume(&file).await?;
                println!("✓ Uploaded {} (id: {})", result.file_name, result.resume_id);
            }
            ResumeCommand::Show { resume_id } => match client.get_resume(&resume_id).await {
                Ok(meta) => {
                    println!("{} (uploaded {})", meta.file_name, meta.upload_date);
                    match meta.analysis {
                        Some(analysis) => {
                            println!("\n{}\n", analysis.summary);
                            for group in &analysis.skills {
                                println!("{}: {}", group.category, group.items.join(", "));
                            }
                            if !analysis.job_keywords.is_empty() {
                                println!("keywords: {}", analysis.job_keywords.join(", "));
                            }
                        }
                        None => println!("No analysis yet. Run: jobseeker resume analyze {}", resume_id),
                    }
                }
                Err(ApiError::NotFound) => println!("Resume not found."),
                Err(e) => return Err(e.into()),
            },
            ResumeCommand::Analyze { resume_id } => {
                let analysis = client.analyze_resume(&resume_id).await?;
                println!("✓ Analysis complete\n\n{}", analysis.summary);
                for group in &analysis.skills {
                    println!("{}: {}", group.category, group.items.join(", "));
                }
            }
            ResumeCommand::Delete { resume_id } => {
                client.delete_resume(&resume_id).await?;
                println!("✓ Deleted resume {}", resume_id);
            }
        },
    }

    Ok(())
}

fn parse_employment_type(value: Option<&str>) -> Result<Option<EmploymentType>> {
    match value {
        None => Ok(None),
        Some(raw) => EmploymentType::parse(raw).map(Some).with_context(|| {
            format!(
                "Invalid employment type '{}'. Use full_time, part_time, contract, casual or temporary",
                raw
            )
        }),
    }
}

fn parse_work_arrangement(value: Option<&str>) -> Result<Option<WorkArrangement>> {
    match value {
        None => Ok(None),
        Some(raw) => WorkArrangement::parse(raw)
            .map(Some)
            .with_context(|| format!("Invalid work arrangement '{}'. Use onsite, hybrid or remote", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_employment_type() {
        assert_eq!(
            parse_employment_type(Some("full_time")).unwrap(),
            Some(EmploymentType::FullTime)
        );
        assert_eq!(parse_employment_type(None).unwrap(), None);
        assert!(parse_employment_type(Some("gig")).is_err());
    }

    #[test]
    fn test_parse_work_arrangement() {
        assert_eq!(
            parse_work_arrangement(Some("remote")).unwrap(),
            Some(WorkArrangement::Remote)
        );
        assert!(parse_work_arrangement(Some("moon")).is_err());
    }

    #[test]
    fn test_cli_parses_search_flags() {
        let cli = Cli::try_parse_from([
            "jobseeker",
            "search",
            "--keyword",
            "rust",
            "--employment-type",
            "full_time",
            "--page",
            "2",
        ])
        .unwrap();
        match cli.command {
            Command::Search { keyword, page, .. } => {
                assert_eq!(keyword, Some("rust".to_string()));
                assert_eq!(page, 2);
            }
            _ => panic!("expected search"),
        }
    }
}
