// src/wizard.rs
//! Multi-step registration flow as an explicit state machine:
//! Credentials -> VerifyEmail -> Profile -> Complete. Each step validates
//! its input bundle before the transition; validation failures are
//! field-scoped and never reach the network.

use crate::error::ValidationError;
use crate::types::auth::ProfileUpdate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Credentials,
    VerifyEmail,
    Profile,
    Complete,
}

/// Step 1 bundle: email, password, confirmation.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_plausible_email(&self.email) {
            return Err(ValidationError::new("email", "Enter a valid email address"));
        }
        if self.password.len() < 8 {
            return Err(ValidationError::new(
                "password",
                "Password must be at least 8 characters",
            ));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::new(
                "confirm_password",
                "Passwords do not match",
            ));
        }
        Ok(())
    }
}

/// Step 2 bundle: the emailed verification code.
#[derive(Debug, Clone, Default)]
pub struct VerificationCode {
    pub code: String,
}

impl VerificationCode {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.code.len() != 6 || !self.code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(
                "code",
                "Verification code is 6 digits",
            ));
        }
        Ok(())
    }
}

/// Step 3 bundle: optional profile fields.
#[derive(Debug, Clone, Default)]
pub struct ProfileInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub visa_type: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
}

impl ProfileInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.linkedin_url {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(ValidationError::new(
                    "linkedin_url",
                    "LinkedIn URL must start with http(s)://",
                ));
            }
        }
        Ok(())
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            visa_type: self.visa_type.clone(),
            visa_expiry: None,
            linkedin_url: self.linkedin_url.clone(),
            location: self.location.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RegistrationWizard {
    credentials: Option<Credentials>,
    code: Option<VerificationCode>,
    profile: Option<ProfileInput>,
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step, derived from which bundles have been accepted.
    pub fn step(&self) -> Step {
        match (&self.credentials, &self.code, &self.profile) {
            (None, _, _) => Step::Credentials,
            (Some(_), None, _) => Step::VerifyEmail,
            (Some(_), Some(_), None) => Step::Profile,
            (Some(_), Some(_), Some(_)) => Step::Complete,
        }
    }

    pub fn submit_credentials(&mut self, credentials: Credentials) -> Result<(), ValidationError> {
        credentials.validate()?;
        self.credentials = Some(credentials);
        Ok(())
    }

    pub fn submit_code(&mut self, code: VerificationCode) -> Result<(), ValidationError> {
        debug_assert_eq!(self.step(), Step::VerifyEmail);
        code.validate()?;
        self.code = Some(code);
        Ok(())
    }

    pub fn submit_profile(&mut self, profile: ProfileInput) -> Result<(), ValidationError> {
        debug_assert_eq!(self.step(), Step::Profile);
        profile.validate()?;
        self.profile = Some(profile);
        Ok(())
    }

    /// Step backward, discarding the most recent accepted bundle.
    pub fn back(&mut self) {
        match self.step() {
            Step::Credentials => {}
            Step::VerifyEmail => self.credentials = None,
            Step::Profile => self.code = None,
            Step::Complete => self.profile = None,
        }
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn code(&self) -> Option<&VerificationCode> {
        self.code.as_ref()
    }

    pub fn profile(&self) -> Option<&ProfileInput> {
        self.profile.as_ref()
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}
