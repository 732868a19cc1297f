// src/session.rs
//! Session persistence. The bearer token (and the email awaiting
//! verification during registration) live here, behind a trait so the
//! request layer never reads ambient global state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Token source injected into the API client. Read at call time, so a
/// login during the process lifetime is picked up by later requests.
pub trait TokenStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str) -> Result<()>;
    fn clear_token(&self) -> Result<()>;

    fn pending_email(&self) -> Option<String>;
    fn set_pending_email(&self, email: &str) -> Result<()>;
    fn clear_pending_email(&self) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pending_verification_email: Option<String>,
}

/// File-backed store, the CLI's analog of browser local storage.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> SessionFile {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => SessionFile::default(),
        }
    }

    fn save(&self, session: &SessionFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        self.load().token
    }

    fn set_token(&self, token: &str) -> Result<()> {
        let mut session = self.load();
        session.token = Some(token.to_string());
        self.save(&session)
    }

    fn clear_token(&self) -> Result<()> {
        let mut session = self.load();
        session.token = None;
        self.save(&session)
    }

    fn pending_email(&self) -> Option<String> {
        self.load().pending_verification_email
    }

    fn set_pending_email(&self, email: &str) -> Result<()> {
        let mut session = self.load();
        session.pending_verification_email = Some(email.to_string());
        self.save(&session)
    }

    fn clear_pending_email(&self) -> Result<()> {
        let mut session = self.load();
        session.pending_verification_email = None;
        self.save(&session)
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: Mutex<SessionFile>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store
            .set_token(token)
            .expect("in-memory store cannot fail");
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.inner.lock().unwrap().token.clone()
    }

    fn set_token(&self, token: &str) -> Result<()> {
        self.inner.lock().unwrap().token = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        self.inner.lock().unwrap().token = None;
        Ok(())
    }

    fn pending_email(&self) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .pending_verification_email
            .clone()
    }

    fn set_pending_email(&self, email: &str) -> Result<()> {
        self.inner.lock().unwrap().pending_verification_email = Some(email.to_string());
        Ok(())
    }

    fn clear_pending_email(&self) -> Result<()> {
        self.inner.lock().unwrap().pending_verification_email = None;
        Ok(())
    }
}
