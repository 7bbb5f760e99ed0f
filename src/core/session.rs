// src/core/session.rs
use thiserror::Error;

use crate::models::LoginOutcome;
use crate::store::{CredentialStore, Credentials, StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// In-memory login state backed by a credential file.
pub struct LoginSession {
    store: CredentialStore,
    credentials: Credentials,
    history: Vec<String>,
}

impl LoginSession {
    pub fn open(store: CredentialStore) -> Result<Self> {
        let credentials = store.load()?;
        let history = credentials.identifiers().map(String::from).collect();
        Ok(Self {
            store,
            credentials,
            history,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Emails seen so far, stored ones first, then new ones in the order remembered.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn autofill(&self, email: &str) -> Option<&str> {
        self.credentials.lookup(email)
    }

    /// Check `password` against the stored secret for `email`. With `remember`
    /// set, the pair is saved whether or not it matched, which also serves as
    /// "set or change password".
    pub fn login(&mut self, email: &str, password: &str, remember: bool) -> Result<LoginOutcome> {
        if email.is_empty() || password.is_empty() {
            return Err(SessionError::Validation(
                "Please enter both email and password".to_string(),
            ));
        }

        let authenticated = self.credentials.lookup(email) == Some(password);
        if authenticated {
            log::info!("Login succeeded for {}", email);
        } else {
            log::warn!("Login failed for {}", email);
        }

        let mut outcome = LoginOutcome {
            authenticated,
            remembered: false,
            new_identifier: false,
        };

        if remember {
            let updated = self.credentials.upsert(email, password);
            self.store.save(&updated)?;
            self.credentials = updated;
            outcome.remembered = true;

            if !self.history.iter().any(|e| e == email) {
                self.history.push(email.to_string());
                outcome.new_identifier = true;
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session_in(dir: &TempDir) -> LoginSession {
        LoginSession::open(CredentialStore::new(dir.path().join("credentials.json"))).unwrap()
    }

    #[test]
    fn history_starts_from_stored_identifiers() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("credentials.json"));
        let creds: Credentials = [("b@x.com", "2"), ("a@x.com", "1")].into_iter().collect();
        store.save(&creds).unwrap();

        let session = LoginSession::open(store).unwrap();
        assert_eq!(session.history(), ["a@x.com", "b@x.com"]);
        assert_eq!(session.autofill("a@x.com"), Some("1"));
        assert_eq!(session.autofill("c@x.com"), None);
    }

    #[test]
    fn empty_fields_are_rejected_without_saving() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);

        assert!(matches!(session.login("", "pw", true), Err(SessionError::Validation(_))));
        assert!(matches!(session.login("u@e.com", "", true), Err(SessionError::Validation(_))));
        assert!(!dir.path().join("credentials.json").exists());
        assert!(session.history().is_empty());
    }

    #[test]
    fn unknown_user_without_remember_is_not_authenticated() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);

        let outcome = session.login("u@e.com", "Secret1!", false).unwrap();
        assert!(!outcome.authenticated);
        assert!(!outcome.remembered);
        assert!(session.credentials().is_empty());
    }

    #[test]
    fn remember_persists_and_next_login_authenticates() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);

        let first = session.login("u@e.com", "Secret1!", true).unwrap();
        assert!(!first.authenticated);
        assert!(first.remembered);
        assert!(first.new_identifier);

        let second = session.login("u@e.com", "Secret1!", false).unwrap();
        assert!(second.authenticated);

        let reopened = session_in(&dir);
        assert_eq!(reopened.autofill("u@e.com"), Some("Secret1!"));
    }

    #[test]
    fn wrong_password_with_remember_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        session.login("u@e.com", "p1", true).unwrap();

        let outcome = session.login("u@e.com", "p2", true).unwrap();
        assert!(!outcome.authenticated);
        assert!(outcome.remembered);
        assert!(!outcome.new_identifier);
        assert_eq!(session.history(), ["u@e.com"]);
        assert_eq!(session_in(&dir).autofill("u@e.com"), Some("p2"));
    }

    #[test]
    fn malformed_store_fails_to_open() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("credentials.json"), "[1, 2]").unwrap();
        let result = LoginSession::open(CredentialStore::new(dir.path().join("credentials.json")));
        assert!(matches!(result, Err(SessionError::Store(StoreError::Parse { .. }))));
    }
}
