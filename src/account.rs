//! # Account Module
//!
//! Mock authentication for the recipe app: credential checks against an
//! injected [`UserRepository`] and session persistence behind a
//! [`SessionStore`]. Both seams take fakes in tests; the bundled in-memory
//! implementations mirror the app's demo accounts and its JSON session
//! blob.

use anyhow::{Context, Result};
use chrono::Utc;
use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should be valid");
}

/// Minimum accepted password length at sign-up.
pub const MIN_PASSWORD_LENGTH: usize = 6;

// Stock avatar assigned to newly registered accounts
const DEFAULT_AVATAR_URL: &str = "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2";

const SARAH_AVATAR_URL: &str = "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2";

/// A signed-in user as exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

/// A stored account: the public user plus its password.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub user: User,
    pub password: String,
}

/// Errors surfaced to the account screens. The display strings are the
/// user-facing messages.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// A required field was left empty
    MissingFields,
    /// Email field empty on password reset
    MissingEmail,
    /// Email does not look like an address
    InvalidEmail,
    /// Password shorter than [`MIN_PASSWORD_LENGTH`]
    PasswordTooShort,
    /// Email/password pair did not match a stored account
    InvalidCredentials,
    /// Sign-up with an email that already has an account
    EmailAlreadyRegistered,
    /// Password reset for an email with no account
    UnknownEmail,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingFields => write!(f, "Please fill in all fields"),
            AuthError::MissingEmail => write!(f, "Please enter your email address"),
            AuthError::InvalidEmail => write!(f, "Please enter a valid email address"),
            AuthError::PasswordTooShort => write!(
                f,
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            ),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::EmailAlreadyRegistered => {
                write!(f, "An account with this email already exists")
            }
            AuthError::UnknownEmail => write!(f, "No account found with this email address"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Credential store. Emails are matched case-insensitively.
pub trait UserRepository: Send + Sync {
    fn find_by_email(&self, email: &str) -> Option<UserRecord>;
    fn insert(&self, record: UserRecord);
}

/// In-memory [`UserRepository`].
pub struct InMemoryUserStore {
    users: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// A store seeded with the app's two demo accounts.
    pub fn with_demo_accounts() -> Self {
        let store = Self::new();

        store.insert(UserRecord {
            user: User {
                id: "1".to_string(),
                name: "Demo User".to_string(),
                email: "demo@yummio.com".to_string(),
                avatar: Some(DEFAULT_AVATAR_URL.to_string()),
            },
            password: "password123".to_string(),
        });
        store.insert(UserRecord {
            user: User {
                id: "2".to_string(),
                name: "Chef Sarah".to_string(),
                email: "sarah@yummio.com".to_string(),
                avatar: Some(SARAH_AVATAR_URL.to_string()),
            },
            password: "chef2024".to_string(),
        });

        store
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::with_demo_accounts()
    }
}

impl UserRepository for InMemoryUserStore {
    fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let users = self.users.lock().expect("user store lock poisoned");
        let email = email.to_lowercase();

        users
            .iter()
            .find(|record| record.user.email.to_lowercase() == email)
            .cloned()
    }

    fn insert(&self, record: UserRecord) {
        let mut users = self.users.lock().expect("user store lock poisoned");
        users.push(record);
    }
}

/// Persisted session. The payload is the JSON-serialized [`User`], matching
/// the blob the app keeps in device storage.
pub trait SessionStore: Send + Sync {
    fn save(&self, user: &User) -> Result<()>;
    fn load(&self) -> Result<Option<User>>;
    fn clear(&self) -> Result<()>;
}

/// In-memory [`SessionStore`] holding the serialized session blob.
pub struct InMemorySessionStore {
    payload: Mutex<Option<String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            payload: Mutex::new(None),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemorySessionStore {
    fn save(&self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user).context("Failed to serialize session")?;
        let mut payload = self.payload.lock().expect("session store lock poisoned");
        *payload = Some(json);
        Ok(())
    }

    fn load(&self) -> Result<Option<User>> {
        let payload = self.payload.lock().expect("session store lock poisoned");
        payload
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .context("Failed to deserialize session")
    }

    fn clear(&self) -> Result<()> {
        let mut payload = self.payload.lock().expect("session store lock poisoned");
        *payload = None;
        Ok(())
    }
}

/// Sign-in, sign-up, and session management over injected stores.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionStore>,
    current: Mutex<Option<User>>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            users,
            sessions,
            current: Mutex::new(None),
        }
    }

    /// Restore a previously persisted session, if any. Storage errors are
    /// logged and treated as no session.
    pub fn restore_session(&self) -> Option<User> {
        let user = match self.sessions.load() {
            Ok(user) => user,
            Err(err) => {
                warn!("Error checking stored session: {}", err);
                None
            }
        };

        let mut current = self.current.lock().expect("session lock poisoned");
        *current = user.clone();
        user
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.current.lock().expect("session lock poisoned").clone()
    }

    /// Check credentials against the repository and open a session.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        if !EMAIL_REGEX.is_match(email) {
            return Err(AuthError::InvalidEmail);
        }

        let record = self
            .users
            .find_by_email(email)
            .filter(|record| record.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        info!("User {} signed in", record.user.id);
        self.open_session(record.user.clone());

        Ok(record.user)
    }

    /// Register a new account and open a session for it.
    pub fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        if !EMAIL_REGEX.is_match(email) {
            return Err(AuthError::InvalidEmail);
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort);
        }
        if self.users.find_by_email(email).is_some() {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let user = User {
            id: Utc::now().timestamp_millis().to_string(),
            name: name.trim().to_string(),
            email: email.to_lowercase(),
            avatar: Some(DEFAULT_AVATAR_URL.to_string()),
        };

        self.users.insert(UserRecord {
            user: user.clone(),
            password: password.to_string(),
        });

        info!("Registered new user {}", user.id);
        self.open_session(user.clone());

        Ok(user)
    }

    /// Validate a password-reset request. The mock store sends no email; a
    /// matching account simply acknowledges the request.
    pub fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        if !EMAIL_REGEX.is_match(email) {
            return Err(AuthError::InvalidEmail);
        }
        if self.users.find_by_email(email).is_none() {
            return Err(AuthError::UnknownEmail);
        }

        Ok(())
    }

    /// Close the session and drop the persisted blob.
    pub fn sign_out(&self) {
        if let Err(err) = self.sessions.clear() {
            warn!("Sign out error: {}", err);
        }

        let mut current = self.current.lock().expect("session lock poisoned");
        *current = None;
    }

    fn open_session(&self, user: User) {
        if let Err(err) = self.sessions.save(&user) {
            warn!("Error storing session: {}", err);
        }

        let mut current = self.current.lock().expect("session lock poisoned");
        *current = Some(user);
    }
}
