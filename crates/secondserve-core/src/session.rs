//! In-memory session state for the logged-in user.
//!
//! The store is an injectable handle rather than process-global state:
//! every component that needs the current identity receives a clone.
//! Sessions live only for the lifetime of the process.

use std::fmt;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::dto::AuthResponse;

/// Role of the authenticated user, as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    KitchenStaff,
    HotelManager,
    Ngo,
}

impl UserRole {
    /// Returns the wire-format name for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::KitchenStaff => "KITCHEN_STAFF",
            UserRole::HotelManager => "HOTEL_MANAGER",
            UserRole::Ngo => "NGO",
        }
    }

    /// Returns a human-readable label for login prompts.
    pub fn display_name(self) -> &'static str {
        match self {
            UserRole::KitchenStaff => "Kitchen Staff",
            UserRole::HotelManager => "Hotel Manager",
            UserRole::Ngo => "NGO Representative",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authenticated identity for this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub role: UserRole,
    pub display_name: String,
    pub email: Option<String>,
    pub organization_name: Option<String>,
}

impl Session {
    /// Builds a session from a successful auth response.
    ///
    /// Returns `None` when the response is missing the fields a session
    /// cannot exist without (token, user id, role).
    pub fn from_auth_response(auth: &AuthResponse) -> Option<Self> {
        Some(Self {
            token: auth.token.clone()?,
            user_id: auth.user_id?,
            role: auth.user_type?,
            display_name: auth.name.clone().unwrap_or_default(),
            email: auth.email.clone(),
            organization_name: auth.organization_name.clone(),
        })
    }
}

/// Shared holder of the current session.
///
/// Cheap to clone; all clones observe the same session. Reads and writes
/// are safe from any thread. None of the operations fail: callers check
/// for an absent session before issuing authenticated calls.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any existing session unconditionally.
    pub fn create(&self, session: Session) {
        *self.inner.write().expect("session lock poisoned") = Some(session);
    }

    /// Returns a copy of the current session, if any.
    pub fn get(&self) -> Option<Session> {
        self.inner.read().expect("session lock poisoned").clone()
    }

    /// Returns the token formatted for the Authorization header.
    pub fn auth_header(&self) -> Option<String> {
        self.get().map(|s| format!("Bearer {}", s.token))
    }

    /// Drops the session. Calling this with no session is a no-op.
    pub fn clear(&self) {
        *self.inner.write().expect("session lock poisoned") = None;
    }

    /// Returns the user id only when logged in as a hotel manager.
    ///
    /// The manager's user id doubles as the hotel id on the backend.
    pub fn hotel_id(&self) -> Option<i64> {
        self.get()
            .filter(|s| s.role == UserRole::HotelManager)
            .map(|s| s.user_id)
    }

    /// Returns the user id only when logged in as an NGO representative.
    pub fn ngo_id(&self) -> Option<i64> {
        self.get()
            .filter(|s| s.role == UserRole::Ngo)
            .map(|s| s.user_id)
    }
}
