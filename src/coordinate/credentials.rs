//! Repository credentials attached to artifact descriptors.

use std::fmt;

/// User/password pair for authenticated repositories.
///
/// Only constructible when both halves are non-empty, so holding a
/// `Credentials` value always means "authenticate".
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    /// Returns credentials when both `user` and `password` are non-empty.
    #[must_use]
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Option<Self> {
        let user = user.into();
        let password = password.into();
        if user.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self { user, password })
    }

    /// Builds credentials from optional CLI/env values.
    #[must_use]
    pub fn from_parts(user: Option<&str>, password: Option<&str>) -> Option<Self> {
        Self::new(user?, password?)
    }

    /// Repository user name.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Repository password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
