//! session.rs — The single process-wide "current user" flag
//!
//! There are no credentials and no per-client sessions: whoever submits the
//! login form becomes the user for every client until someone else does.

use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(String),
}

impl Session {
    pub fn get(&self) -> Option<&str> {
        match self {
            Self::LoggedIn(name) => Some(name.as_str()),
            Self::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    /// Login form submission: a non-empty name logs in, anything else logs out.
    pub fn set(&mut self, name: &str) {
        if name.is_empty() {
            self.log_out();
        } else {
            self.log_in(name);
        }
    }

    pub fn log_in(&mut self, name: &str) {
        info!("[session] logged in as {:?}", name);
        *self = Self::LoggedIn(name.to_string());
    }

    pub fn log_out(&mut self) {
        if let Self::LoggedIn(name) = self {
            info!("[session] {:?} logged out", name);
        }
        *self = Self::LoggedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mut s = Session::default();
        assert_eq!(s.get(), None);

        s.set("Alice");
        assert_eq!(s.get(), Some("Alice"));
        assert!(s.is_logged_in());

        // a second login replaces the user outright
        s.set("Bob");
        assert_eq!(s, Session::LoggedIn("Bob".into()));

        s.set("");
        assert_eq!(s, Session::LoggedOut);
        assert!(!s.is_logged_in());

        // logging out twice is harmless
        s.log_out();
        assert_eq!(s.get(), None);
    }
}
