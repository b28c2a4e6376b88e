//! Session guard.
//!
//! The bearer credential is written by the external login flow into
//! browser storage under a fixed key. This module reads it once at startup
//! into an explicit [`Session`] value that is passed to the API client, and
//! clears it again on logout.

use log::{info, warn};

use crate::config::ViewerConfig;
use crate::error::ViewerError;

/// An authenticated session: an opaque bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
	token: String,
}

impl Session {
	/// Wraps a token. Blank tokens are not a session.
	pub fn new(token: impl Into<String>) -> Option<Self> {
		let token = token.into();
		if token.trim().is_empty() {
			None
		} else {
			Some(Self { token })
		}
	}

	/// Value for the `Authorization` header.
	pub fn authorization(&self) -> String {
		format!("Bearer {}", self.token)
	}
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session").field("token", &"<redacted>").finish()
	}
}

/// Key-value storage holding the credential.
pub trait TokenStore {
	/// Stored value for `key`, if any.
	fn read(&self, key: &str) -> Option<String>;
	/// Deletes `key`. Missing keys are not an error.
	fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
	fn storage() -> Option<web_sys::Storage> {
		web_sys::window()?.local_storage().ok().flatten()
	}
}

impl TokenStore for BrowserStorage {
	fn read(&self, key: &str) -> Option<String> {
		Self::storage()?.get_item(key).ok().flatten()
	}

	fn remove(&self, key: &str) {
		match Self::storage() {
			Some(storage) => {
				if storage.remove_item(key).is_err() {
					warn!("session: could not remove {key} from local storage");
				}
			}
			None => warn!("session: local storage unavailable"),
		}
	}
}

/// A full navigation away from the viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect(
	/// Target URL, absolute or relative to the page.
	pub String,
);

/// Result of activating the guard.
#[derive(Debug, PartialEq)]
pub enum GuardOutcome {
	/// A credential exists; the viewer may start.
	Proceed(Session),
	/// No credential; navigate away and do nothing else.
	Redirect(Redirect),
}

/// Gates startup on the presence of a stored credential.
#[derive(Clone, Debug)]
pub struct SessionGuard {
	token_key: String,
	login_path: String,
}

impl SessionGuard {
	/// Guard using the configured storage key and login page.
	pub fn new(config: &ViewerConfig) -> Self {
		Self {
			token_key: config.token_key.clone(),
			login_path: config.login_path.clone(),
		}
	}

	/// Reads the credential. Without one, logs and asks for a redirect.
	pub fn activate(&self, store: &impl TokenStore) -> GuardOutcome {
		match store.read(&self.token_key).and_then(Session::new) {
			Some(session) => GuardOutcome::Proceed(session),
			None => {
				warn!("session: {}", ViewerError::AuthMissing);
				GuardOutcome::Redirect(self.login_redirect())
			}
		}
	}

	/// Forgets the credential. Always succeeds.
	pub fn logout(&self, store: &impl TokenStore) -> Redirect {
		store.remove(&self.token_key);
		info!("session: logged out");
		self.login_redirect()
	}

	fn login_redirect(&self) -> Redirect {
		Redirect(self.login_path.clone())
	}
}
