// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use seoul_trails_shared::messages::user_register::{NicknameCheckRequest, UserRegistration};
use std::fmt;

const NICKNAME_CHECK_PATH: &str = "users/nickname-check";
const REGISTER_PATH: &str = "users";

const STATUS_OK: u16 = 200;
const STATUS_CONFLICT: u16 = 409;

/// The backend's answer to a nickname availability query
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NicknameAvailability {
	Available,
	Taken,
}

/// Errors that can occur while talking to the account backend
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BackendError {
	Request(String),
	Status(u16),
}

impl fmt::Display for BackendError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Request(error) => write!(f, "Failed to reach the server: {}", error),
			Self::Status(status) => write!(f, "The server responded with status {}", status),
		}
	}
}

impl From<gloo_net::Error> for BackendError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error.to_string())
	}
}

/// The two account operations the sign-up flow needs from the server.
///
/// Futures are local since everything runs on the browser's event loop.
pub trait RegistrationBackend {
	fn check_nickname<'a>(&'a self, nickname: &'a str) -> LocalBoxFuture<'a, Result<NicknameAvailability, BackendError>>;

	fn register_user<'a>(&'a self, registration: &'a UserRegistration) -> LocalBoxFuture<'a, Result<(), BackendError>>;
}

/// Talks to the account API over HTTP with JSON bodies
#[derive(Clone, Debug)]
pub struct HttpBackend {
	api_base: String,
}

impl HttpBackend {
	pub fn new(api_base: impl Into<String>) -> Self {
		Self {
			api_base: api_base.into(),
		}
	}

	fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.api_base.trim_end_matches('/'), path)
	}
}

impl RegistrationBackend for HttpBackend {
	fn check_nickname<'a>(&'a self, nickname: &'a str) -> LocalBoxFuture<'a, Result<NicknameAvailability, BackendError>> {
		async move {
			let body = NicknameCheckRequest {
				nickname: nickname.to_owned(),
			};
			let response = Request::post(&self.endpoint(NICKNAME_CHECK_PATH))
				.json(&body)?
				.send()
				.await?;
			match response.status() {
				STATUS_OK => Ok(NicknameAvailability::Available),
				STATUS_CONFLICT => Ok(NicknameAvailability::Taken),
				status => Err(BackendError::Status(status)),
			}
		}
		.boxed_local()
	}

	fn register_user<'a>(&'a self, registration: &'a UserRegistration) -> LocalBoxFuture<'a, Result<(), BackendError>> {
		async move {
			let response = Request::post(&self.endpoint(REGISTER_PATH))
				.json(registration)?
				.send()
				.await?;
			if response.ok() {
				Ok(())
			} else {
				Err(BackendError::Status(response.status()))
			}
		}
		.boxed_local()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoints_join_cleanly() {
		let backend = HttpBackend::new("/api/");
		assert_eq!(backend.endpoint(NICKNAME_CHECK_PATH), "/api/users/nickname-check");

		let backend = HttpBackend::new("https://trails.example/api");
		assert_eq!(backend.endpoint(REGISTER_PATH), "https://trails.example/api/users");
	}

	#[test]
	fn errors_describe_the_failure() {
		assert_eq!(
			BackendError::Status(500).to_string(),
			"The server responded with status 500"
		);
	}
}
