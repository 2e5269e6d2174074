// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::registration::validation::{PasswordPolicy, ValidationRules};
use knuffel::Decode;
use miette::{IntoDiagnostic, Result};

const CONFIG_FILE_NAME: &str = "config.kdl";
const EMBEDDED_CONFIG: &str = include_str!("../config.kdl");

#[derive(Debug, Decode)]
pub struct ClientConfig {
	#[knuffel(child, unwrap(argument))]
	pub api_base: String,
	#[knuffel(child, unwrap(argument))]
	pub password_min_length: u32,
	#[knuffel(children(name = "password-requirement"))]
	pub password_requirements: Vec<PasswordRequirement>,
}

/// A pattern that must match somewhere in a password for it to be accepted
#[derive(Debug, Decode)]
pub struct PasswordRequirement {
	#[knuffel(argument)]
	pub pattern: String,
}

impl ClientConfig {
	/// Loads the configuration document bundled into the client at build time
	pub fn load() -> Result<Self> {
		Self::parse(EMBEDDED_CONFIG)
	}

	pub fn parse(config_text: &str) -> Result<Self> {
		let config = knuffel::parse(CONFIG_FILE_NAME, config_text).into_diagnostic()?;
		Ok(config)
	}

	pub fn password_policy(&self) -> PasswordPolicy {
		PasswordPolicy {
			min_length: self.password_min_length as usize,
			requirements: self
				.password_requirements
				.iter()
				.map(|requirement| requirement.pattern.clone())
				.collect(),
		}
	}

	/// Compiles the validation rules described by this configuration.
	///
	/// # Errors
	///
	/// Fails when one of the configured password requirements isn't a valid regular expression.
	pub fn validation_rules(&self) -> Result<ValidationRules> {
		ValidationRules::new(&self.password_policy()).into_diagnostic()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn embedded_config_loads() {
		let config = ClientConfig::load().unwrap();
		assert_eq!(config.api_base, "/api");
		assert_eq!(config.password_min_length, 8);
		assert_eq!(config.password_requirements.len(), 2);
		assert!(config.validation_rules().is_ok());
	}

	#[test]
	fn policy_follows_document() {
		let config = ClientConfig::parse(
			"api-base \"https://trails.example\"\npassword-min-length 12\npassword-requirement \"[A-Z]\"\n",
		)
		.unwrap();
		let policy = config.password_policy();
		assert_eq!(policy.min_length, 12);
		assert_eq!(policy.requirements, vec![String::from("[A-Z]")]);
	}

	#[test]
	fn missing_api_base_is_rejected() {
		assert!(ClientConfig::parse("password-min-length 8\n").is_err());
	}

	#[test]
	fn broken_requirement_pattern_is_reported() {
		let config = ClientConfig::parse("api-base \"/api\"\npassword-min-length 8\npassword-requirement \"[a-\"\n").unwrap();
		assert!(config.validation_rules().is_err());
	}
}
