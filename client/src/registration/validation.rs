// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::form::{Field, RegistrationForm};
use regex::Regex;
use std::fmt;

/// Local part, `@`, then a domain made of at least two dot-separated labels
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$";

pub type FieldResult = Result<(), FieldError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldErrorKind {
	Required,
	FormatInvalid,
	TooShort { min_length: usize },
	Mismatch,
}

/// A local validation failure for one field of the form
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldError {
	pub field: Field,
	pub kind: FieldErrorKind,
}

impl FieldError {
	pub fn new(field: Field, kind: FieldErrorKind) -> Self {
		Self { field, kind }
	}
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self.field, self.kind) {
			(Field::Email, FieldErrorKind::Required) => write!(f, "Enter your email"),
			(Field::Email, _) => write!(f, "Check the format of your email"),
			(Field::Password, FieldErrorKind::Required) => write!(f, "Enter a password"),
			(Field::Password, FieldErrorKind::TooShort { min_length }) => {
				write!(f, "Passwords must be at least {} characters long", min_length)
			}
			(Field::Password, _) => write!(f, "Check the format of your password"),
			(Field::PasswordConfirm, FieldErrorKind::Required) => write!(f, "Enter your password once more"),
			(Field::PasswordConfirm, _) => write!(f, "The passwords don't match"),
			(Field::Nickname, _) => write!(f, "Enter a nickname"),
		}
	}
}

/// Password rules as set in the client configuration
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PasswordPolicy {
	pub min_length: usize,
	/// Patterns that must each match somewhere in the password
	pub requirements: Vec<String>,
}

impl Default for PasswordPolicy {
	fn default() -> Self {
		Self {
			min_length: 8,
			requirements: vec![String::from("[A-Za-z]"), String::from("[0-9[:punct:]]")],
		}
	}
}

/// The outcome of checking every field of a form snapshot
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormValidation {
	pub email: FieldResult,
	pub password: FieldResult,
	pub password_confirm: FieldResult,
	pub nickname: FieldResult,
}

impl FormValidation {
	pub fn field(&self, field: Field) -> FieldResult {
		match field {
			Field::Email => self.email,
			Field::Password => self.password,
			Field::PasswordConfirm => self.password_confirm,
			Field::Nickname => self.nickname,
		}
	}

	pub fn error(&self, field: Field) -> Option<FieldError> {
		self.field(field).err()
	}

	pub fn errors(&self) -> Vec<FieldError> {
		Field::ALL.iter().filter_map(|field| self.error(*field)).collect()
	}

	pub fn is_valid(&self) -> bool {
		Field::ALL.iter().all(|field| self.field(*field).is_ok())
	}
}

/// Compiled field rules for the sign-up form.
///
/// Every evaluator is pure. Rules that span fields take the whole form so that the dependency is explicit: the
/// confirmation result is a function of both password fields and is current whenever either changes.
#[derive(Clone, Debug)]
pub struct ValidationRules {
	email_pattern: Regex,
	password_min_length: usize,
	password_requirements: Vec<Regex>,
}

impl ValidationRules {
	pub fn new(policy: &PasswordPolicy) -> Result<Self, regex::Error> {
		let email_pattern = Regex::new(EMAIL_PATTERN)?;
		let password_requirements = policy
			.requirements
			.iter()
			.map(|pattern| Regex::new(pattern))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self {
			email_pattern,
			password_min_length: policy.min_length,
			password_requirements,
		})
	}

	pub fn email(&self, email: &str) -> FieldResult {
		if email.is_empty() {
			return Err(FieldError::new(Field::Email, FieldErrorKind::Required));
		}
		if !self.email_pattern.is_match(email) {
			return Err(FieldError::new(Field::Email, FieldErrorKind::FormatInvalid));
		}
		Ok(())
	}

	pub fn password(&self, password: &str) -> FieldResult {
		if password.is_empty() {
			return Err(FieldError::new(Field::Password, FieldErrorKind::Required));
		}
		if password.chars().count() < self.password_min_length {
			return Err(FieldError::new(
				Field::Password,
				FieldErrorKind::TooShort {
					min_length: self.password_min_length,
				},
			));
		}
		if !self
			.password_requirements
			.iter()
			.all(|requirement| requirement.is_match(password))
		{
			return Err(FieldError::new(Field::Password, FieldErrorKind::FormatInvalid));
		}
		Ok(())
	}

	pub fn password_confirm(&self, form: &RegistrationForm) -> FieldResult {
		if form.password_confirm.is_empty() {
			return Err(FieldError::new(Field::PasswordConfirm, FieldErrorKind::Required));
		}
		if form.password_confirm != form.password {
			return Err(FieldError::new(Field::PasswordConfirm, FieldErrorKind::Mismatch));
		}
		Ok(())
	}

	pub fn nickname(&self, nickname: &str) -> FieldResult {
		if nickname.is_empty() {
			return Err(FieldError::new(Field::Nickname, FieldErrorKind::Required));
		}
		Ok(())
	}

	pub fn validate(&self, form: &RegistrationForm) -> FormValidation {
		FormValidation {
			email: self.email(&form.email),
			password: self.password(&form.password),
			password_confirm: self.password_confirm(form),
			nickname: self.nickname(&form.nickname),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rules() -> ValidationRules {
		ValidationRules::new(&PasswordPolicy::default()).unwrap()
	}

	fn kind(result: FieldResult) -> Option<FieldErrorKind> {
		result.err().map(|error| error.kind)
	}

	fn form(email: &str, password: &str, password_confirm: &str, nickname: &str) -> RegistrationForm {
		RegistrationForm {
			email: String::from(email),
			password: String::from(password),
			password_confirm: String::from(password_confirm),
			nickname: String::from(nickname),
		}
	}

	#[test]
	fn email_rules() {
		let rules = rules();
		assert_eq!(kind(rules.email("")), Some(FieldErrorKind::Required));
		assert_eq!(kind(rules.email("walker")), Some(FieldErrorKind::FormatInvalid));
		assert_eq!(kind(rules.email("walker@trails")), Some(FieldErrorKind::FormatInvalid));
		assert_eq!(kind(rules.email("walker@.com")), Some(FieldErrorKind::FormatInvalid));
		assert_eq!(kind(rules.email("walk er@trails.kr")), Some(FieldErrorKind::FormatInvalid));
		assert_eq!(rules.email("a@b.com"), Ok(()));
		assert_eq!(rules.email("walker.kim@mail.seoul.go.kr"), Ok(()));
	}

	#[test]
	fn password_rules_apply_in_order() {
		let rules = rules();
		assert_eq!(kind(rules.password("")), Some(FieldErrorKind::Required));
		assert_eq!(
			kind(rules.password("abc")),
			Some(FieldErrorKind::TooShort { min_length: 8 })
		);
		assert_eq!(kind(rules.password("abcdefgh")), Some(FieldErrorKind::FormatInvalid));
		assert_eq!(kind(rules.password("12345678")), Some(FieldErrorKind::FormatInvalid));
		assert_eq!(rules.password("abcd1234"), Ok(()));
		assert_eq!(rules.password("abcdefg!"), Ok(()));
	}

	#[test]
	fn password_length_counts_characters() {
		let rules = rules();
		// Seven characters, more than eight bytes
		assert_eq!(
			kind(rules.password("산책walk1")),
			Some(FieldErrorKind::TooShort { min_length: 8 })
		);
		assert_eq!(rules.password("산책walk12"), Ok(()));
	}

	#[test]
	fn configured_policy_is_used() {
		let policy = PasswordPolicy {
			min_length: 4,
			requirements: vec![String::from("[A-Z]")],
		};
		let rules = ValidationRules::new(&policy).unwrap();
		assert_eq!(rules.password("Walk"), Ok(()));
		assert_eq!(kind(rules.password("walk")), Some(FieldErrorKind::FormatInvalid));
	}

	#[test]
	fn invalid_requirement_pattern_fails_to_compile() {
		let policy = PasswordPolicy {
			min_length: 8,
			requirements: vec![String::from("(")],
		};
		assert!(ValidationRules::new(&policy).is_err());
	}

	#[test]
	fn confirmation_tracks_both_password_fields() {
		let rules = rules();
		assert_eq!(
			kind(rules.password_confirm(&form("", "abcd1234", "", ""))),
			Some(FieldErrorKind::Required)
		);
		assert_eq!(
			kind(rules.password_confirm(&form("", "abcd1234", "abcd1235", ""))),
			Some(FieldErrorKind::Mismatch)
		);
		assert_eq!(rules.password_confirm(&form("", "abcd1234", "abcd1234", "")), Ok(()));
		// Changing only the password re-opens the mismatch
		assert_eq!(
			kind(rules.password_confirm(&form("", "abcd12345", "abcd1234", ""))),
			Some(FieldErrorKind::Mismatch)
		);
	}

	#[test]
	fn nickname_only_needs_a_value() {
		let rules = rules();
		assert_eq!(kind(rules.nickname("")), Some(FieldErrorKind::Required));
		assert_eq!(rules.nickname("walker1"), Ok(()));
	}

	#[test]
	fn whole_form_validation() {
		let rules = rules();
		let valid = rules.validate(&form("a@b.com", "abcd1234", "abcd1234", "walker1"));
		assert!(valid.is_valid());
		assert!(valid.errors().is_empty());

		let mismatched = rules.validate(&form("a@b.com", "abcd1234", "abcd1235", "walker1"));
		assert!(!mismatched.is_valid());
		assert_eq!(
			mismatched.errors(),
			vec![FieldError::new(Field::PasswordConfirm, FieldErrorKind::Mismatch)]
		);

		let empty = rules.validate(&RegistrationForm::default());
		assert_eq!(empty.errors().len(), 4);
		assert!(empty
			.errors()
			.iter()
			.all(|error| error.kind == FieldErrorKind::Required));
	}

	#[test]
	fn messages_name_the_problem() {
		assert_eq!(
			FieldError::new(Field::PasswordConfirm, FieldErrorKind::Mismatch).to_string(),
			"The passwords don't match"
		);
		assert_eq!(
			FieldError::new(Field::Password, FieldErrorKind::TooShort { min_length: 8 }).to_string(),
			"Passwords must be at least 8 characters long"
		);
		assert_eq!(
			FieldError::new(Field::Nickname, FieldErrorKind::Required).to_string(),
			"Enter a nickname"
		);
	}
}
