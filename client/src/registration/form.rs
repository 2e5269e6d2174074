// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashSet;

/// The inputs of the sign-up form, in display order
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
	Email,
	Password,
	PasswordConfirm,
	Nickname,
}

impl Field {
	pub const ALL: [Field; 4] = [Field::Email, Field::Password, Field::PasswordConfirm, Field::Nickname];

	pub fn name(self) -> &'static str {
		match self {
			Self::Email => "email",
			Self::Password => "password",
			Self::PasswordConfirm => "password_confirm",
			Self::Nickname => "nickname",
		}
	}
}

/// The draft a user fills out while signing up
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistrationForm {
	pub email: String,
	pub password: String,
	pub password_confirm: String,
	pub nickname: String,
}

impl RegistrationForm {
	pub fn value(&self, field: Field) -> &str {
		match field {
			Field::Email => &self.email,
			Field::Password => &self.password,
			Field::PasswordConfirm => &self.password_confirm,
			Field::Nickname => &self.nickname,
		}
	}

	fn value_mut(&mut self, field: Field) -> &mut String {
		match field {
			Field::Email => &mut self.email,
			Field::Password => &mut self.password,
			Field::PasswordConfirm => &mut self.password_confirm,
			Field::Nickname => &mut self.nickname,
		}
	}
}

/// Holds the current form values and which fields the user has edited.
///
/// Storage only; checking the values is the job of [`ValidationRules`](super::validation::ValidationRules).
#[derive(Debug, Default)]
pub struct FormState {
	values: RegistrationForm,
	dirty: HashSet<Field>,
}

impl FormState {
	/// Records a new value for a field, returning whether anything changed.
	///
	/// Writing the value a field already holds leaves it untouched and doesn't mark it dirty.
	pub fn set_field(&mut self, field: Field, value: String) -> bool {
		let current = self.values.value_mut(field);
		if *current == value {
			return false;
		}
		*current = value;
		self.dirty.insert(field);
		true
	}

	pub fn snapshot(&self) -> &RegistrationForm {
		&self.values
	}

	pub fn value(&self, field: Field) -> &str {
		self.values.value(field)
	}

	pub fn is_dirty(&self, field: Field) -> bool {
		self.dirty.contains(&field)
	}

	pub fn has_empty_field(&self) -> bool {
		Field::ALL.iter().any(|field| self.value(*field).is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_empty_and_clean() {
		let state = FormState::default();
		assert_eq!(state.snapshot(), &RegistrationForm::default());
		assert!(Field::ALL.iter().all(|field| !state.is_dirty(*field)));
		assert!(state.has_empty_field());
	}

	#[test]
	fn setting_a_value_marks_only_that_field() {
		let mut state = FormState::default();
		assert!(state.set_field(Field::Email, String::from("a@b.com")));
		assert_eq!(state.value(Field::Email), "a@b.com");
		assert!(state.is_dirty(Field::Email));
		assert!(!state.is_dirty(Field::Password));
	}

	#[test]
	fn rewriting_the_same_value_is_not_an_edit() {
		let mut state = FormState::default();
		assert!(!state.set_field(Field::Nickname, String::new()));
		assert!(!state.is_dirty(Field::Nickname));

		state.set_field(Field::Nickname, String::from("walker1"));
		assert!(!state.set_field(Field::Nickname, String::from("walker1")));
	}

	#[test]
	fn clearing_a_field_stays_dirty() {
		let mut state = FormState::default();
		state.set_field(Field::Password, String::from("abcd1234"));
		assert!(state.set_field(Field::Password, String::new()));
		assert!(state.is_dirty(Field::Password));
		assert_eq!(state.snapshot().password, "");
	}

	#[test]
	fn full_form_has_no_empty_field() {
		let mut state = FormState::default();
		for (field, value) in Field::ALL.into_iter().zip(["a@b.com", "abcd1234", "abcd1234", "walker1"]) {
			state.set_field(field, String::from(value));
		}
		assert!(!state.has_empty_field());
		assert_eq!(state.snapshot().password_confirm, "abcd1234");
	}
}
