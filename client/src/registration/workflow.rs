// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::duplicate_check::{CheckOutcome, CheckResolution, DuplicateCheckCoordinator, NicknameCheckTicket};
use super::form::{Field, FormState, RegistrationForm};
use super::validation::{FieldError, FormValidation, ValidationRules};
use crate::backend::{BackendError, NicknameAvailability, RegistrationBackend};
use seoul_trails_shared::messages::user_register::UserRegistration;
use std::cell::RefCell;
use std::fmt;

/// Reasons a submission is stopped before anything is sent to the server
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionBlocked {
	InvalidFields(Vec<FieldError>),
	DuplicateCheckRequired,
}

impl fmt::Display for SubmissionBlocked {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidFields(errors) => write!(f, "{} field(s) need attention", errors.len()),
			Self::DuplicateCheckRequired => write!(f, "Please check whether your nickname is available first."),
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrationError {
	Blocked(SubmissionBlocked),
	Failed(BackendError),
}

impl From<SubmissionBlocked> for RegistrationError {
	fn from(blocked: SubmissionBlocked) -> Self {
		Self::Blocked(blocked)
	}
}

impl From<BackendError> for RegistrationError {
	fn from(error: BackendError) -> Self {
		Self::Failed(error)
	}
}

impl fmt::Display for RegistrationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Blocked(blocked) => write!(f, "{}", blocked),
			Self::Failed(error) => write!(f, "Registration failed: {}", error),
		}
	}
}

/// The sign-up workflow: form values, their validation, the nickname check and the gate in front of registration
#[derive(Debug)]
pub struct RegistrationWorkflow {
	form: FormState,
	rules: ValidationRules,
	duplicate_check: DuplicateCheckCoordinator,
	submit_attempted: bool,
}

impl RegistrationWorkflow {
	pub fn new(rules: ValidationRules) -> Self {
		Self {
			form: FormState::default(),
			rules,
			duplicate_check: DuplicateCheckCoordinator::new(),
			submit_attempted: false,
		}
	}

	/// Records a field edit. Any change to the nickname revokes the last availability check.
	pub fn set_field(&mut self, field: Field, value: String) -> bool {
		let changed = self.form.set_field(field, value);
		if changed {
			log::debug!("Sign-up field {} changed", field.name());
			if field == Field::Nickname {
				self.duplicate_check.reset(self.form.value(Field::Nickname));
			}
		}
		changed
	}

	pub fn snapshot(&self) -> &RegistrationForm {
		self.form.snapshot()
	}

	pub fn validation(&self) -> FormValidation {
		self.rules.validate(self.form.snapshot())
	}

	/// The error to show for a field: only once the user has edited it or tried to submit
	pub fn visible_error(&self, field: Field) -> Option<FieldError> {
		if !self.submit_attempted && !self.form.is_dirty(field) {
			return None;
		}
		self.validation().error(field)
	}

	pub fn has_empty_field(&self) -> bool {
		self.form.has_empty_field()
	}

	pub fn nickname_outcome(&self) -> CheckOutcome {
		self.duplicate_check.outcome_for(self.form.value(Field::Nickname))
	}

	pub fn nickname_message(&self) -> Option<&'static str> {
		self.duplicate_check.message_for(self.form.value(Field::Nickname))
	}

	pub fn begin_duplicate_check(&mut self) -> Option<NicknameCheckTicket> {
		let nickname = self.form.value(Field::Nickname).to_owned();
		self.duplicate_check.begin(&nickname)
	}

	/// Hands a check reply to the coordinator, compared against the nickname as it is now
	pub fn complete_duplicate_check(
		&mut self,
		ticket: NicknameCheckTicket,
		reply: Result<NicknameAvailability, BackendError>,
	) -> CheckResolution {
		self.duplicate_check
			.complete(ticket, self.form.value(Field::Nickname), reply)
	}

	/// Whether a submission would currently go through to the server
	pub fn can_submit(&self) -> bool {
		self.validation().is_valid() && self.duplicate_check.is_available_for(self.form.value(Field::Nickname))
	}

	/// Checks the preconditions for registering and builds the request.
	///
	/// Local validation is checked first, then the nickname check. From here on every field error is shown.
	pub fn prepare_submission(&mut self) -> Result<UserRegistration, SubmissionBlocked> {
		self.submit_attempted = true;

		let validation = self.validation();
		if !validation.is_valid() {
			let errors = validation.errors();
			log::debug!("Sign-up blocked by {} invalid field(s)", errors.len());
			return Err(SubmissionBlocked::InvalidFields(errors));
		}

		let form = self.form.snapshot();
		if !self.duplicate_check.is_available_for(&form.nickname) {
			log::debug!("Sign-up blocked until nickname {} is checked", form.nickname);
			return Err(SubmissionBlocked::DuplicateCheckRequired);
		}

		Ok(UserRegistration {
			email: form.email.clone(),
			password: form.password.clone(),
			nickname: form.nickname.clone(),
		})
	}

	/// Applies the server's answer to a registration. The draft is discarded only on success.
	pub fn finish_submission(&mut self, result: Result<(), BackendError>) -> Result<(), RegistrationError> {
		match result {
			Ok(()) => {
				log::info!("Registered account for {}", self.form.value(Field::Nickname));
				self.form = FormState::default();
				self.duplicate_check = DuplicateCheckCoordinator::new();
				self.submit_attempted = false;
				Ok(())
			}
			Err(error) => {
				log::warn!("Registration failed: {}", error);
				Err(RegistrationError::Failed(error))
			}
		}
	}
}

/// Sends a started check to the backend and hands the reply back to the workflow.
///
/// The workflow isn't borrowed while the request is in flight, so edits made in the meantime are seen when the reply
/// arrives.
pub async fn finish_nickname_check<B: RegistrationBackend>(
	workflow: &RefCell<RegistrationWorkflow>,
	backend: &B,
	ticket: NicknameCheckTicket,
) -> CheckResolution {
	let reply = backend.check_nickname(ticket.nickname()).await;
	workflow.borrow_mut().complete_duplicate_check(ticket, reply)
}

/// Runs a nickname check from start to finish. Returns `None` when there's nothing to check.
pub async fn check_nickname<B: RegistrationBackend>(
	workflow: &RefCell<RegistrationWorkflow>,
	backend: &B,
) -> Option<CheckResolution> {
	let ticket = workflow.borrow_mut().begin_duplicate_check()?;
	Some(finish_nickname_check(workflow, backend, ticket).await)
}

/// Submits the form, registering the account if every precondition holds
pub async fn submit<B: RegistrationBackend>(
	workflow: &RefCell<RegistrationWorkflow>,
	backend: &B,
) -> Result<(), RegistrationError> {
	let registration = workflow.borrow_mut().prepare_submission()?;
	let result = backend.register_user(&registration).await;
	workflow.borrow_mut().finish_submission(result)
}
