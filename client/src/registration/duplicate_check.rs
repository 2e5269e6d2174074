// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::backend::{BackendError, NicknameAvailability};

/// The usable state of a nickname availability check
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CheckOutcome {
	Unchecked,
	Checking,
	Available,
	Taken,
	/// The server couldn't answer; the nickname has to be checked again
	Failed,
}

/// A check outcome together with the nickname it was computed for
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicateCheckState {
	pub nickname: String,
	pub outcome: CheckOutcome,
}

/// Proof that a check was started, carrying the nickname as it was when the request went out
#[derive(Debug)]
pub struct NicknameCheckTicket {
	nickname: String,
}

impl NicknameCheckTicket {
	pub fn nickname(&self) -> &str {
		&self.nickname
	}
}

/// What happened to a reply handed back to the coordinator
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CheckResolution {
	Applied(CheckOutcome),
	/// The nickname changed while the request was in flight, so the reply was dropped
	Stale,
}

/// Coordinates nickname availability checks with the live nickname value.
///
/// Results are tagged with the nickname they were computed for. A tag that doesn't equal the current nickname reads
/// as [`CheckOutcome::Unchecked`], so an earlier check can never vouch for a nickname typed later.
#[derive(Debug)]
pub struct DuplicateCheckCoordinator {
	state: DuplicateCheckState,
}

impl Default for DuplicateCheckCoordinator {
	fn default() -> Self {
		Self::new()
	}
}

impl DuplicateCheckCoordinator {
	pub fn new() -> Self {
		Self {
			state: DuplicateCheckState {
				nickname: String::new(),
				outcome: CheckOutcome::Unchecked,
			},
		}
	}

	pub fn state(&self) -> &DuplicateCheckState {
		&self.state
	}

	/// Discards any previous outcome. Called for every nickname edit.
	pub fn reset(&mut self, nickname: &str) {
		self.state = DuplicateCheckState {
			nickname: nickname.to_owned(),
			outcome: CheckOutcome::Unchecked,
		};
	}

	/// Starts a check for the given nickname.
	///
	/// Empty nicknames can't be checked, and a nickname already being checked isn't sent a second time.
	pub fn begin(&mut self, nickname: &str) -> Option<NicknameCheckTicket> {
		if nickname.is_empty() || self.outcome_for(nickname) == CheckOutcome::Checking {
			return None;
		}
		log::debug!("Checking availability of nickname {}", nickname);
		self.state = DuplicateCheckState {
			nickname: nickname.to_owned(),
			outcome: CheckOutcome::Checking,
		};
		Some(NicknameCheckTicket {
			nickname: nickname.to_owned(),
		})
	}

	/// Records the reply for a check, provided the nickname is still the one that was checked.
	pub fn complete(
		&mut self,
		ticket: NicknameCheckTicket,
		current_nickname: &str,
		reply: Result<NicknameAvailability, BackendError>,
	) -> CheckResolution {
		if ticket.nickname != current_nickname {
			log::debug!(
				"Dropping availability reply for {}; the nickname is now {}",
				ticket.nickname,
				current_nickname
			);
			return CheckResolution::Stale;
		}

		let outcome = match reply {
			Ok(NicknameAvailability::Available) => CheckOutcome::Available,
			Ok(NicknameAvailability::Taken) => CheckOutcome::Taken,
			Err(error) => {
				log::warn!("Nickname availability check failed: {}", error);
				CheckOutcome::Failed
			}
		};
		self.state = DuplicateCheckState {
			nickname: ticket.nickname,
			outcome,
		};
		CheckResolution::Applied(outcome)
	}

	pub fn outcome_for(&self, current_nickname: &str) -> CheckOutcome {
		if self.state.nickname == current_nickname {
			self.state.outcome
		} else {
			CheckOutcome::Unchecked
		}
	}

	pub fn is_available_for(&self, current_nickname: &str) -> bool {
		self.outcome_for(current_nickname) == CheckOutcome::Available
	}

	/// The notice shown under the nickname field
	pub fn message_for(&self, current_nickname: &str) -> Option<&'static str> {
		match self.outcome_for(current_nickname) {
			CheckOutcome::Unchecked => None,
			CheckOutcome::Checking => Some("Checking nickname..."),
			CheckOutcome::Available => Some("This nickname is available."),
			CheckOutcome::Taken => Some("This nickname is already in use."),
			CheckOutcome::Failed => Some("Couldn't check this nickname. Please try again."),
		}
	}
}
