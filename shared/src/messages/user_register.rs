// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Request data from the client when asking whether a nickname is free
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NicknameCheckRequest {
	pub nickname: String,
}

/// Data from the client when trying to register an account
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UserRegistration {
	pub email: String,
	pub password: String,
	pub nickname: String,
}
