// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::window;

pub fn set_page_title(new_title: &str) {
	if let Some(window) = window() {
		if let Some(document) = window.document() {
			document.set_title(new_title);
		}
	}
}

/// Shows a blocking browser alert with the given message
pub fn show_alert(message: &str) {
	if let Some(window) = window() {
		if let Err(error) = window.alert_with_message(message) {
			log::warn!("Failed to show alert: {:?}", error);
		}
	}
}
