// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use sycamore::prelude::*;

#[derive(Clone)]
pub struct ErrorData {
	message: &'static str,
	error_display: Option<String>,
}

impl ErrorData {
	pub fn new_with_error(message: &'static str, error: impl Display) -> Self {
		let error_display = Some(format!("{}", error));
		Self { message, error_display }
	}
}

#[component]
pub fn ErrorView<G: Html>(ctx: Scope) -> View<G> {
	let error_data = try_use_context::<ErrorData>(ctx).cloned();

	let error_message = if let Some(error) = error_data {
		if let Some(err_disp) = error.error_display {
			return view! {
				ctx,
				div(id="app_error") {
					(error.message)
					br {}
					(err_disp)
				}
			};
		}
		error.message
	} else {
		"A completely unknown error occurred"
	};

	view! {
		ctx,
		div(id="app_error") { (error_message) }
	}
}
