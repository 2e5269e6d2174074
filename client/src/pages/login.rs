// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_utils::set_page_title;
use sycamore::prelude::*;

/// Where the sign-up flow hands off once an account exists
#[component]
pub fn LoginView<G: Html>(ctx: Scope) -> View<G> {
	set_page_title("Log In | Seoul Trails");

	view! {
		ctx,
		div(id="login") {
			h1 {
				"Log In"
			}
			p {
				"Log in with the email and password you signed up with."
			}
			p {
				"Don't have an account yet? "
				a(href="/sign-up") {
					"Sign up"
				}
			}
		}
	}
}
