// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;

#[component]
pub fn StartRedirectView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating start page redirect view");

	spawn_local_scoped(ctx, async move {
		log::debug!("Redirecting to sign up");
		navigate("/sign-up");
	});

	view! { ctx, }
}
