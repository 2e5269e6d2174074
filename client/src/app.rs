// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::pages::login::LoginView;
use crate::pages::not_found::NotFoundView;
use crate::pages::register::RegistrationView;
use crate::pages::start_redirect::StartRedirectView;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
pub enum AppRoutes {
	#[to("/")]
	Start,
	#[to("/sign-up")]
	SignUp,
	#[to("/login")]
	Login,
	#[not_found]
	NotFound,
}

#[component]
pub fn App<G: Html>(ctx: Scope) -> View<G> {
	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoutes>| {
				view! {
					ctx,
					(match route.get().as_ref() {
						AppRoutes::Start => view! { ctx, StartRedirectView {} },
						AppRoutes::SignUp => view! { ctx, RegistrationView {} },
						AppRoutes::Login => view! { ctx, LoginView {} },
						AppRoutes::NotFound => view! { ctx, NotFoundView {} },
					})
				}
			}
		)
	}
}
