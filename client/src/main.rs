// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use backend::HttpBackend;
use config::ClientConfig;
use miette::Result;
use registration::validation::ValidationRules;
use sycamore::prelude::*;

mod app;
mod backend;
mod config;
mod page_utils;
mod pages;
mod registration;
use app::App;
use pages::error::{ErrorData, ErrorView};

fn load_settings() -> Result<(ClientConfig, ValidationRules)> {
	let config = ClientConfig::load()?;
	let rules = config.validation_rules()?;
	Ok((config, rules))
}

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let (config, rules) = match load_settings() {
		Ok(settings) => settings,
		Err(error) => {
			log::error!("Failed to load client configuration: {:?}", error);
			sycamore::render(|ctx| {
				provide_context(
					ctx,
					ErrorData::new_with_error("Unable to load: the client configuration is invalid", error),
				);
				view! { ctx, ErrorView {} }
			});
			return;
		}
	};

	log::debug!("Using account API at {}", config.api_base);
	let backend = HttpBackend::new(config.api_base);

	sycamore::render(move |ctx| {
		provide_context(ctx, backend);
		provide_context(ctx, rules);
		view! { ctx, App {} }
	});
}
