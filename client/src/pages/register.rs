// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::backend::HttpBackend;
use crate::page_utils::{set_page_title, show_alert};
use crate::registration::duplicate_check::{CheckOutcome, CheckResolution};
use crate::registration::form::Field;
use crate::registration::validation::ValidationRules;
use crate::registration::workflow::{
	finish_nickname_check, submit, RegistrationError, RegistrationWorkflow, SubmissionBlocked,
};
use std::cell::RefCell;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

/// Notes that the workflow changed so views derived from it update
fn bump_revision(revision: &Signal<u32>) {
	revision.set(revision.get_untracked().wrapping_add(1));
}

/// Creates the signal an input binds to and forwards every edit into the workflow
fn bind_field<'a>(
	ctx: Scope<'a>,
	workflow: &'a RefCell<RegistrationWorkflow>,
	revision: &'a Signal<u32>,
	field: Field,
) -> &'a Signal<String> {
	let value_signal = create_signal(ctx, String::new());
	create_effect(ctx, move || {
		let value = (*value_signal.get()).clone();
		if workflow.borrow_mut().set_field(field, value) {
			bump_revision(revision);
		}
	});
	value_signal
}

fn field_error<'a>(
	ctx: Scope<'a>,
	workflow: &'a RefCell<RegistrationWorkflow>,
	revision: &'a Signal<u32>,
	field: Field,
) -> &'a ReadSignal<Option<String>> {
	create_memo(ctx, move || {
		revision.track();
		workflow.borrow().visible_error(field).map(|error| error.to_string())
	})
}

#[derive(Prop)]
pub struct FieldErrorProps<'a> {
	error: &'a ReadSignal<Option<String>>,
}

#[component]
pub fn FieldErrorMessage<'a, G: Html>(ctx: Scope<'a>, props: FieldErrorProps<'a>) -> View<G> {
	view! {
		ctx,
		(
			if let Some(message) = (*props.error.get()).clone() {
				view! {
					ctx,
					span(class="input_error") { (message) }
				}
			} else {
				view! { ctx, }
			}
		)
	}
}

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	set_page_title("Sign Up | Seoul Trails");

	let backend: &HttpBackend = use_context(ctx);
	let rules: &ValidationRules = use_context(ctx);
	let workflow = create_ref(ctx, RefCell::new(RegistrationWorkflow::new(rules.clone())));
	let revision = create_signal(ctx, 0_u32);

	let email_signal = bind_field(ctx, workflow, revision, Field::Email);
	let password_signal = bind_field(ctx, workflow, revision, Field::Password);
	let password_confirm_signal = bind_field(ctx, workflow, revision, Field::PasswordConfirm);
	let nickname_signal = bind_field(ctx, workflow, revision, Field::Nickname);

	let email_error = field_error(ctx, workflow, revision, Field::Email);
	let password_error = field_error(ctx, workflow, revision, Field::Password);
	let password_confirm_error = field_error(ctx, workflow, revision, Field::PasswordConfirm);
	let nickname_error = field_error(ctx, workflow, revision, Field::Nickname);

	let check_disabled_signal = create_memo(ctx, move || {
		revision.track();
		nickname_signal.get().is_empty() || workflow.borrow().nickname_outcome() == CheckOutcome::Checking
	});
	let nickname_notice_signal = create_memo(ctx, move || {
		revision.track();
		workflow.borrow().nickname_message()
	});
	let nickname_notice_class_signal = create_memo(ctx, move || {
		revision.track();
		match workflow.borrow().nickname_outcome() {
			CheckOutcome::Unchecked => "alert_text",
			CheckOutcome::Available => "alert_text show available",
			_ => "alert_text show",
		}
	});
	let submit_disabled_signal = create_memo(ctx, move || {
		revision.track();
		workflow.borrow().has_empty_field()
	});
	let submit_class_signal = create_memo(ctx, move || {
		revision.track();
		if workflow.borrow().can_submit() {
			"submit_button ready"
		} else {
			"submit_button"
		}
	});

	let check_handler = move |_event: WebEvent| {
		let ticket = workflow.borrow_mut().begin_duplicate_check();
		let Some(ticket) = ticket else {
			return;
		};
		bump_revision(revision);

		spawn_local_scoped(ctx, async move {
			let resolution = finish_nickname_check(workflow, backend, ticket).await;
			bump_revision(revision);
			if resolution == CheckResolution::Applied(CheckOutcome::Failed) {
				show_alert("Couldn't check whether this nickname is available. Please try again.");
			}
		});
	};

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		spawn_local_scoped(ctx, async move {
			let result = submit(workflow, backend).await;
			bump_revision(revision);
			match result {
				Ok(()) => {
					show_alert("Welcome! Your account has been created.");
					navigate("/login");
				}
				// Field errors are already on screen
				Err(RegistrationError::Blocked(SubmissionBlocked::InvalidFields(_))) => (),
				Err(error) => show_alert(&error.to_string()),
			}
		});
	};

	view! {
		ctx,
		div(id="sign_up") {
			h1 { "Sign Up" }
			p(class="sign_up_intro") {
				"Walk Seoul's most charming trails with us, and discover and share walking courses of your own."
			}
			form(id="sign_up_form", on:submit=form_submission_handler) {
				input(id="sign_up_email", type="email", placeholder="Email", bind:value=email_signal)
				FieldErrorMessage(error=email_error)
				input(id="sign_up_password", type="password", placeholder="Password", bind:value=password_signal)
				FieldErrorMessage(error=password_error)
				input(
					id="sign_up_password_confirm",
					type="password",
					placeholder="Confirm password",
					bind:value=password_confirm_signal
				)
				FieldErrorMessage(error=password_confirm_error)
				div(class="sign_up_nickname") {
					input(id="sign_up_nickname", type="text", placeholder="Nickname", bind:value=nickname_signal)
					button(type="button", disabled=*check_disabled_signal.get(), on:click=check_handler) {
						"Check availability"
					}
				}
				FieldErrorMessage(error=nickname_error)
				div(class=*nickname_notice_class_signal.get()) {
					((*nickname_notice_signal.get()).unwrap_or(""))
				}
				button(type="submit", class=*submit_class_signal.get(), disabled=*submit_disabled_signal.get()) {
					"Sign up"
				}
			}
		}
	}
}
