use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::config::SiteConfig;
use crate::data::{STATUS_RECORDS, Stage, StatusRecord};
use crate::i18n::{Key, use_i18n};
use crate::status::{LookupPhase, StatusLookup};

use super::PageHero;

const HERO_IMAGE: &str =
	"https://images.unsplash.com/photo-1586771107445-d3ca888129ff?auto=format&fit=crop&q=80&w=2072";

/// Resolve `id` after the lookup's delay and publish the outcome.
/// A zero delay resolves before returning.
fn run_lookup(lookup: StatusLookup, id: String, phase: RwSignal<LookupPhase>) {
	let finish = move || {
		// The page may have been left while waiting.
		let _ = phase.try_set(lookup.resolve(&id).into());
	};
	if lookup.delay().is_zero() {
		finish();
	} else {
		set_timeout(finish, lookup.delay());
	}
}

fn step_class(step: Stage, current: Stage) -> &'static str {
	if step == current {
		"stage-step is-current"
	} else if step.position() < current.position() {
		"stage-step is-done"
	} else {
		"stage-step"
	}
}

#[component]
fn StageProgress(current: Stage) -> impl IntoView {
	view! {
		<ol class="stage-progress">
			{Stage::ALL
				.into_iter()
				.map(|step| {
					view! {
						<li class=step_class(step, current)>
							<span class="stage-dot"></span>
							<span class="stage-name">{step.label()}</span>
						</li>
					}
				})
				.collect_view()}
		</ol>
	}
}

#[component]
fn ResultCard(record: &'static StatusRecord) -> impl IntoView {
	let i18n = use_i18n();
	let stage_icon = if record.stage.is_final() {
		view! { <IconSvg icon=Icon::FileCheck class="text-primary" /> }.into_any()
	} else {
		view! { <IconSvg icon=Icon::Loader class="spin text-secondary" /> }.into_any()
	};
	view! {
		<div class="status-result">
			<div class="status-result-head">
				<span class="status-id">{format!("ID: {}", record.id)}</span>
				<span class="status-active">
					<span class="pulse-dot"></span>
					{move || i18n.t(Key::StatusActive)}
				</span>
			</div>
			<h3>{record.product_name}</h3>
			<p class="status-company">{record.company_name}</p>
			<div class="status-stage">
				<span class="eyebrow">{move || i18n.t(Key::StatusCurrentStage)}</span>
				<div class="status-stage-name">{stage_icon} {record.stage.label()}</div>
				<StageProgress current=record.stage />
				<div class="status-updated">
					<IconSvg icon=Icon::Clock size=16 />
					<span>{move || format!("{}: {}", i18n.t(Key::StatusLastUpdate), record.last_updated)}</span>
				</div>
			</div>
		</div>
	}
}

#[component]
pub fn StatusPortal() -> impl IntoView {
	let i18n = use_i18n();
	let lookup = StatusLookup::new(
		STATUS_RECORDS,
		expect_context::<SiteConfig>().status_lookup_delay,
	);
	let query = RwSignal::new(String::new());
	let phase = RwSignal::new(LookupPhase::Idle);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if phase.with_untracked(LookupPhase::is_loading) {
			return;
		}
		phase.set(LookupPhase::Loading);
		run_lookup(lookup, query.get_untracked(), phase);
	};
	let disabled =
		move || phase.with(LookupPhase::is_loading) || query.with(|q| q.trim().is_empty());

	view! {
		<div class="page status-portal">
			<PageHero image=HERO_IMAGE alt="Digital Agriculture Status Tracking" class="is-centered tint-gray">
				<div class="hero-icon">
					<IconSvg icon=Icon::Search size=32 />
				</div>
				<h1>{move || i18n.t(Key::StatusTitle)}</h1>
				<p>{move || i18n.t(Key::StatusIntro)}</p>
			</PageHero>

			<div class="container narrow overlap">
				<div class="card status-card">
					<form class="status-form" on:submit=on_submit>
						<label for="registration-id">{move || i18n.t(Key::StatusIdLabel)}</label>
						<input
							id="registration-id"
							type="text"
							autocomplete="off"
							placeholder=move || i18n.t(Key::StatusPlaceholder)
							prop:value=move || query.get()
							on:input=move |ev| query.set(event_target_value(&ev))
						/>
						<button type="submit" class="btn btn-secondary btn-block" disabled=disabled>
							{move || {
								if phase.with(LookupPhase::is_loading) {
									view! { <IconSvg icon=Icon::Loader class="spin" /> }.into_any()
								} else {
									i18n.t(Key::StatusTrack).into_any()
								}
							}}
						</button>
					</form>

					{move || {
						phase
							.with(|p| p.error().map(|err| err.message_key()))
							.map(|key| {
								view! {
									<div class="status-error" role="alert">
										<span class="pulse-dot is-red"></span>
										{move || i18n.t(key)}
									</div>
								}
							})
					}}

					{move || phase.with(LookupPhase::record).map(|record| view! { <ResultCard record=record /> })}
				</div>

				<p class="status-footnote">{move || i18n.t(Key::StatusFootnote)}</p>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;
	use crate::status::LookupError;

	fn instant() -> StatusLookup {
		StatusLookup::new(STATUS_RECORDS, Duration::ZERO)
	}

	#[test]
	fn zero_delay_resolves_immediately() {
		Owner::new().with(|| {
			let phase = RwSignal::new(LookupPhase::Loading);
			run_lookup(instant(), "AGR-2023-001".into(), phase);
			let record = phase.get_untracked().record().unwrap();
			assert_eq!(record.product_name, "SuperPhos 20");
		});
	}

	#[test]
	fn unknown_id_replaces_previous_result_with_error() {
		Owner::new().with(|| {
			let phase = RwSignal::new(LookupPhase::Loading);
			run_lookup(instant(), "agr-2023-002".into(), phase);
			assert!(phase.get_untracked().record().is_some());

			phase.set(LookupPhase::Loading);
			run_lookup(instant(), "AGR-9999-999".into(), phase);
			let shown = phase.get_untracked();
			assert!(shown.record().is_none());
			assert_eq!(
				shown.error().map(ToString::to_string).as_deref(),
				Some("Registration ID not found. Please check and try again.")
			);
			assert!(matches!(shown.error(), Some(LookupError::NotFound { .. })));
		});
	}

	#[test]
	fn progress_marks_earlier_stages_done() {
		assert_eq!(step_class(Stage::Submitted, Stage::EfficacyTesting), "stage-step is-done");
		assert_eq!(step_class(Stage::EfficacyTesting, Stage::EfficacyTesting), "stage-step is-current");
		assert_eq!(step_class(Stage::DecreeIssued, Stage::EfficacyTesting), "stage-step");
	}
}
