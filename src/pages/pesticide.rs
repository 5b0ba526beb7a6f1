use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::data::content::{
	PESTICIDE_ADMIN_REQUIREMENTS, PESTICIDE_CLASSES, PESTICIDE_TECH_REQUIREMENTS,
};

use super::PageHero;

const HERO_IMAGE: &str =
	"https://images.unsplash.com/photo-1532187863486-abf9dbad1b69?auto=format&fit=crop&q=80&w=2070";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
	Administrative,
	Technical,
}

/// Accordion rule: opening one section closes the other; clicking the open one closes it.
fn toggle(open: Option<Section>, clicked: Section) -> Option<Section> {
	if open == Some(clicked) { None } else { Some(clicked) }
}

struct Phase {
	title: &'static str,
	tone: &'static str,
}

const PHASES: [Phase; 4] = [
	Phase {
		title: "Pre-Assessment",
		tone: "tone-muted",
	},
	Phase {
		title: "Multi-Stage Testing",
		tone: "tone-secondary",
	},
	Phase {
		title: "Commission Review",
		tone: "tone-accent",
	},
	Phase {
		title: "Final Outcome",
		tone: "tone-primary",
	},
];

fn phase_body(idx: usize) -> AnyView {
	match idx {
		0 => view! {
			<ul class="phase-list">
				<li>"Label Validation"</li>
				<li>"Import Permit"</li>
			</ul>
		}
		.into_any(),
		1 => view! {
			<div class="phase-tags">
				<span>"Quality Test"</span>
				<span>"Toxicity Test"</span>
				<span>"Efficacy Test"</span>
			</div>
		}
		.into_any(),
		2 => view! { <p>"Panel review by the Pesticide Commission."</p> }.into_any(),
		_ => view! {
			<div class="phase-outcomes">
				<div class="outcome is-success">"Success: Decree"</div>
				<div class="outcome is-rejected">"Rejection: Retry"</div>
			</div>
		}
		.into_any(),
	}
}

#[component]
fn AccordionSection(
	section: Section,
	title: &'static str,
	items: &'static [&'static str],
	bullet: Option<Icon>,
	open: RwSignal<Option<Section>>,
) -> impl IntoView {
	let is_open = move || open.get() == Some(section);
	view! {
		<div class="accordion">
			<button class="accordion-head" on:click=move |_| open.update(|o| *o = toggle(*o, section))>
				<span class="accordion-title">
					{title}
					<span class="accordion-count">{format!("({} Items)", items.len())}</span>
				</span>
				{move || {
					let icon = if is_open() { Icon::ChevronUp } else { Icon::ChevronDown };
					view! { <IconSvg icon=icon /> }
				}}
			</button>
			<Show when=is_open>
				<ul class="accordion-body">
					{items
						.iter()
						.map(|item| {
							let marker = match bullet {
								Some(icon) => view! { <IconSvg icon=icon size=16 /> }.into_any(),
								None => view! { <span class="dot"></span> }.into_any(),
							};
							view! { <li>{marker}{*item}</li> }
						})
						.collect_view()}
				</ul>
			</Show>
		</div>
	}
}

#[component]
pub fn Pesticide() -> impl IntoView {
	let active_tab = RwSignal::new(0usize);
	let open = RwSignal::new(Some(Section::Administrative));

	let tabs = PESTICIDE_CLASSES
		.iter()
		.enumerate()
		.map(|(idx, class)| {
			view! {
				<button
					class=move || if active_tab.get() == idx { "pill is-active" } else { "pill" }
					on:click=move |_| active_tab.set(idx)
				>
					<IconSvg icon=class.icon size=16 />
					{class.title}
				</button>
			}
		})
		.collect_view();

	let active_class = move || {
		PESTICIDE_CLASSES
			.get(active_tab.get())
			.map(|class| {
				view! {
					<h3>{class.title}</h3>
					<p>{class.desc}</p>
				}
			})
	};

	let phases = PHASES
		.iter()
		.enumerate()
		.map(|(idx, phase)| {
			view! {
				<div class=format!("phase-card {}", phase.tone)>
					<span class="phase-label">{format!("Phase {}", idx + 1)}</span>
					<h4>{phase.title}</h4>
					{phase_body(idx)}
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="page pesticide">
			<PageHero image=HERO_IMAGE alt="Lab Research" class="tint-blue">
				<h1>"Pesticide Regulatory Compliance"</h1>
				<p>"Navigate the complex multi-stage testing and commission reviews with our expert guidance."</p>
			</PageHero>

			<div class="container">
				<div class="pill-row">{tabs}</div>
				<div class="card class-summary">{active_class}</div>

				<section class="process-flow">
					<h2>"Advanced Process Flow"</h2>
					<div class="grid grid-4">{phases}</div>
				</section>

				<div class="accordion-stack">
					<AccordionSection
						section=Section::Administrative
						title="Administrative Requirements"
						items=PESTICIDE_ADMIN_REQUIREMENTS
						bullet=None
						open=open
					/>
					<AccordionSection
						section=Section::Technical
						title="Technical Requirements"
						items=PESTICIDE_TECH_REQUIREMENTS
						bullet=Some(Icon::AlertCircle)
						open=open
					/>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accordion_keeps_at_most_one_section_open() {
		let open = Some(Section::Administrative);
		let open = toggle(open, Section::Technical);
		assert_eq!(open, Some(Section::Technical));
		assert_eq!(toggle(open, Section::Technical), None);
		assert_eq!(toggle(None, Section::Administrative), Some(Section::Administrative));
	}

	#[test]
	fn one_tab_per_classification() {
		assert_eq!(PESTICIDE_CLASSES.len(), 5);
		assert_eq!(PHASES.len(), 4);
	}
}
