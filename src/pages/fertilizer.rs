use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::data::content::{
	FERTILIZER_ADMIN_REQUIREMENTS, FERTILIZER_STEPS, FERTILIZER_TECH_REQUIREMENTS,
};

use super::PageHero;

const HERO_IMAGE: &str =
	"https://images.unsplash.com/photo-1628352081506-83c43123ed6d?auto=format&fit=crop&q=80&w=2070";

/// Which requirement list the toggle is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Requirements {
	#[default]
	Administrative,
	Technical,
}

impl Requirements {
	fn label(self) -> &'static str {
		match self {
			Requirements::Administrative => "Administrative Requirements",
			Requirements::Technical => "Technical Requirements",
		}
	}

	fn items(self) -> &'static [&'static str] {
		match self {
			Requirements::Administrative => FERTILIZER_ADMIN_REQUIREMENTS,
			Requirements::Technical => FERTILIZER_TECH_REQUIREMENTS,
		}
	}

	fn bullet(self) -> Icon {
		match self {
			Requirements::Administrative => Icon::CheckCircle,
			Requirements::Technical => Icon::PenTool,
		}
	}
}

#[component]
pub fn Fertilizer() -> impl IntoView {
	let view_mode = RwSignal::new(Requirements::default());

	let roadmap = FERTILIZER_STEPS
		.iter()
		.enumerate()
		.map(|(idx, step)| {
			view! {
				<div class="roadmap-step">
					<div class="roadmap-icon">
						<IconSvg icon=step.icon />
					</div>
					<h4>{format!("Step {}", idx + 1)}</h4>
					<p>{step.title}</p>
				</div>
			}
		})
		.collect_view();

	let tabs = [Requirements::Administrative, Requirements::Technical]
		.into_iter()
		.map(|mode| {
			view! {
				<button
					class=move || if view_mode.get() == mode { "toggle-tab is-active" } else { "toggle-tab" }
					on:click=move |_| view_mode.set(mode)
				>
					{mode.label()}
				</button>
			}
		})
		.collect_view();

	let requirement_list = move || {
		let mode = view_mode.get();
		mode.items()
			.iter()
			.map(|item| {
				view! {
					<li class="requirement">
						<IconSvg icon=mode.bullet() size=20 />
						<span>{*item}</span>
					</li>
				}
			})
			.collect_view()
	};

	view! {
		<div class="page fertilizer">
			<PageHero image=HERO_IMAGE alt="Fertilizer and Growth">
				<h1>"Comprehensive Fertilizer Registration"</h1>
				<p>
					"Based on Law Number 12 of 1992 concerning Plant Cultivation Systems. We handle the complexity so you can focus on production."
				</p>
			</PageHero>

			<div class="container overlap">
				<div class="grid grid-2">
					<div class="card accent-top-secondary">
						<h3>"Organic Fertilizer"</h3>
						<p>"Registration for Solid & Liquid formulations, ensuring organic certification compliance."</p>
					</div>
					<div class="card accent-top-primary">
						<h3>"Inorganic Fertilizer"</h3>
						<p>"Macro, Micro, and mixed nutrient compounds. Comprehensive NPK analysis handling."</p>
					</div>
				</div>

				<section class="roadmap">
					<h2>"The Registration Roadmap"</h2>
					<div class="roadmap-steps">{roadmap}</div>
				</section>

				<div class="card requirements-panel">
					<div class="toggle-tabs">{tabs}</div>
					<ul class="requirement-grid">{requirement_list}</ul>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggle_starts_on_administrative_list() {
		assert_eq!(Requirements::default(), Requirements::Administrative);
		assert_eq!(Requirements::default().items().len(), 6);
		assert_eq!(Requirements::Technical.items().len(), 5);
	}
}
