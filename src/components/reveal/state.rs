/// Fraction of the block that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
	#[default]
	Hidden,
	Visible,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealAnimation {
	#[default]
	FadeUp,
	FadeIn,
	ScaleIn,
	SlideLeft,
	SlideRight,
}

impl RevealAnimation {
	pub fn class_name(self) -> &'static str {
		match self {
			RevealAnimation::FadeUp => "reveal-fade-up",
			RevealAnimation::FadeIn => "reveal-fade-in",
			RevealAnimation::ScaleIn => "reveal-scale-in",
			RevealAnimation::SlideLeft => "reveal-slide-left",
			RevealAnimation::SlideRight => "reveal-slide-right",
		}
	}
}

/// One-shot Hidden -> Visible switch for a single block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
	visibility: Visibility,
}

impl RevealState {
	pub fn visibility(&self) -> Visibility {
		self.visibility
	}

	pub fn is_visible(&self) -> bool {
		self.visibility() == Visibility::Visible
	}

	/// Returns `true` only on the call that actually reveals the block.
	pub fn enter_viewport(&mut self) -> bool {
		match self.visibility {
			Visibility::Hidden => {
				self.visibility = Visibility::Visible;
				true
			}
			Visibility::Visible => false,
		}
	}

	pub fn class_list(&self, animation: RevealAnimation, extra: &str) -> String {
		let mut classes = format!("reveal {}", animation.class_name());
		if self.is_visible() {
			classes.push_str(" is-visible");
		}
		if !extra.is_empty() {
			classes.push(' ');
			classes.push_str(extra);
		}
		classes
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_hidden() {
		let state = RevealState::default();
		assert_eq!(state.visibility(), Visibility::Hidden);
		assert_eq!(
			state.class_list(RevealAnimation::FadeUp, ""),
			"reveal reveal-fade-up"
		);
	}

	#[test]
	fn reveals_exactly_once() {
		let mut state = RevealState::default();
		let transitions = (0..5).filter(|_| state.enter_viewport()).count();
		assert_eq!(transitions, 1);
		assert!(state.is_visible());
	}

	#[test]
	fn visible_class_list_keeps_extra_classes() {
		let mut state = RevealState::default();
		state.enter_viewport();
		assert_eq!(
			state.class_list(RevealAnimation::SlideRight, "col-span-2"),
			"reveal reveal-slide-right is-visible col-span-2"
		);
	}
}
