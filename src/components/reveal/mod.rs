mod component;
mod state;

pub use component::Reveal;
pub use state::RevealAnimation;
