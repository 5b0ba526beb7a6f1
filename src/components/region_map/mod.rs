mod component;
mod layout;
mod render;
mod selection;
mod state;
mod types;

pub use component::RegionMap;
pub use selection::{PointerKind, Selection, SelectionEvent};
