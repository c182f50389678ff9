//! Value objects - immutable types that represent domain concepts

mod entity_id;
mod generated_image;
mod tags;

pub use entity_id::{EntityId, IdGenerator, IdKind};
pub use generated_image::GeneratedImage;
pub use tags::normalize_tags;
