pub mod events;
pub mod ids;

pub use events::{event_id_from_path, EventService};
pub use ids::IdGenerator;
