pub mod event;

pub use event::{Event, Location, Person};
