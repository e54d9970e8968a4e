pub mod events;
pub mod stores;
