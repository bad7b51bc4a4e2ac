//! Profile adapters

mod in_memory_updater;

pub use in_memory_updater::{InMemoryProfileUpdater, DEFAULT_PREFERENCES, PREFERENCE_STEP};
