//! Search module - debounced resolution of free-text queries into directory candidates.

mod search_events;
mod search_model;
mod search_resolver;


pub use search_events::{MockSearchEventSink, NoOpSearchEventSink, SearchEventSink};
pub use search_model::SearchState;
pub use search_resolver::SearchResolver;
