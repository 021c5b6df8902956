//! Service layer
//!
//! Logic that sits on top of the domain ports: connection traversal and
//! desk-slot matching.

pub mod connection_collector;
pub mod desk_matcher;

pub use connection_collector::ConnectionCollector;
pub use desk_matcher::{kanji_digit_to_arabic, normalize_display_name, DeskMatcher};
