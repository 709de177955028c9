//! Level layout loading for peg solitaire boards.
//!
//! A board file is plain text: rows separated by CRLF, cells by a single
//! space. [`engine::parse`] turns it into a [`engine::TokenMatrix`] and
//! [`engine::map_to_placements`] turns that into ordered placement commands
//! for whatever instantiates the level (see [`engine::PlacementSink`]).

pub mod app;
pub mod engine;
pub mod input;
pub mod ui;
