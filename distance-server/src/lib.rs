//! Station distance server.
//!
//! A web service that answers: "how far apart are these two
//! long-distance stations, as the crow flies?"

pub mod domain;
pub mod geo;
pub mod stations;
pub mod web;
