//! Letterpack tracking number scanner.
//!
//! A web application that answers: "Is the tracking number I just scanned
//! a real Letterpack number, and where do I track it?"

pub mod config;
pub mod domain;
pub mod scan;
pub mod web;
