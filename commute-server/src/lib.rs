//! Makati commute planner server.
//!
//! A web application that answers: "how do I get from here to there by
//! foot, tricycle or jeepney, and what will it cost?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod geocode;
pub mod planner;
pub mod routing;
pub mod web;
