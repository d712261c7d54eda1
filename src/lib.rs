//! Workday calendar for German federal states.
//!
//! This crate decides, per calendar day, whether a user is expected to work:
//! it combines the user's working week, the public holidays of their federal
//! state and their recorded absences, and derives the date ranges and colors
//! a calendar view needs.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
