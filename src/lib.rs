//! Kudos API Library
//!
//! Team directory, comments and reactions on kudos cards, recognition
//! analytics and the admin user review queue, exposed over HTTP.

pub mod api;
pub mod application;
pub mod auth;
pub mod config;
pub mod container;
pub mod domain;
pub mod infrastructure;
