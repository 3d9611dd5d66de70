//! API routes
//!
//! - [`health`] - liveness probe
//! - [`auth`] - login and signup
//! - [`menu`] - menu listing
//! - [`tables`] - dining table listing
//! - [`orders`] - order submission, listing, deletion
//! - [`table_requests`] - reservation requests

pub mod extract;

pub mod auth;
pub mod health;
pub mod menu;
pub mod orders;
pub mod table_requests;
pub mod tables;
