//! Services: the HTTP front of the server

pub mod http;

pub use self::http::{HttpService, build_app};
