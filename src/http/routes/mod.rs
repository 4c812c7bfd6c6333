//! HTTP route modules

pub mod health;
pub mod index;
pub mod posts;
pub mod users;
