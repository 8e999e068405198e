pub mod auth;
pub mod index;
pub mod posts;
pub mod users;
