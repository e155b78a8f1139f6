pub mod auth_token;
pub mod database_service;
pub mod user;
