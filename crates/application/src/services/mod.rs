//! Application services - Use case implementations

mod user_service;

pub use user_service::UserService;
