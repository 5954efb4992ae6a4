pub mod actions;
pub mod background;
pub mod components;
pub mod config;
pub mod error;
pub mod helpers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod view;
