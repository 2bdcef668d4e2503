pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod password;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
