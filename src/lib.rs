pub mod catalog;
pub mod common;
pub mod config;
pub mod counters;
pub mod models;
pub mod services;
pub mod web;
