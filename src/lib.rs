//! Vehicle Service Ledger.
//!
//! A small web application that stores vehicles and their service history
//! in SQLite and renders them in a browser.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod views;
