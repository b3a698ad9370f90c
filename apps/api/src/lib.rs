//! Recruitment matching service: CV field extraction and weighted
//! candidate/job compatibility scoring behind an HTTP API.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod matching;
pub mod models;
pub mod routes;
pub mod state;
pub mod text;
