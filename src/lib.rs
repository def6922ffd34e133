//! Riftdex backend core.
//!
//! This crate implements canonical identity resolution for League of Legends
//! esports entities. Players and teams are keyed by a stable `overview_page`
//! slug, while historical match and roster fact rows reference them only by
//! the display name recorded at event time. The resolver turns a free-form
//! name into the canonical slug plus the full alias set needed to query those
//! fact tables, and the appearance service is its in-crate consumer.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
