//! Result types returned by the service layer.

pub mod resolution;
