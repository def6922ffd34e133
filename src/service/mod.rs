//! Service layer.
//!
//! [`resolver`] owns identity resolution; [`appearance`] consumes the
//! resulting alias sets to query the fact tables.

pub mod appearance;
pub mod resolver;
