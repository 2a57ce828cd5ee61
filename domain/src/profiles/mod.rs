//! Sector and jurisdiction profile lookups.
//!
//! Both key spaces are open-ended: an unknown key yields an explicit
//! empty profile, never an error.

pub mod jurisdiction;
pub mod sector;
