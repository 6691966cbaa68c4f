//! Domain services: security entities, SIEM, and demo seeding

pub mod models;
pub mod security;
pub mod seed;
pub mod siem;
