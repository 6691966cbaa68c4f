//! Integration tests for sentryops
//!
//! These tests exercise the assembled core: bootstrap, gating, zone
//! scoping, the audit trail, and the SIEM views.

pub mod audit_tests;
pub mod bootstrap_tests;
pub mod gating_tests;
pub mod siem_tests;
pub mod zone_tests;
