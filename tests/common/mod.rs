//! Common test utilities for sentryops
//!
//! Provides an assembled core plus the account/session/profile factories the
//! integration tests share.

use sentryops::core::models::{
    DogStatus, EventSource, HandlerContact, HealthMetrics, SecurityEventType, Severity,
    ZonedLocation,
};
use sentryops::core::security::{NewGuardDog, NewSecurityEvent};
use sentryops::{Config, RequestContext, Role, SecOps};

/// An assembled core with an admin already bootstrapped
pub struct TestOps {
    pub ops: SecOps,
    /// Context for the bootstrapped admin
    pub admin: RequestContext,
}

impl TestOps {
    /// Build the core and bootstrap the first (admin) profile
    pub async fn new() -> Self {
        let ops = SecOps::new(Config::default());
        let admin = login(&ops, "Admin", "admin@example.com");
        ops.create_initial_profile(&admin)
            .await
            .expect("bootstrap admin profile");
        Self { ops, admin }
    }

    /// Register an account, create a profile with `role` and `zones` for it
    /// (as the admin), and return a logged-in context for it
    pub async fn user_with_role(
        &self,
        name: &str,
        role: Role,
        zones: Vec<String>,
    ) -> RequestContext {
        let email = format!("{}@example.com", name.to_lowercase());
        let account = self.ops.directory().register(name, email);
        self.ops
            .create_user_profile(
                &self.admin,
                account.id,
                role,
                "Operations".to_string(),
                None,
                zones,
            )
            .await
            .expect("create role profile");
        let token = self
            .ops
            .directory()
            .issue_session(account.id)
            .expect("issue session");
        RequestContext::with_token(token)
    }
}

/// Register an account and return a logged-in context for it; no profile
pub fn login(ops: &SecOps, name: &str, email: &str) -> RequestContext {
    let account = ops.directory().register(name, email);
    let token = ops
        .directory()
        .issue_session(account.id)
        .expect("issue session");
    RequestContext::with_token(token)
}

/// A dog roster entry for `zone`
pub fn dog_in_zone(name: &str, zone: &str) -> NewGuardDog {
    NewGuardDog {
        name: name.to_string(),
        breed: "German Shepherd".to_string(),
        age: 4,
        status: DogStatus::Active,
        location: ZonedLocation {
            lat: 40.7128,
            lng: -74.0060,
            zone: zone.to_string(),
        },
        handler: HandlerContact {
            name: "Handler".to_string(),
            contact: "+1-555-0100".to_string(),
        },
        health_metrics: HealthMetrics {
            heart_rate: 85,
            temperature: 101.5,
            last_checkup: 0,
        },
    }
}

/// A low-severity event in `zone`
pub fn event_in_zone(zone: &str) -> NewSecurityEvent {
    NewSecurityEvent {
        event_type: SecurityEventType::MotionDetected,
        severity: Severity::Low,
        description: format!("Motion detected in {}", zone),
        location: ZonedLocation {
            lat: 40.7128,
            lng: -74.0060,
            zone: zone.to_string(),
        },
        source_id: "CAM001".to_string(),
        source_type: EventSource::Camera,
        metadata: None,
    }
}
