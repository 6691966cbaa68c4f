//! SIEM queries, aggregates, and rules

use crate::common::TestOps;
use sentryops::core::models::{NetworkEventStatus, NetworkEventType, Severity, SiemRuleCondition};
use sentryops::core::siem::{NetworkEventFilter, NewNetworkEvent, NewSiemRule};
use sentryops::{OpsError, Role};

fn failed_login(source_ip: &str) -> NewNetworkEvent {
    NewNetworkEvent {
        event_type: NetworkEventType::LoginAttempt,
        severity: Severity::Medium,
        source_ip: source_ip.to_string(),
        destination_ip: Some("10.0.0.1".to_string()),
        port: Some(22),
        protocol: Some("SSH".to_string()),
        status: NetworkEventStatus::Failed,
        description: "Failed SSH login attempt".to_string(),
        user_id: None,
        location: None,
        metadata: None,
    }
}

/// The network-event query keeps the reference gating: error when the caller
/// does not resolve, empty when view_siem is missing
#[tokio::test]
async fn network_event_query_gating() {
    let env = TestOps::new().await;
    env.ops
        .siem()
        .create_network_event(&env.admin, failed_login("192.168.1.100"))
        .await
        .unwrap();

    let anonymous = sentryops::RequestContext::anonymous();
    assert!(matches!(
        env.ops
            .siem()
            .network_events(&anonymous, NetworkEventFilter::default())
            .await,
        Err(OpsError::Unauthenticated)
    ));

    let guard = env.user_with_role("Gus", Role::Bodyguard, vec![]).await;
    let events = env
        .ops
        .siem()
        .network_events(&guard, NetworkEventFilter::default())
        .await
        .unwrap();
    assert!(events.is_empty());

    // security managers hold view_siem
    let manager = env
        .user_with_role("Mara", Role::SecurityManager, vec![])
        .await;
    let events = env
        .ops
        .siem()
        .network_events(&manager, NetworkEventFilter::default())
        .await
        .unwrap();
    assert_eq!(events.len(), 1);
}

/// Severity and type filters narrow the result set
#[tokio::test]
async fn filters_narrow_results() {
    let env = TestOps::new().await;
    env.ops
        .siem()
        .create_network_event(&env.admin, failed_login("192.168.1.100"))
        .await
        .unwrap();
    let mut critical = failed_login("203.0.113.45");
    critical.event_type = NetworkEventType::MalwareDetected;
    critical.severity = Severity::Critical;
    env.ops
        .siem()
        .create_network_event(&env.admin, critical)
        .await
        .unwrap();

    let filter = NetworkEventFilter {
        severity: Some(Severity::Critical),
        ..Default::default()
    };
    let events = env
        .ops
        .siem()
        .network_events(&env.admin, filter)
        .await
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, NetworkEventType::MalwareDetected);

    let filter = NetworkEventFilter {
        event_type: Some(NetworkEventType::LoginAttempt),
        ..Default::default()
    };
    let events = env
        .ops
        .siem()
        .network_events(&env.admin, filter)
        .await
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].source_ip, "192.168.1.100");
}

/// Aggregates count the last 24 hours and rank source IPs
#[tokio::test]
async fn stats_aggregate_recent_events() {
    let env = TestOps::new().await;
    for _ in 0..3 {
        env.ops
            .siem()
            .create_network_event(&env.admin, failed_login("192.168.1.100"))
            .await
            .unwrap();
    }
    env.ops
        .siem()
        .create_network_event(&env.admin, failed_login("203.0.113.45"))
        .await
        .unwrap();

    let stats = env.ops.siem().stats(&env.admin).await.unwrap().unwrap();
    assert_eq!(stats.total_events, 4);
    assert_eq!(stats.recent_events, 4);
    assert_eq!(stats.medium_events, 4);
    assert_eq!(stats.critical_events, 0);
    assert_eq!(
        stats.events_by_type.get(&NetworkEventType::LoginAttempt),
        Some(&4)
    );
    assert_eq!(stats.top_source_ips[0].ip, "192.168.1.100");
    assert_eq!(stats.top_source_ips[0].count, 3);
    assert_eq!(stats.threat_trends.len(), 24);

    // lacking view_siem degrades to None
    let guard = env.user_with_role("Gus", Role::Bodyguard, vec![]).await;
    assert!(env.ops.siem().stats(&guard).await.unwrap().is_none());
}

/// Rule creation requires manage_siem and stamps the creator
#[tokio::test]
async fn rule_creation_gated_and_stamped() {
    let env = TestOps::new().await;
    let manager = env
        .user_with_role("Mara", Role::SecurityManager, vec![])
        .await;

    let rule = NewSiemRule {
        name: "Repeated failed logins".to_string(),
        description: "Flag 5+ failed logins from one IP".to_string(),
        event_type: "login_attempt".to_string(),
        conditions: vec![SiemRuleCondition {
            field: "status".to_string(),
            operator: "equals".to_string(),
            value: "failed".to_string(),
        }],
        severity: Severity::High,
        actions: vec!["alert".to_string()],
    };

    // security managers can view but not manage
    let denied = env.ops.siem().create_siem_rule(&manager, rule.clone()).await;
    assert!(matches!(denied, Err(OpsError::PermissionDenied(_))));

    env.ops.siem().create_siem_rule(&env.admin, rule).await.unwrap();
    let rules = env.ops.siem().siem_rules(&manager).await.unwrap();
    assert_eq!(rules.len(), 1);
    assert!(rules[0].is_active);
}
