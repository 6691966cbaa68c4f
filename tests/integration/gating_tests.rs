//! Permission gating and the read/write error asymmetry

use crate::common::{dog_in_zone, event_in_zone, login, TestOps};
use sentryops::{OpsError, Permission, Role};

/// Reads degrade to empty results, writes fail loud, for the same caller
#[tokio::test]
async fn reads_fail_soft_writes_fail_loud() {
    let env = TestOps::new().await;
    env.ops
        .security()
        .add_guard_dog(&env.admin, dog_in_zone("Rex", "Main Building"))
        .await
        .unwrap();

    // no profile at all: silent empty on reads
    let unprofiled = login(&env.ops, "Pat", "pat@example.com");
    assert!(env.ops.security().guard_dogs(&unprofiled).await.is_empty());

    // viewer lacks manage_guard_dogs: explicit denial on writes
    let viewer = env.user_with_role("Vik", Role::Viewer, vec![]).await;
    let result = env
        .ops
        .security()
        .add_guard_dog(&viewer, dog_in_zone("Rex", "Main Building"))
        .await;
    assert!(matches!(result, Err(OpsError::PermissionDenied(_))));
}

/// An unresolved caller is an error on the user list, while a resolved
/// caller without manage_users gets a silent empty list
#[tokio::test]
async fn user_list_distinguishes_unresolved_from_unprivileged() {
    let env = TestOps::new().await;

    let anonymous = sentryops::RequestContext::anonymous();
    assert!(matches!(
        env.ops.all_users(&anonymous).await,
        Err(OpsError::Unauthenticated)
    ));

    let viewer = env.user_with_role("Uma", Role::Viewer, vec![]).await;
    assert_eq!(env.ops.all_users(&viewer).await.unwrap().len(), 0);

    // the admin sees every account, profiled or not
    let _ = login(&env.ops, "Stray", "stray@example.com");
    let listed = env.ops.all_users(&env.admin).await.unwrap();
    assert!(listed.len() >= 3);
    assert!(listed.iter().any(|u| u.profile.is_none()));
}

/// Deactivating a profile kills every permission without touching the
/// snapshot
#[tokio::test]
async fn deactivated_profile_fails_all_checks() {
    let env = TestOps::new().await;
    let operator = env
        .user_with_role("Olive", Role::CctvOperator, vec!["Main Building".to_string()])
        .await;

    assert!(env.ops.check_permission(&operator, Permission::ViewCameras).await);

    let profile = env
        .ops
        .current_user_profile(&operator)
        .await
        .unwrap()
        .profile
        .unwrap();
    let update = sentryops::ProfileUpdate {
        is_active: Some(false),
        ..Default::default()
    };
    env.ops
        .update_user_profile(&env.admin, profile.id, update)
        .await
        .unwrap();

    assert!(!env.ops.check_permission(&operator, Permission::ViewCameras).await);
    // the snapshot survives deactivation; only the checks go dark
    assert!(!env.ops.user_permissions(&operator).await.is_empty());
}

/// A caller with no profile has no permissions but can still be listed
#[tokio::test]
async fn missing_profile_means_no_permissions() {
    let env = TestOps::new().await;
    let ctx = login(&env.ops, "Nova", "nova@example.com");

    assert!(!env.ops.check_permission(&ctx, Permission::ViewDashboard).await);
    assert!(env.ops.user_permissions(&ctx).await.is_empty());

    let current = env.ops.current_user_profile(&ctx).await.unwrap();
    assert!(current.profile.is_none());

    let unprofiled = env.ops.users_without_profile(&env.admin).await.unwrap();
    assert!(unprofiled.iter().any(|u| u.name == "Nova"));
}

/// Event resolution requires resolve_events and stamps the resolver
#[tokio::test]
async fn event_resolution_gated_and_stamped() {
    let env = TestOps::new().await;
    let manager = env
        .user_with_role("Mara", Role::SecurityManager, vec![])
        .await;
    let viewer = env.user_with_role("Ved", Role::Viewer, vec![]).await;

    let event_id = env
        .ops
        .security()
        .log_security_event(&manager, event_in_zone("North Gate"))
        .await
        .unwrap();

    let denied = env
        .ops
        .security()
        .resolve_security_event(&viewer, event_id)
        .await;
    assert!(matches!(denied, Err(OpsError::PermissionDenied(_))));

    let resolved = env
        .ops
        .security()
        .resolve_security_event(&manager, event_id)
        .await
        .unwrap();
    assert!(resolved.is_resolved);
    assert!(resolved.resolved_by.is_some());
    assert!(resolved.resolved_at.is_some());
}

/// Mutating a record that does not exist fails with NotFound
#[tokio::test]
async fn missing_record_is_not_found() {
    let env = TestOps::new().await;
    let result = env
        .ops
        .security()
        .delete_guard_dog(&env.admin, sentryops::RecordId::new())
        .await;
    assert!(matches!(result, Err(OpsError::NotFound(_))));
}
