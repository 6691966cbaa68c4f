//! First-admin bootstrap and profile lifecycle through the assembled core

use crate::common::{login, TestOps};
use sentryops::{Config, OpsError, Permission, Role, SecOps};

/// First bootstrapped profile becomes admin, later ones become viewers
#[tokio::test]
async fn first_profile_is_admin_rest_are_viewers() {
    let ops = SecOps::new(Config::default());

    let first = login(&ops, "First", "first@example.com");
    let profile = ops.create_initial_profile(&first).await.unwrap();
    assert_eq!(profile.role, Role::Admin);
    assert!(profile.permissions.contains(&Permission::ManageUsers));

    let second = login(&ops, "Second", "second@example.com");
    let profile = ops.create_initial_profile(&second).await.unwrap();
    assert_eq!(profile.role, Role::Viewer);
    assert!(!profile.permissions.contains(&Permission::ManageUsers));
}

/// Bootstrap without a session fails loud
#[tokio::test]
async fn bootstrap_requires_authentication() {
    let ops = SecOps::new(Config::default());
    let result = ops
        .create_initial_profile(&sentryops::RequestContext::anonymous())
        .await;
    assert!(matches!(result, Err(OpsError::Unauthenticated)));
}

/// Repeating the bootstrap returns the existing profile unchanged
#[tokio::test]
async fn bootstrap_is_idempotent() {
    let ops = SecOps::new(Config::default());
    let ctx = login(&ops, "Solo", "solo@example.com");

    let first = ops.create_initial_profile(&ctx).await.unwrap();
    let second = ops.create_initial_profile(&ctx).await.unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(second.role, Role::Admin);
}

/// Admin-created profiles carry the catalog permissions for their role
#[tokio::test]
async fn created_profiles_materialize_catalog_permissions() {
    let env = TestOps::new().await;
    let handler = env
        .user_with_role("Harper", Role::DogHandler, vec!["Kennels".to_string()])
        .await;

    let perms = env.ops.user_permissions(&handler).await;
    assert_eq!(perms, sentryops::permissions_for_role(Role::DogHandler));
    assert!(perms.contains(&Permission::UpdateDogStatus));
    assert!(!perms.contains(&Permission::ManageUsers));
}

/// Creating a second profile for the same account fails with AlreadyExists
#[tokio::test]
async fn duplicate_profile_is_rejected() {
    let env = TestOps::new().await;
    let account = env.ops.directory().register("Dup", "dup@example.com");

    env.ops
        .create_user_profile(
            &env.admin,
            account.id,
            Role::Viewer,
            "Operations".to_string(),
            None,
            vec![],
        )
        .await
        .unwrap();

    let result = env
        .ops
        .create_user_profile(
            &env.admin,
            account.id,
            Role::Bodyguard,
            "Operations".to_string(),
            None,
            vec![],
        )
        .await;
    assert!(matches!(result, Err(OpsError::AlreadyExists(_))));
}

/// A role change through update rematerializes the permission snapshot
#[tokio::test]
async fn role_change_rematerializes_permissions() {
    let env = TestOps::new().await;
    let viewer = env.user_with_role("Vera", Role::Viewer, vec![]).await;

    let profile = env
        .ops
        .current_user_profile(&viewer)
        .await
        .unwrap()
        .profile
        .unwrap();

    let update = sentryops::ProfileUpdate {
        role: Some(Role::CctvOperator),
        ..Default::default()
    };
    let updated = env
        .ops
        .update_user_profile(&env.admin, profile.id, update)
        .await
        .unwrap();

    assert_eq!(updated.role, Role::CctvOperator);
    assert_eq!(
        updated.permissions,
        sentryops::permissions_for_role(Role::CctvOperator)
    );
}

/// The persisted role catalog matches the in-code mapping after initialization
#[tokio::test]
async fn role_catalog_initialization() {
    let env = TestOps::new().await;

    let outcome = env.ops.initialize_role_permissions().await;
    assert!(outcome.success);

    let records = env.ops.role_permissions().await;
    assert_eq!(records.len(), Role::ALL.len());
    for record in records {
        assert_eq!(
            record.permissions,
            sentryops::permissions_for_role(record.role)
        );
    }
}
