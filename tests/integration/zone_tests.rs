//! Zone scoping of entity queries

use crate::common::{dog_in_zone, event_in_zone, TestOps};
use sentryops::Role;

/// A caller sees only entities in their assigned zones
#[tokio::test]
async fn queries_are_scoped_to_assigned_zones() {
    let env = TestOps::new().await;
    env.ops
        .security()
        .add_guard_dog(&env.admin, dog_in_zone("Rex", "Main Building"))
        .await
        .unwrap();
    env.ops
        .security()
        .add_guard_dog(&env.admin, dog_in_zone("Luna", "North Gate"))
        .await
        .unwrap();

    let north_guard = env
        .user_with_role("Nils", Role::Bodyguard, vec!["North Gate".to_string()])
        .await;
    let visible = env.ops.security().guard_dogs(&north_guard).await;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Luna");
}

/// access_all_zones bypasses the zone list entirely
#[tokio::test]
async fn access_all_zones_bypasses_the_list() {
    let env = TestOps::new().await;
    env.ops
        .security()
        .add_guard_dog(&env.admin, dog_in_zone("Rex", "Main Building"))
        .await
        .unwrap();
    env.ops
        .security()
        .add_guard_dog(&env.admin, dog_in_zone("Luna", "North Gate"))
        .await
        .unwrap();

    // security managers hold access_all_zones with an empty zone list
    let manager = env
        .user_with_role("Mara", Role::SecurityManager, vec![])
        .await;
    assert_eq!(env.ops.security().guard_dogs(&manager).await.len(), 2);
}

/// An empty zone list without the bypass sees nothing
#[tokio::test]
async fn empty_zone_list_sees_nothing() {
    let env = TestOps::new().await;
    env.ops
        .security()
        .add_guard_dog(&env.admin, dog_in_zone("Rex", "Main Building"))
        .await
        .unwrap();

    let zoneless = env.user_with_role("Zed", Role::Bodyguard, vec![]).await;
    assert!(env.ops.security().guard_dogs(&zoneless).await.is_empty());
}

/// Event queries are scoped the same way as rosters
#[tokio::test]
async fn event_queries_respect_zones() {
    let env = TestOps::new().await;
    let manager = env
        .user_with_role("Mara", Role::SecurityManager, vec![])
        .await;
    env.ops
        .security()
        .log_security_event(&manager, event_in_zone("Main Building"))
        .await
        .unwrap();
    env.ops
        .security()
        .log_security_event(&manager, event_in_zone("Parking Lot"))
        .await
        .unwrap();

    let main_guard = env
        .user_with_role("Gus", Role::Bodyguard, vec!["Main Building".to_string()])
        .await;
    let events = env.ops.security().security_events(&main_guard, None).await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].location.zone, "Main Building");

    assert_eq!(
        env.ops.security().security_events(&manager, None).await.len(),
        2
    );
}
