//! Guard dog operations

use super::SecurityService;
use crate::core::models::{DogStatus, GuardDog, HandlerContact, HealthMetrics, ZonedLocation};
use crate::identity::RequestContext;
use crate::rbac::catalog::Permission;
use crate::storage::RecordId;
use crate::utils::current_timestamp_millis;
use crate::utils::error::Result;
use tracing::info;

/// Fields for adding a dog to the roster
#[derive(Debug, Clone)]
pub struct NewGuardDog {
    pub name: String,
    pub breed: String,
    pub age: u8,
    pub status: DogStatus,
    pub location: ZonedLocation,
    pub handler: HandlerContact,
    pub health_metrics: HealthMetrics,
}

/// Partial dog update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct GuardDogUpdate {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<u8>,
    pub status: Option<DogStatus>,
    pub location: Option<ZonedLocation>,
    pub handler: Option<HandlerContact>,
    pub health_metrics: Option<HealthMetrics>,
}

impl SecurityService {
    /// Dogs the caller may see, zone-scoped. Requires `view_guard_dogs`;
    /// fail-soft empty otherwise.
    pub async fn guard_dogs(&self, ctx: &RequestContext) -> Vec<GuardDog> {
        let Some(profile) = self.viewer(ctx, Permission::ViewGuardDogs) else {
            return Vec::new();
        };
        Self::visible_in_zones(&profile, self.storage.guard_dogs.all(), |d| {
            &d.location.zone
        })
    }

    /// Active dogs the caller may see
    pub async fn active_guard_dogs(&self, ctx: &RequestContext) -> Vec<GuardDog> {
        self.guard_dogs(ctx)
            .await
            .into_iter()
            .filter(|d| d.status == DogStatus::Active)
            .collect()
    }

    /// Add a dog to the roster. Requires `manage_guard_dogs`.
    pub async fn add_guard_dog(&self, ctx: &RequestContext, new: NewGuardDog) -> Result<RecordId> {
        self.require(ctx, Permission::ManageGuardDogs)?;

        let dog = GuardDog {
            id: RecordId::new(),
            is_on_duty: new.status == DogStatus::Active,
            last_patrol: current_timestamp_millis(),
            name: new.name,
            breed: new.breed,
            age: new.age,
            status: new.status,
            location: new.location,
            handler: new.handler,
            health_metrics: new.health_metrics,
        };
        let id = self.storage.guard_dogs.insert(dog)?;

        info!(dog_id = %id, "Guard dog added");
        self.audit
            .record(ctx, "add_guard_dog", "guardDogs", Some(id.to_string()), None)
            .await;
        Ok(id)
    }

    /// Patch a dog record. Requires `manage_guard_dogs`. A status change
    /// re-derives `is_on_duty`.
    pub async fn update_guard_dog(
        &self,
        ctx: &RequestContext,
        dog_id: RecordId,
        update: GuardDogUpdate,
    ) -> Result<GuardDog> {
        self.require(ctx, Permission::ManageGuardDogs)?;

        let updated = self.storage.guard_dogs.patch(dog_id, |dog| {
            if let Some(name) = update.name {
                dog.name = name;
            }
            if let Some(breed) = update.breed {
                dog.breed = breed;
            }
            if let Some(age) = update.age {
                dog.age = age;
            }
            if let Some(status) = update.status {
                dog.status = status;
                dog.is_on_duty = status == DogStatus::Active;
            }
            if let Some(location) = update.location {
                dog.location = location;
            }
            if let Some(handler) = update.handler {
                dog.handler = handler;
            }
            if let Some(health) = update.health_metrics {
                dog.health_metrics = health;
            }
        })?;

        self.audit
            .record(
                ctx,
                "update_guard_dog",
                "guardDogs",
                Some(dog_id.to_string()),
                None,
            )
            .await;
        Ok(updated)
    }

    /// Field status update for handlers on patrol. Requires
    /// `update_dog_status` (narrower than full management).
    pub async fn update_dog_status(
        &self,
        ctx: &RequestContext,
        dog_id: RecordId,
        status: DogStatus,
        location: Option<ZonedLocation>,
    ) -> Result<GuardDog> {
        self.require(ctx, Permission::UpdateDogStatus)?;

        let updated = self.storage.guard_dogs.patch(dog_id, |dog| {
            dog.status = status;
            dog.is_on_duty = status == DogStatus::Active;
            if let Some(location) = location {
                dog.location = location;
            }
        })?;

        self.audit
            .record(
                ctx,
                "update_dog_status",
                "guardDogs",
                Some(dog_id.to_string()),
                Some(format!("status={:?}", status)),
            )
            .await;
        Ok(updated)
    }

    /// Remove a dog from the roster. Requires `manage_guard_dogs`.
    pub async fn delete_guard_dog(&self, ctx: &RequestContext, dog_id: RecordId) -> Result<()> {
        self.require(ctx, Permission::ManageGuardDogs)?;
        self.storage.guard_dogs.delete(dog_id)?;

        info!(dog_id = %dog_id, "Guard dog removed");
        self.audit
            .record(
                ctx,
                "delete_guard_dog",
                "guardDogs",
                Some(dog_id.to_string()),
                None,
            )
            .await;
        Ok(())
    }
}
