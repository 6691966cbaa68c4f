//! CCTV camera operations

use super::SecurityService;
use crate::core::models::{AiFeatures, CameraLocation, CameraStatus, CctvCamera};
use crate::identity::RequestContext;
use crate::rbac::catalog::Permission;
use crate::storage::RecordId;
use crate::utils::current_timestamp_millis;
use crate::utils::error::Result;
use tracing::info;

/// Fields for adding a camera to the inventory
#[derive(Debug, Clone)]
pub struct NewCamera {
    pub camera_id: String,
    pub name: String,
    pub location: CameraLocation,
    pub status: CameraStatus,
    pub is_recording: bool,
    pub ai_features: AiFeatures,
    pub resolution: String,
    pub night_vision: bool,
}

/// Partial camera update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct CameraUpdate {
    pub name: Option<String>,
    pub location: Option<CameraLocation>,
    pub status: Option<CameraStatus>,
    pub is_recording: Option<bool>,
    pub ai_features: Option<AiFeatures>,
    pub resolution: Option<String>,
    pub night_vision: Option<bool>,
}

impl SecurityService {
    /// Cameras the caller may see, zone-scoped. Requires `view_cameras`;
    /// fail-soft empty otherwise.
    pub async fn cameras(&self, ctx: &RequestContext) -> Vec<CctvCamera> {
        let Some(profile) = self.viewer(ctx, Permission::ViewCameras) else {
            return Vec::new();
        };
        Self::visible_in_zones(&profile, self.storage.cameras.all(), |c| &c.location.zone)
    }

    /// Online cameras the caller may see
    pub async fn online_cameras(&self, ctx: &RequestContext) -> Vec<CctvCamera> {
        self.cameras(ctx)
            .await
            .into_iter()
            .filter(|c| c.status == CameraStatus::Online)
            .collect()
    }

    /// Add a camera. Requires `manage_cameras`.
    pub async fn add_camera(&self, ctx: &RequestContext, new: NewCamera) -> Result<RecordId> {
        self.require(ctx, Permission::ManageCameras)?;

        let camera = CctvCamera {
            id: RecordId::new(),
            last_ping: current_timestamp_millis(),
            camera_id: new.camera_id,
            name: new.name,
            location: new.location,
            status: new.status,
            is_recording: new.is_recording,
            ai_features: new.ai_features,
            resolution: new.resolution,
            night_vision: new.night_vision,
        };
        let id = self.storage.cameras.insert(camera)?;

        info!(camera = %id, "CCTV camera added");
        self.audit
            .record(ctx, "add_camera", "cctvCameras", Some(id.to_string()), None)
            .await;
        Ok(id)
    }

    /// Patch a camera record. Requires `manage_cameras`. Any update counts
    /// as a heartbeat and refreshes `last_ping`.
    pub async fn update_camera(
        &self,
        ctx: &RequestContext,
        camera_id: RecordId,
        update: CameraUpdate,
    ) -> Result<CctvCamera> {
        self.require(ctx, Permission::ManageCameras)?;

        let updated = self.storage.cameras.patch(camera_id, |camera| {
            if let Some(name) = update.name {
                camera.name = name;
            }
            if let Some(location) = update.location {
                camera.location = location;
            }
            if let Some(status) = update.status {
                camera.status = status;
            }
            if let Some(recording) = update.is_recording {
                camera.is_recording = recording;
            }
            if let Some(features) = update.ai_features {
                camera.ai_features = features;
            }
            if let Some(resolution) = update.resolution {
                camera.resolution = resolution;
            }
            if let Some(night_vision) = update.night_vision {
                camera.night_vision = night_vision;
            }
            camera.last_ping = current_timestamp_millis();
        })?;

        self.audit
            .record(
                ctx,
                "update_camera",
                "cctvCameras",
                Some(camera_id.to_string()),
                None,
            )
            .await;
        Ok(updated)
    }

    /// Operator control: flip status/recording. Requires `control_cameras`
    /// (narrower than full management).
    pub async fn update_camera_status(
        &self,
        ctx: &RequestContext,
        camera_id: RecordId,
        status: CameraStatus,
        is_recording: Option<bool>,
    ) -> Result<CctvCamera> {
        self.require(ctx, Permission::ControlCameras)?;

        let updated = self.storage.cameras.patch(camera_id, |camera| {
            camera.status = status;
            camera.last_ping = current_timestamp_millis();
            if let Some(recording) = is_recording {
                camera.is_recording = recording;
            }
        })?;

        self.audit
            .record(
                ctx,
                "update_camera_status",
                "cctvCameras",
                Some(camera_id.to_string()),
                Some(format!("status={:?}", status)),
            )
            .await;
        Ok(updated)
    }

    /// Remove a camera. Requires `manage_cameras`.
    pub async fn delete_camera(&self, ctx: &RequestContext, camera_id: RecordId) -> Result<()> {
        self.require(ctx, Permission::ManageCameras)?;
        self.storage.cameras.delete(camera_id)?;

        info!(camera = %camera_id, "CCTV camera removed");
        self.audit
            .record(
                ctx,
                "delete_camera",
                "cctvCameras",
                Some(camera_id.to_string()),
                None,
            )
            .await;
        Ok(())
    }
}
