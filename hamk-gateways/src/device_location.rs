use hamk_core::{
    entities::MapPoint,
    gateways::location::{DeviceLocationGateway, PositionError, PositionOptions},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Permission {
    #[default]
    Granted,
    Denied,
}

/// A device location that is known in advance,
/// e.g. from the command line or the configuration.
///
/// The position is available immediately, so the timeout
/// and the maximum age of the request do not apply.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocation {
    permission: Permission,
    position: Option<MapPoint>,
}

impl ConfiguredLocation {
    pub const fn new(permission: Permission, position: Option<MapPoint>) -> Self {
        Self {
            permission,
            position,
        }
    }
}

impl DeviceLocationGateway for ConfiguredLocation {
    fn current_position(&self, options: &PositionOptions) -> Result<MapPoint, PositionError> {
        log::debug!("Request the device position ({options:?})");
        if self.permission == Permission::Denied {
            return Err(PositionError::PermissionDenied);
        }
        let pos = self.position.ok_or(PositionError::PositionUnavailable)?;
        if !pos.is_valid() {
            log::warn!("Invalid device position: {pos}");
            return Err(PositionError::PositionUnavailable);
        }
        Ok(pos)
    }
}
