use std::fmt;

use bandwire_registry::catalog::PROFILE_RECORD_SIZE;
use serde::Serialize;

/// API versions above this belong to the newer hardware generation.
pub const ENVOY_API_THRESHOLD: u64 = 30;

/// Hardware/firmware generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceFamily {
    Cargo,
    Envoy,
}

impl DeviceFamily {
    /// Classify from the value returned by `CoreModuleGetApiVersion`.
    pub fn from_api_version(version: u64) -> Self {
        if version > ENVOY_API_THRESHOLD {
            Self::Envoy
        } else {
            Self::Cargo
        }
    }

    pub fn constants(self) -> &'static DeviceConstants {
        match self {
            Self::Cargo => &CARGO,
            Self::Envoy => &ENVOY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cargo => "cargo",
            Self::Envoy => "envoy",
        }
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-family sizes used by tile, icon and profile tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceConstants {
    pub family: DeviceFamily,
    pub me_tile_width: u16,
    pub me_tile_height: u16,
    pub tile_icon_size: u16,
    pub badge_icon_size: u16,
    pub notification_icon_size: u16,
    pub max_icons_per_tile: u8,
    pub profile_record_size: usize,
}

pub static CARGO: DeviceConstants = DeviceConstants {
    family: DeviceFamily::Cargo,
    me_tile_width: 310,
    me_tile_height: 102,
    tile_icon_size: 46,
    badge_icon_size: 24,
    notification_icon_size: 36,
    max_icons_per_tile: 10,
    profile_record_size: PROFILE_RECORD_SIZE,
};

pub static ENVOY: DeviceConstants = DeviceConstants {
    family: DeviceFamily::Envoy,
    me_tile_width: 310,
    me_tile_height: 128,
    tile_icon_size: 48,
    badge_icon_size: 24,
    notification_icon_size: 36,
    max_icons_per_tile: 15,
    profile_record_size: PROFILE_RECORD_SIZE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(DeviceFamily::from_api_version(30), DeviceFamily::Cargo);
        assert_eq!(DeviceFamily::from_api_version(31), DeviceFamily::Envoy);
        assert_eq!(DeviceFamily::from_api_version(0), DeviceFamily::Cargo);
    }

    #[test]
    fn tables_differ_where_hardware_does() {
        let cargo = DeviceFamily::Cargo.constants();
        let envoy = DeviceFamily::Envoy.constants();
        assert_eq!((cargo.me_tile_width, cargo.me_tile_height), (310, 102));
        assert_eq!((envoy.me_tile_width, envoy.me_tile_height), (310, 128));
        assert_eq!(cargo.max_icons_per_tile, 10);
        assert_eq!(envoy.max_icons_per_tile, 15);
        assert_eq!(envoy.profile_record_size, 397);
    }

    #[test]
    fn constants_serialize() {
        let json = serde_json::to_value(DeviceFamily::Envoy.constants()).unwrap();
        assert_eq!(json["family"], "Envoy");
        assert_eq!(json["tile_icon_size"], 48);
    }
}
