//! Facility address space.
//!
//! A facility is the 8-bit address of a device subsystem. The space is split
//! into contiguous ranges (drivers, libraries, modules, applications, and two
//! reserved blocks). Values with no known name still round-trip unchanged.

use std::fmt;

/// An 8-bit facility identifier.
///
/// Named values are associated constants. Any `u8` is a valid facility:
/// unknown values are carried opaquely so unmapped device traffic still parses.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Facility(u8);

impl Facility {
    pub const MYSTERY: Facility = Facility(0xA4);
    pub const NULL: Facility = Facility(0x00);
    pub const MIN: Facility = Facility(0x00);
    pub const INVALID: Facility = Facility(0x00);
    pub const RESERVED_BASE: Facility = Facility(0x01);
    pub const RESERVED_END: Facility = Facility(0x1F);
    pub const DRIVER_DMA: Facility = Facility(0x20);
    pub const DRIVERS_BASE: Facility = Facility(0x20);
    pub const DRIVER_BTLE: Facility = Facility(0x21);
    pub const DRIVER_PDB: Facility = Facility(0x22);
    pub const DRIVER_I2C: Facility = Facility(0x23);
    pub const DRIVER_ADC: Facility = Facility(0x24);
    pub const DRIVER_GPIO: Facility = Facility(0x25);
    pub const DRIVER_DAC: Facility = Facility(0x26);
    pub const DRIVER_ANALOG_MGR: Facility = Facility(0x27);
    pub const DRIVER_RTC: Facility = Facility(0x28);
    pub const DRIVER_MOTOR: Facility = Facility(0x29);
    pub const DRIVER_DISPLAY: Facility = Facility(0x2B);
    pub const DRIVER_UART_ASYNC: Facility = Facility(0x2C);
    pub const DRIVER_PMU: Facility = Facility(0x2D);
    pub const DRIVER_EXTERNAL_RAM: Facility = Facility(0x2E);
    pub const DRIVER_ALS: Facility = Facility(0x2F);
    pub const DRIVER_TIMERS: Facility = Facility(0x30);
    pub const DRIVER_FLEX_BUS: Facility = Facility(0x31);
    pub const DRIVER_SPI: Facility = Facility(0x32);
    pub const DRIVER_E_FLASH: Facility = Facility(0x33);
    pub const DRIVER_PWM: Facility = Facility(0x34);
    pub const DRIVER_CRC: Facility = Facility(0x35);
    pub const DRIVER_P_FLASH: Facility = Facility(0x36);
    pub const DRIVER_FPU: Facility = Facility(0x37);
    pub const DRIVER_WATCH_DOG: Facility = Facility(0x38);
    pub const DRIVER_CORE_MODULE: Facility = Facility(0x39);
    pub const DRIVER_CRASH_DUMP: Facility = Facility(0x3A);
    pub const DRIVER_USB: Facility = Facility(0x3B);
    pub const DRIVER_MMCAU: Facility = Facility(0x3C);
    pub const DRIVERS_END: Facility = Facility(0x6F);
    pub const LIBRARY_DEBUG: Facility = Facility(0x70);
    pub const LIBRARIES_BASE: Facility = Facility(0x70);
    pub const LIBRARY_RUNTIME: Facility = Facility(0x71);
    pub const LIBRARY_USB_CMD_PROTOCOL: Facility = Facility(0x72);
    pub const LIBRARY_BTPS: Facility = Facility(0x73);
    pub const LIBRARY_TOUCH: Facility = Facility(0x74);
    pub const LIBRARY_TIME: Facility = Facility(0x75);
    pub const LIBRARY_JUTIL: Facility = Facility(0x76);
    pub const LIBRARY_HR_MANAGER: Facility = Facility(0x77);
    pub const LIBRARY_CONFIGURATION: Facility = Facility(0x78);
    pub const LIBRARY_BUTTON: Facility = Facility(0x79);
    pub const LIBRARY_BACKLIGHT: Facility = Facility(0x7A);
    pub const LIBRARY_MOTION: Facility = Facility(0x7B);
    pub const LIBRARY_ACT_MON: Facility = Facility(0x7C);
    pub const LIBRARY_BATTERY: Facility = Facility(0x7D);
    pub const LIBRARY_GPS: Facility = Facility(0x7E);
    pub const LIBRARY_HR_LED: Facility = Facility(0x7F);
    pub const LIBRARY_DFU: Facility = Facility(0x80);
    pub const LIBRARY_HEART_RATE: Facility = Facility(0x81);
    pub const LIBRARY_MICROPHONE: Facility = Facility(0x83);
    pub const LIBRARY_GSR: Facility = Facility(0x84);
    pub const LIBRARY_UV: Facility = Facility(0x85);
    pub const LIBRARY_SKIN_TEMP: Facility = Facility(0x86);
    pub const LIBRARY_AMB_TEMP: Facility = Facility(0x87);
    pub const LIBRARY_PEDOMETER: Facility = Facility(0x88);
    pub const LIBRARY_CALORIES: Facility = Facility(0x89);
    pub const LIBRARY_DISTANCE: Facility = Facility(0x8A);
    pub const LIBRARY_ALGO_MATH: Facility = Facility(0x8B);
    pub const LIBRARY_LOGGER: Facility = Facility(0x8C);
    pub const LIBRARY_PEG: Facility = Facility(0x8D);
    pub const LIBRARY_FILE: Facility = Facility(0x8E);
    pub const LIBRARY_REMOTE_SUBSCRIPTION: Facility = Facility(0x8F);
    pub const LIBRARY_POWER: Facility = Facility(0x90);
    pub const LIBRARY_UV_EXPOSURE: Facility = Facility(0x91);
    pub const LIBRARY_MINUTE_TIMER: Facility = Facility(0x92);
    pub const LIBRARY_RECOVERY: Facility = Facility(0x93);
    pub const LIBRARY_SUBSCRIPTION_BASE: Facility = Facility(0x94);
    pub const LIBRARY_DATE_CHANGE_SUBSCRIPTION: Facility = Facility(0x95);
    pub const LIBRARY_HR_ESTIMATOR: Facility = Facility(0x96);
    pub const LIBRARY_USB_CONNECTION: Facility = Facility(0x97);
    pub const LIBRARY_SRAMFW_UPDATE: Facility = Facility(0x98);
    pub const LIBRARY_AUTO_BRIGHTNESS: Facility = Facility(0x99);
    pub const LIBRARY_HAPTIC: Facility = Facility(0x9A);
    pub const LIBRARY_FITNESS_PLANS: Facility = Facility(0x9B);
    pub const LIBRARY_SLEEP_RECOVERY: Facility = Facility(0x9C);
    pub const LIBRARY_FIRST_BEAT: Facility = Facility(0x9D);
    pub const LIBRARY_ANCS_NOTIFICATION_CACHE: Facility = Facility(0x9E);
    pub const LIBRARY_KEYBOARD: Facility = Facility(0x9F);
    pub const LIBRARY_HR_ACCEL_SYNC: Facility = Facility(0xA0);
    pub const LIBRARY_GOLF: Facility = Facility(0xA1);
    pub const MODULE_OOBE: Facility = Facility(0xAD);
    pub const LIBRARIES_END: Facility = Facility(0xBF);
    pub const MODULE_MAIN: Facility = Facility(0xC0);
    pub const MODULES_BASE: Facility = Facility(0xC0);
    pub const MODULE_BEHAVIOR: Facility = Facility(0xC1);
    pub const MODULE_FIREBALL_TRANSPORT_LAYER: Facility = Facility(0xC2);
    pub const MODULE_FIREBALL_UI: Facility = Facility(0xC3);
    pub const MODULE_FIREBALL_UTILITIES: Facility = Facility(0xC4);
    pub const MODULE_PROFILE: Facility = Facility(0xC5);
    pub const MODULE_LOGGER_SUBSCRIPTIONS: Facility = Facility(0xC6);
    pub const MODULE_FIREBALL_TILES_MODELS: Facility = Facility(0xC7);
    pub const MODULE_POWER_MANAGER: Facility = Facility(0xC8);
    pub const MODULE_HR_POWER_MANAGER: Facility = Facility(0xC9);
    pub const MODULE_SYSTEM_SETTINGS: Facility = Facility(0xCA);
    pub const MODULE_FIREBALL_HARDWARE_MANAGER: Facility = Facility(0xCB);
    pub const MODULE_NOTIFICATION: Facility = Facility(0xCC);
    pub const MODULE_FTL_TOUCH_MANAGER: Facility = Facility(0xCD);
    pub const MODULE_PERSISTED_STATISTICS: Facility = Facility(0xCE);
    pub const MODULE_ALGORITHMS: Facility = Facility(0xCF);
    pub const MODULE_PERSISTED_APPLICATION_DATA: Facility = Facility(0xD0);
    pub const MODULE_DEVICE_CONTACT: Facility = Facility(0xD1);
    pub const MODULE_INSTRUMENTATION: Facility = Facility(0xD2);
    pub const MODULE_FIREBALL_APPS_MANAGEMENT: Facility = Facility(0xD3);
    pub const MODULE_INSTALLED_APP_LIST: Facility = Facility(0xD4);
    pub const MODULE_FIREBALL_PAGE_MANAGEMENT: Facility = Facility(0xD5);
    pub const MODULE_UNIT_TESTS: Facility = Facility(0xD6);
    pub const MODULE_BATTERY_GAUGE: Facility = Facility(0xD7);
    pub const MODULE_THEME_COLOR: Facility = Facility(0xD8);
    pub const MODULE_GOAL_TRACKER: Facility = Facility(0xD9);
    pub const MODULE_KFROST: Facility = Facility(0xDA);
    pub const MODULE_PAL: Facility = Facility(0xDB);
    pub const MODULE_GESTURES: Facility = Facility(0xDC);
    pub const MODULE_CORTANA: Facility = Facility(0xDD);
    pub const MODULE_VOICE_PUSH: Facility = Facility(0xDE);
    pub const MODULES_END: Facility = Facility(0xDF);
    pub const APPLICATION_MAIN: Facility = Facility(0xE0);
    pub const APPLICATIONS_BASE: Facility = Facility(0xE0);
    pub const APPLICATION1_BL: Facility = Facility(0xE1);
    pub const APPLICATION2_UP: Facility = Facility(0xE2);
    pub const APPLICATIONS_END: Facility = Facility(0xEF);
    pub const RESERVED2_BASE: Facility = Facility(0xF0);
    pub const RESERVED2_END: Facility = Facility(0xFF);
    pub const MAX: Facility = Facility(0xFF);

    /// Wrap a raw facility byte.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The raw facility byte.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The primary name of this facility, if it has one.
    pub fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            0x00 => "Null",
            0x01 => "ReservedBase",
            0x1F => "ReservedEnd",
            0x20 => "DriverDma",
            0x21 => "DriverBtle",
            0x22 => "DriverPdb",
            0x23 => "DriverI2c",
            0x24 => "DriverAdc",
            0x25 => "DriverGpio",
            0x26 => "DriverDac",
            0x27 => "DriverAnalogMgr",
            0x28 => "DriverRtc",
            0x29 => "DriverMotor",
            0x2B => "DriverDisplay",
            0x2C => "DriverUartAsync",
            0x2D => "DriverPmu",
            0x2E => "DriverExternalRam",
            0x2F => "DriverAls",
            0x30 => "DriverTimers",
            0x31 => "DriverFlexBus",
            0x32 => "DriverSpi",
            0x33 => "DriverEFlash",
            0x34 => "DriverPwm",
            0x35 => "DriverCrc",
            0x36 => "DriverPFlash",
            0x37 => "DriverFpu",
            0x38 => "DriverWatchDog",
            0x39 => "DriverCoreModule",
            0x3A => "DriverCrashDump",
            0x3B => "DriverUsb",
            0x3C => "DriverMmcau",
            0x6F => "DriversEnd",
            0x70 => "LibraryDebug",
            0x71 => "LibraryRuntime",
            0x72 => "LibraryUsbCmdProtocol",
            0x73 => "LibraryBTPS",
            0x74 => "LibraryTouch",
            0x75 => "LibraryTime",
            0x76 => "LibraryJutil",
            0x77 => "LibraryHRManager",
            0x78 => "LibraryConfiguration",
            0x79 => "LibraryButton",
            0x7A => "LibraryBacklight",
            0x7B => "LibraryMotion",
            0x7C => "LibraryActMon",
            0x7D => "LibraryBattery",
            0x7E => "LibraryGps",
            0x7F => "LibraryHRLed",
            0x80 => "LibraryDfu",
            0x81 => "LibraryHeartRate",
            0x83 => "LibraryMicrophone",
            0x84 => "LibraryGsr",
            0x85 => "LibraryUV",
            0x86 => "LibrarySkinTemp",
            0x87 => "LibraryAmbTemp",
            0x88 => "LibraryPedometer",
            0x89 => "LibraryCalories",
            0x8A => "LibraryDistance",
            0x8B => "LibraryAlgoMath",
            0x8C => "LibraryLogger",
            0x8D => "LibraryPeg",
            0x8E => "LibraryFile",
            0x8F => "LibraryRemoteSubscription",
            0x90 => "LibraryPower",
            0x91 => "LibraryUVExposure",
            0x92 => "LibraryMinuteTimer",
            0x93 => "LibraryRecovery",
            0x94 => "LibrarySubscriptionBase",
            0x95 => "LibraryDateChangeSubscription",
            0x96 => "LibraryHREstimator",
            0x97 => "LibraryUSBConnection",
            0x98 => "LibrarySRAMFWUpdate",
            0x99 => "LibraryAutoBrightness",
            0x9A => "LibraryHaptic",
            0x9B => "LibraryFitnessPlans",
            0x9C => "LibrarySleepRecovery",
            0x9D => "LibraryFirstBeat",
            0x9E => "LibraryAncsNotificationCache",
            0x9F => "LibraryKeyboard",
            0xA0 => "LibraryHrAccelSync",
            0xA1 => "LibraryGolf",
            0xA4 => "Mystery",
            0xAD => "ModuleOobe",
            0xBF => "LibrariesEnd",
            0xC0 => "ModuleMain",
            0xC1 => "ModuleBehavior",
            0xC2 => "ModuleFireballTransportLayer",
            0xC3 => "ModuleFireballUI",
            0xC4 => "ModuleFireballUtilities",
            0xC5 => "ModuleProfile",
            0xC6 => "ModuleLoggerSubscriptions",
            0xC7 => "ModuleFireballTilesModels",
            0xC8 => "ModulePowerManager",
            0xC9 => "ModuleHrPowerManager",
            0xCA => "ModuleSystemSettings",
            0xCB => "ModuleFireballHardwareManager",
            0xCC => "ModuleNotification",
            0xCD => "ModuleFtlTouchManager",
            0xCE => "ModulePersistedStatistics",
            0xCF => "ModuleAlgorithms",
            0xD0 => "ModulePersistedApplicationData",
            0xD1 => "ModuleDeviceContact",
            0xD2 => "ModuleInstrumentation",
            0xD3 => "ModuleFireballAppsManagement",
            0xD4 => "ModuleInstalledAppList",
            0xD5 => "ModuleFireballPageManagement",
            0xD6 => "ModuleUnitTests",
            0xD7 => "ModuleBatteryGauge",
            0xD8 => "ModuleThemeColor",
            0xD9 => "ModuleGoalTracker",
            0xDA => "ModuleKfrost",
            0xDB => "ModulePal",
            0xDC => "ModuleGestures",
            0xDD => "ModuleCortana",
            0xDE => "ModuleVoicePush",
            0xDF => "ModulesEnd",
            0xE0 => "ApplicationMain",
            0xE1 => "Application1BL",
            0xE2 => "Application2UP",
            0xEF => "ApplicationsEnd",
            0xF0 => "Reserved2Base",
            0xFF => "Reserved2End",
            _ => return None,
        };
        Some(name)
    }

    /// Look up a facility by its name (case-insensitive, primary names only).
    pub fn from_name(name: &str) -> Option<Self> {
        (0..=u8::MAX)
            .map(Facility)
            .find(|f| f.name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
    }

    /// Which block of the address space this facility falls in.
    pub fn range(self) -> FacilityRange {
        match self.0 {
            0x00 => FacilityRange::Null,
            0x01..=0x1F => FacilityRange::Reserved,
            0x20..=0x6F => FacilityRange::Drivers,
            0x70..=0xBF => FacilityRange::Libraries,
            0xC0..=0xDF => FacilityRange::Modules,
            0xE0..=0xEF => FacilityRange::Applications,
            0xF0..=0xFF => FacilityRange::Reserved2,
        }
    }
}

impl From<u8> for Facility {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Facility> for u8 {
    fn from(facility: Facility) -> Self {
        facility.0
    }
}

impl fmt::Debug for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Facility::{name}"),
            None => write!(f, "Facility(0x{:02X})", self.0),
        }
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

/// Contiguous blocks of the facility address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacilityRange {
    Null,
    Reserved,
    Drivers,
    Libraries,
    Modules,
    Applications,
    Reserved2,
}

impl FacilityRange {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Reserved => "reserved",
            Self::Drivers => "drivers",
            Self::Libraries => "libraries",
            Self::Modules => "modules",
            Self::Applications => "applications",
            Self::Reserved2 => "reserved2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_facility_resolves() {
        assert_eq!(Facility::MODULE_SYSTEM_SETTINGS.value(), 0xCA);
        assert_eq!(
            Facility::MODULE_SYSTEM_SETTINGS.name(),
            Some("ModuleSystemSettings")
        );
        assert_eq!(Facility::MODULE_SYSTEM_SETTINGS.range(), FacilityRange::Modules);
    }

    #[test]
    fn aliases_share_primary_name() {
        assert_eq!(Facility::DRIVERS_BASE, Facility::DRIVER_DMA);
        assert_eq!(Facility::DRIVERS_BASE.name(), Some("DriverDma"));
        assert_eq!(Facility::INVALID.name(), Some("Null"));
    }

    #[test]
    fn unknown_facility_round_trips() {
        let facility = Facility::from(0x6A);
        assert_eq!(facility.name(), None);
        assert_eq!(facility.range(), FacilityRange::Drivers);
        assert_eq!(u8::from(facility), 0x6A);
        assert_eq!(facility.to_string(), "0x6A");
        assert_eq!(format!("{facility:?}"), "Facility(0x6A)");
    }

    #[test]
    fn ranges_cover_address_space() {
        assert_eq!(Facility::NULL.range(), FacilityRange::Null);
        assert_eq!(Facility::new(0x1F).range(), FacilityRange::Reserved);
        assert_eq!(Facility::LIBRARY_JUTIL.range(), FacilityRange::Libraries);
        assert_eq!(Facility::APPLICATION_MAIN.range(), FacilityRange::Applications);
        assert_eq!(Facility::MAX.range(), FacilityRange::Reserved2);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(
            Facility::from_name("modulesystemsettings"),
            Some(Facility::MODULE_SYSTEM_SETTINGS)
        );
        assert_eq!(Facility::from_name("NoSuchFacility"), None);
    }
}
