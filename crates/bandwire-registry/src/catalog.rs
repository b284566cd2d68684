//! The built-in device command catalog.
//!
//! Layouts are declared only where the device's payload shape is known. Tile
//! records are carried as opaque fixed-size blocks; image, profile and other
//! record formats are left to callers as raw transfers.

use bandwire_frame::{Command, Facility, Field, Fields};

/// Tile record size on the wire.
pub const TILE_RECORD_SIZE: usize = 16 + 4 + 4 + 2 + 2 + 60;

/// Profile record size on the wire.
pub const PROFILE_RECORD_SIZE: usize = 397;

/// Push-notification service GUID, sent as a constant in remote subscriptions.
pub const PUSH_SERVICE: [u8; 16] = [
    0xC7, 0x42, 0xE1, 0xA3, 0x63, 0x20, 0x5A, 0xBC, 0x96, 0x43, 0xD2, 0x06, 0xC6, 0x77, 0xE5, 0x80,
];

/// 100-nanosecond ticks since 1601-01-01 UTC.
pub const FILE_TIME: Field = Field::U64;

/// 32-bit ARGB color.
pub const ARGB: Field = Field::U32;

pub const FIRMWARE_VERSION: Field = Field::Struct(&[
    ("Major", Field::U16),
    ("Minor", Field::U16),
    ("Revision", Field::U32),
    ("Build", Field::U32),
    ("Debug", Field::Flag),
]);

/// One entry of the firmware version table.
pub const APP_VERSION: Field = Field::Struct(&[
    ("AppName", Field::Utf8(5)),
    ("PCBId", Field::U8),
    ("Version", FIRMWARE_VERSION),
]);

pub const BAND_SYSTEM_TIME: Field = Field::Struct(&[
    ("Year", Field::U16),
    ("Month", Field::U16),
    ("DayOfWeek", Field::U16),
    ("Day", Field::U16),
    ("Hour", Field::U16),
    ("Minute", Field::U16),
    ("Second", Field::U16),
    ("Milliseconds", Field::U16),
]);

pub const TILE_DATA: Field = Field::Bytes(TILE_RECORD_SIZE);

const FALSE_BOOL32: Field = Field::Const(&[0, 0, 0, 0]);

const CHUNK_RANGE_FIELDS: Fields = &[
    ("StartingSeqNumber", Field::U32),
    ("EndingSeqNumber", Field::U32),
    ("ByteCount", Field::U32),
];

const CHUNK_RANGE: Field = Field::Struct(CHUNK_RANGE_FIELDS);

pub static CORE_MODULE_GET_VERSION: Command = Command::new(Facility::LIBRARY_JUTIL, 1, true)
    .named("CoreModuleGetVersion")
    .with_response(Field::Array(3, &APP_VERSION));

pub static CORE_MODULE_GET_UNIQUE_ID: Command = Command::new(Facility::LIBRARY_JUTIL, 2, true)
    .named("CoreModuleGetUniqueID")
    .with_response(Field::Struct(&[
        ("Length", Field::U8),
        ("IdVersion", Field::U8),
        ("Id", Field::Utf16(64)),
    ]));

pub static CORE_MODULE_WHO_AM_I: Command = Command::new(Facility::LIBRARY_JUTIL, 3, true)
    .named("CoreModuleWhoAmI")
    .with_response(Field::U8);

pub static CORE_MODULE_GET_LOG_VERSION: Command = Command::new(Facility::LIBRARY_JUTIL, 5, true)
    .named("CoreModuleGetLogVersion")
    .with_response(Field::U16);

pub static CORE_MODULE_GET_API_VERSION: Command = Command::new(Facility::LIBRARY_JUTIL, 6, true)
    .named("CoreModuleGetApiVersion")
    .with_response(Field::U32);

pub static CORE_MODULE_SDK_CHECK: Command = Command::new(Facility::LIBRARY_JUTIL, 7, false)
    .named("CoreModuleSdkCheck")
    .with_transfer(&[
        ("Platform", Field::U8),
        ("Reserved", Field::U8),
        ("Three", Field::Const(&[3, 0])),
    ])
    .status_only();

pub static TIME_GET_UTC_TIME: Command = Command::new(Facility::LIBRARY_TIME, 0, true)
    .named("TimeGetUtcTime")
    .with_response(FILE_TIME);

pub static TIME_SET_UTC_TIME: Command = Command::new(Facility::LIBRARY_TIME, 1, false)
    .named("TimeSetUtcTime")
    .with_transfer(&[("NewTime", FILE_TIME)])
    .status_only();

pub static TIME_GET_LOCAL_TIME: Command = Command::new(Facility::LIBRARY_TIME, 2, true)
    .named("TimeGetLocalTime")
    .with_response(BAND_SYSTEM_TIME);

pub static TIME_SET_TIME_ZONE_FILE: Command = Command::new(Facility::LIBRARY_TIME, 4, false)
    .named("TimeSetTimeZoneFile");

pub static TIME_ZONE_FILE_GET_VERSION: Command = Command::new(Facility::LIBRARY_TIME, 6, true)
    .named("TimeZoneFileGetVersion")
    .with_response(Field::U32);

pub static LOGGER_GET_CHUNK_DATA: Command = Command::new(Facility::LIBRARY_LOGGER, 1, true)
    .named("LoggerGetChunkData");

pub static LOGGER_ENABLE_LOGGING: Command = Command::new(Facility::LIBRARY_LOGGER, 3, false)
    .named("LoggerEnableLogging");

pub static LOGGER_DISABLE_LOGGING: Command = Command::new(Facility::LIBRARY_LOGGER, 4, false)
    .named("LoggerDisableLogging");

pub static LOGGER_GET_CHUNK_COUNTS: Command = Command::new(Facility::LIBRARY_LOGGER, 9, true)
    .named("LoggerGetChunkCounts")
    .with_response(Field::Struct(&[
        ("LoggedChunkCount", Field::U32),
        ("LoggerChunkCount", Field::U32),
    ]));

pub static LOGGER_FLUSH: Command = Command::new(Facility::LIBRARY_LOGGER, 13, false)
    .named("LoggerFlush")
    .with_transfer(&[])
    .status_only();

pub static LOGGER_GET_CHUNK_RANGE_METADATA: Command = Command::new(Facility::LIBRARY_LOGGER, 14, true)
    .named("LoggerGetChunkRangeMetadata")
    .with_arguments(&[("ChunkCount", Field::U32)])
    .with_response(CHUNK_RANGE);

pub static LOGGER_GET_CHUNK_RANGE_DATA: Command = Command::new(Facility::LIBRARY_LOGGER, 15, true)
    .named("LoggerGetChunkRangeData")
    .with_arguments(&[
        ("StartingSeqNumber", Field::U32),
        ("EndingSeqNumber", Field::U32),
        ("DataLength", Field::U32),
    ])
    .with_response(Field::Greedy);

pub static LOGGER_DELETE_CHUNK_RANGE: Command = Command::new(Facility::LIBRARY_LOGGER, 16, false)
    .named("LoggerDeleteChunkRange")
    .with_data_length(0x0C)
    .with_transfer(CHUNK_RANGE_FIELDS)
    .status_only();

pub static PROFILE_GET_DATA_APP: Command = Command::new(Facility::MODULE_PROFILE, 6, true)
    .named("ProfileGetDataApp");

pub static PROFILE_SET_DATA_APP: Command = Command::new(Facility::MODULE_PROFILE, 7, false)
    .named("ProfileSetDataApp");

pub static PROFILE_GET_DATA_FW: Command = Command::new(Facility::MODULE_PROFILE, 8, true)
    .named("ProfileGetDataFW");

pub static PROFILE_SET_DATA_FW: Command = Command::new(Facility::MODULE_PROFILE, 9, false)
    .named("ProfileSetDataFW");

pub static REMOTE_SUBSCRIPTION_SUBSCRIBE: Command = Command::new(Facility::LIBRARY_REMOTE_SUBSCRIPTION, 0, false)
    .named("RemoteSubscriptionSubscribe")
    .with_transfer(&[("Type", Field::U8), ("Flag", FALSE_BOOL32)])
    .status_only();

pub static REMOTE_SUBSCRIPTION_UNSUBSCRIBE: Command = Command::new(Facility::LIBRARY_REMOTE_SUBSCRIPTION, 1, false)
    .named("RemoteSubscriptionUnsubscribe")
    .with_transfer(&[("Type", Field::U8), ("Flag", FALSE_BOOL32)])
    .status_only();

pub static REMOTE_SUBSCRIPTION_GET_DATA_LENGTH: Command = Command::new(Facility::LIBRARY_REMOTE_SUBSCRIPTION, 2, true)
    .named("RemoteSubscriptionGetDataLength");

pub static REMOTE_SUBSCRIPTION_GET_DATA: Command = Command::new(Facility::LIBRARY_REMOTE_SUBSCRIPTION, 3, true)
    .named("RemoteSubscriptionGetData");

pub static REMOTE_SUBSCRIPTION_SUBSCRIBE_ID: Command = Command::new(Facility::LIBRARY_REMOTE_SUBSCRIPTION, 7, false)
    .named("RemoteSubscriptionSubscribeId")
    .with_transfer(&[
        ("Type", Field::U8),
        ("Flag", FALSE_BOOL32),
        ("GUID", Field::Const(&PUSH_SERVICE)),
    ])
    .status_only();

pub static REMOTE_SUBSCRIPTION_UNSUBSCRIBE_ID: Command = Command::new(Facility::LIBRARY_REMOTE_SUBSCRIPTION, 8, false)
    .named("RemoteSubscriptionUnsubscribeId")
    .with_transfer(&[("Type", Field::U8), ("GUID", Field::Const(&PUSH_SERVICE))])
    .status_only();

pub static NOTIFICATION: Command = Command::new(Facility::MODULE_NOTIFICATION, 0, false)
    .named("Notification");

pub static NOTIFICATION_PROTO_BUF: Command = Command::new(Facility::MODULE_NOTIFICATION, 5, false)
    .named("NotificationProtoBuf");

pub static DYNAMIC_APP_REGISTER_APP: Command = Command::new(Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 0, false)
    .named("DynamicAppRegisterApp");

pub static DYNAMIC_APP_REMOVE_APP: Command = Command::new(Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 1, false)
    .named("DynamicAppRemoveApp");

pub static DYNAMIC_APP_REGISTER_APP_ICONS: Command = Command::new(Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 2, false)
    .named("DynamicAppRegisterAppIcons");

pub static DYNAMIC_APP_SET_APP_TILE_INDEX: Command = Command::new(Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 3, false)
    .named("DynamicAppSetAppTileIndex");

pub static DYNAMIC_APP_SET_APP_BADGE_TILE_INDEX: Command = Command::new(Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 5, false)
    .named("DynamicAppSetAppBadgeTileIndex");

pub static DYNAMIC_APP_SET_APP_NOTIFICATION_TILE_INDEX: Command = Command::new(Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 11, false)
    .named("DynamicAppSetAppNotificationTileIndex");

pub static DYNAMIC_PAGE_LAYOUT_SET: Command = Command::new(Facility::MODULE_FIREBALL_PAGE_MANAGEMENT, 0, false)
    .named("DynamicPageLayoutSet");

pub static DYNAMIC_PAGE_LAYOUT_REMOVE: Command = Command::new(Facility::MODULE_FIREBALL_PAGE_MANAGEMENT, 1, false)
    .named("DynamicPageLayoutRemove");

pub static DYNAMIC_PAGE_LAYOUT_GET: Command = Command::new(Facility::MODULE_FIREBALL_PAGE_MANAGEMENT, 2, true)
    .named("DynamicPageLayoutGet");

pub static INSTALLED_APP_LIST_GET: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 0, true)
    .named("InstalledAppListGet");

pub static INSTALLED_APP_LIST_SET: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 1, false)
    .named("InstalledAppListSet")
    .with_arguments(&[("Count", Field::U32)])
    .with_transfer(&[("Tiles", Field::PrefixedArray(&TILE_DATA))])
    .status_only();

pub static INSTALLED_APP_LIST_START_STRIP_SYNC_START: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 2, false)
    .named("InstalledAppListStartStripSyncStart")
    .with_transfer(&[])
    .status_only();

pub static INSTALLED_APP_LIST_START_STRIP_SYNC_END: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 3, false)
    .named("InstalledAppListStartStripSyncEnd")
    .with_transfer(&[])
    .status_only();

pub static INSTALLED_APP_LIST_GET_DEFAULTS: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 4, true)
    .named("InstalledAppListGetDefaults");

pub static INSTALLED_APP_LIST_SET_TILE: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 6, false)
    .named("InstalledAppListSetTile")
    .with_transfer(&[("TileData", TILE_DATA)])
    .status_only();

pub static INSTALLED_APP_LIST_GET_TILE: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 7, true)
    .named("InstalledAppListGetTile");

pub static INSTALLED_APP_LIST_GET_SETTINGS_MASK: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 13, true)
    .named("InstalledAppListGetSettingsMask");

pub static INSTALLED_APP_LIST_SET_SETTINGS_MASK: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 14, false)
    .named("InstalledAppListSetSettingsMask")
    .with_transfer(&[("GUID", Field::Guid), ("SettingsMask", Field::U16)])
    .status_only();

pub static INSTALLED_APP_LIST_ENABLE_SETTING: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 15, false)
    .named("InstalledAppListEnableSetting");

pub static INSTALLED_APP_LIST_DISABLE_SETTING: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 16, false)
    .named("InstalledAppListDisableSetting");

pub static INSTALLED_APP_LIST_GET_NO_IMAGES: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 18, true)
    .named("InstalledAppListGetNoImages");

pub static INSTALLED_APP_LIST_GET_DEFAULTS_NO_IMAGES: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 19, true)
    .named("InstalledAppListGetDefaultsNoImages");

pub static INSTALLED_APP_LIST_GET_MAX_TILE_COUNT: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 21, true)
    .named("InstalledAppListGetMaxTileCount")
    .with_response(Field::U32);

pub static INSTALLED_APP_LIST_GET_MAX_TILE_ALLOCATED_COUNT: Command = Command::new(Facility::MODULE_INSTALLED_APP_LIST, 22, true)
    .named("InstalledAppListGetMaxTileAllocatedCount")
    .with_response(Field::U32);

pub static SYSTEM_SETTINGS_OOBE_COMPLETE_CLEAR: Command = Command::new(Facility::MODULE_SYSTEM_SETTINGS, 0, false)
    .named("SystemSettingsOobeCompleteClear")
    .with_transfer(&[])
    .status_only();

pub static SYSTEM_SETTINGS_OOBE_COMPLETE_SET: Command = Command::new(Facility::MODULE_SYSTEM_SETTINGS, 1, false)
    .named("SystemSettingsOobeCompleteSet")
    .with_transfer(&[])
    .status_only();

pub static SYSTEM_SETTINGS_FACTORY_RESET: Command = Command::new(Facility::MODULE_SYSTEM_SETTINGS, 7, true)
    .named("SystemSettingsFactoryReset");

pub static SYSTEM_SETTINGS_GET_TIME_ZONE: Command = Command::new(Facility::MODULE_SYSTEM_SETTINGS, 10, true)
    .named("SystemSettingsGetTimeZone");

pub static SYSTEM_SETTINGS_SET_TIME_ZONE: Command = Command::new(Facility::MODULE_SYSTEM_SETTINGS, 11, false)
    .named("SystemSettingsSetTimeZone");

pub static SYSTEM_SETTINGS_SET_EPHEMERIS_FILE: Command = Command::new(Facility::MODULE_SYSTEM_SETTINGS, 15, false)
    .named("SystemSettingsSetEphemerisFile");

pub static SYSTEM_SETTINGS_GET_ME_TILE_IMAGE_ID: Command = Command::new(Facility::MODULE_SYSTEM_SETTINGS, 18, true)
    .named("SystemSettingsGetMeTileImageID");

pub static SYSTEM_SETTINGS_OOBE_COMPLETE_GET: Command = Command::new(Facility::MODULE_SYSTEM_SETTINGS, 19, true)
    .named("SystemSettingsOobeCompleteGet")
    .with_response(Field::Bool32);

pub static SYSTEM_SETTINGS_ENABLE_DEMO_MODE: Command = Command::new(Facility::MODULE_SYSTEM_SETTINGS, 25, false)
    .named("SystemSettingsEnableDemoMode")
    .with_transfer(&[])
    .status_only();

pub static SYSTEM_SETTINGS_DISABLE_DEMO_MODE: Command = Command::new(Facility::MODULE_SYSTEM_SETTINGS, 26, false)
    .named("SystemSettingsDisableDemoMode")
    .with_transfer(&[])
    .status_only();

pub static SRAMFW_UPDATE_LOAD_DATA: Command = Command::new(Facility::LIBRARY_SRAMFW_UPDATE, 0, false)
    .named("SRAMFWUpdateLoadData")
    .with_transfer(&[("UpdateFileStream", Field::Greedy)]);

pub static SRAMFW_UPDATE_BOOT_INTO_UPDATE_MODE: Command = Command::new(Facility::LIBRARY_SRAMFW_UPDATE, 1, false)
    .named("SRAMFWUpdateBootIntoUpdateMode")
    .with_transfer(&[])
    .status_only();

pub static SRAMFW_UPDATE_VALIDATE_ASSETS: Command = Command::new(Facility::LIBRARY_SRAMFW_UPDATE, 2, true)
    .named("SRAMFWUpdateValidateAssets");

pub static E_FLASH_READ: Command = Command::new(Facility::DRIVER_E_FLASH, 1, true)
    .named("EFlashRead")
    .with_arguments(&[("Address", Field::U32), ("DataLength", Field::U32)])
    .with_response(Field::Greedy);

pub static GPS_IS_ENABLED: Command = Command::new(Facility::LIBRARY_GPS, 6, true)
    .named("GpsIsEnabled");

pub static GPS_EPHEMERIS_COVERAGE_DATES: Command = Command::new(Facility::LIBRARY_GPS, 13, true)
    .named("GpsEphemerisCoverageDates")
    .with_response(Field::Struct(&[("From", FILE_TIME), ("Until", FILE_TIME)]));

pub static FIREBALL_UI_NAVIGATE_TO_SCREEN: Command = Command::new(Facility::MODULE_FIREBALL_UI, 0, false)
    .named("FireballUINavigateToScreen")
    .with_transfer(&[("Screen", Field::U16)])
    .status_only();

pub static FIREBALL_UI_CLEAR_ME_TILE_IMAGE: Command = Command::new(Facility::MODULE_FIREBALL_UI, 6, false)
    .named("FireballUIClearMeTileImage");

pub static FIREBALL_UI_SET_SMS_RESPONSE: Command = Command::new(Facility::MODULE_FIREBALL_UI, 7, false)
    .named("FireballUISetSmsResponse");

pub static FIREBALL_UI_GET_ALL_SMS_RESPONSE: Command = Command::new(Facility::MODULE_FIREBALL_UI, 11, true)
    .named("FireballUIGetAllSmsResponse");

pub static FIREBALL_UI_READ_ME_TILE_IMAGE: Command = Command::new(Facility::MODULE_FIREBALL_UI, 14, true)
    .named("FireballUIReadMeTileImage");

pub static FIREBALL_UI_WRITE_ME_TILE_IMAGE_WITH_ID: Command = Command::new(Facility::MODULE_FIREBALL_UI, 17, false)
    .named("FireballUIWriteMeTileImageWithID")
    .with_arguments(&[("ImageId", Field::U32)])
    .with_transfer(&[("ImageBytes", Field::Greedy)]);

pub static THEME_COLOR_SET_FIRST_PARTY_THEME: Command = Command::new(Facility::MODULE_THEME_COLOR, 0, false)
    .named("ThemeColorSetFirstPartyTheme");

pub static THEME_COLOR_GET_FIRST_PARTY_THEME: Command = Command::new(Facility::MODULE_THEME_COLOR, 1, true)
    .named("ThemeColorGetFirstPartyTheme");

pub static THEME_COLOR_SET_CUSTOM_THEME: Command = Command::new(Facility::MODULE_THEME_COLOR, 2, false)
    .named("ThemeColorSetCustomTheme")
    .with_transfer(&[
        ("Base", ARGB),
        ("Highlight", ARGB),
        ("Lowlight", ARGB),
        ("SecondaryText", ARGB),
        ("HighContrast", ARGB),
        ("Muted", ARGB),
        ("GUID", Field::Utf8(16)),
    ]);

pub static THEME_COLOR_RESET: Command = Command::new(Facility::MODULE_THEME_COLOR, 4, false)
    .named("ThemeColorReset")
    .with_transfer(&[])
    .status_only();

pub static HAPTIC_PLAY_VIBRATION_STREAM: Command = Command::new(Facility::LIBRARY_HAPTIC, 0, false)
    .named("HapticPlayVibrationStream");

pub static GOAL_TRACKER_SET: Command = Command::new(Facility::MODULE_GOAL_TRACKER, 0, false)
    .named("GoalTrackerSet");

pub static FITNESS_PLANS_WRITE_FILE: Command = Command::new(Facility::LIBRARY_FITNESS_PLANS, 4, false)
    .named("FitnessPlansWriteFile");

pub static GOLF_COURSE_FILE_WRITE: Command = Command::new(Facility::LIBRARY_GOLF, 0, false)
    .named("GolfCourseFileWrite");

pub static GOLF_COURSE_FILE_GET_MAX_SIZE: Command = Command::new(Facility::LIBRARY_GOLF, 1, true)
    .named("GolfCourseFileGetMaxSize");

pub static OOBE_SET_STAGE: Command = Command::new(Facility::MODULE_OOBE, 0, false)
    .named("OobeSetStage")
    .with_transfer(&[("Stage", Field::U16)]);

pub static OOBE_GET_STAGE: Command = Command::new(Facility::MODULE_OOBE, 1, true)
    .named("OobeGetStage")
    .with_response(Field::Struct(&[("Stage", Field::U16)]));

pub static OOBE_FINALIZE: Command = Command::new(Facility::MODULE_OOBE, 2, false)
    .named("OobeFinalize")
    .with_transfer(&[])
    .status_only();

pub static CORTANA_NOTIFICATION: Command = Command::new(Facility::MODULE_CORTANA, 0, false)
    .named("CortanaNotification");

pub static CORTANA_START: Command = Command::new(Facility::MODULE_CORTANA, 1, false)
    .named("CortanaStart");

pub static CORTANA_STOP: Command = Command::new(Facility::MODULE_CORTANA, 2, false)
    .named("CortanaStop");

pub static CORTANA_CANCEL: Command = Command::new(Facility::MODULE_CORTANA, 3, false)
    .named("CortanaCancel");

pub static PERSISTED_APP_DATA_SET_RUN_METRICS: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 0, false)
    .named("PersistedAppDataSetRunMetrics");

pub static PERSISTED_APP_DATA_GET_RUN_METRICS: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 1, true)
    .named("PersistedAppDataGetRunMetrics");

pub static PERSISTED_APP_DATA_SET_BIKE_METRICS: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 2, false)
    .named("PersistedAppDataSetBikeMetrics");

pub static PERSISTED_APP_DATA_GET_BIKE_METRICS: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 3, true)
    .named("PersistedAppDataGetBikeMetrics");

pub static PERSISTED_APP_DATA_SET_BIKE_SPLIT_MULT: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 4, false)
    .named("PersistedAppDataSetBikeSplitMult");

pub static PERSISTED_APP_DATA_GET_BIKE_SPLIT_MULT: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 5, true)
    .named("PersistedAppDataGetBikeSplitMult");

pub static PERSISTED_APP_DATA_SET_WORKOUT_ACTIVITIES: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 9, false)
    .named("PersistedAppDataSetWorkoutActivities");

pub static PERSISTED_APP_DATA_GET_WORKOUT_ACTIVITIES: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 16, true)
    .named("PersistedAppDataGetWorkoutActivities");

pub static PERSISTED_APP_DATA_SET_SLEEP_NOTIFICATION: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 17, false)
    .named("PersistedAppDataSetSleepNotification");

pub static PERSISTED_APP_DATA_GET_SLEEP_NOTIFICATION: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 18, true)
    .named("PersistedAppDataGetSleepNotification");

pub static PERSISTED_APP_DATA_DISABLE_SLEEP_NOTIFICATION: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 19, false)
    .named("PersistedAppDataDisableSleepNotification");

pub static PERSISTED_APP_DATA_SET_LIGHT_EXPOSURE_NOTIFICATION: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 21, false)
    .named("PersistedAppDataSetLightExposureNotification");

pub static PERSISTED_APP_DATA_GET_LIGHT_EXPOSURE_NOTIFICATION: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 22, true)
    .named("PersistedAppDataGetLightExposureNotification");

pub static PERSISTED_APP_DATA_DISABLE_LIGHT_EXPOSURE_NOTIFICATION: Command = Command::new(Facility::MODULE_PERSISTED_APPLICATION_DATA, 23, false)
    .named("PersistedAppDataDisableLightExposureNotification");

pub static GET_PRODUCT_SERIAL_NUMBER: Command = Command::new(Facility::LIBRARY_CONFIGURATION, 8, true)
    .named("GetProductSerialNumber")
    .with_response(Field::Utf8(12));

pub static KEYBOARD_CMD: Command = Command::new(Facility::LIBRARY_KEYBOARD, 0, false)
    .named("KeyboardCmd");

pub static SUBSCRIPTION_LOGGER_SUBSCRIBE: Command = Command::new(Facility::MODULE_LOGGER_SUBSCRIPTIONS, 0, false)
    .named("SubscriptionLoggerSubscribe");

pub static SUBSCRIPTION_LOGGER_UNSUBSCRIBE: Command = Command::new(Facility::MODULE_LOGGER_SUBSCRIPTIONS, 1, false)
    .named("SubscriptionLoggerUnsubscribe");

pub static CRASH_DUMP_GET_FILE_SIZE: Command = Command::new(Facility::DRIVER_CRASH_DUMP, 1, true)
    .named("CrashDumpGetFileSize")
    .with_response(Field::U32);

pub static CRASH_DUMP_GET_AND_DELETE_FILE: Command = Command::new(Facility::DRIVER_CRASH_DUMP, 2, true)
    .named("CrashDumpGetAndDeleteFile");

pub static INSTRUMENTATION_GET_FILE_SIZE: Command = Command::new(Facility::MODULE_INSTRUMENTATION, 4, true)
    .named("InstrumentationGetFileSize")
    .with_response(Field::U32);

pub static INSTRUMENTATION_GET_FILE: Command = Command::new(Facility::MODULE_INSTRUMENTATION, 5, true)
    .named("InstrumentationGetFile")
    .with_arguments(&[("DataLength", Field::U32)])
    .with_response(Field::Greedy);

pub static PERSISTED_STATISTICS_RUN_GET: Command = Command::new(Facility::MODULE_PERSISTED_STATISTICS, 2, true)
    .named("PersistedStatisticsRunGet");

pub static PERSISTED_STATISTICS_WORKOUT_GET: Command = Command::new(Facility::MODULE_PERSISTED_STATISTICS, 3, true)
    .named("PersistedStatisticsWorkoutGet");

pub static PERSISTED_STATISTICS_SLEEP_GET: Command = Command::new(Facility::MODULE_PERSISTED_STATISTICS, 4, true)
    .named("PersistedStatisticsSleepGet");

pub static PERSISTED_STATISTICS_GUIDED_WORKOUT_GET: Command = Command::new(Facility::MODULE_PERSISTED_STATISTICS, 5, true)
    .named("PersistedStatisticsGuidedWorkoutGet");

/// Every built-in command, in declaration order.
pub static COMMANDS: &[&Command] = &[
    &CORE_MODULE_GET_VERSION,
    &CORE_MODULE_GET_UNIQUE_ID,
    &CORE_MODULE_WHO_AM_I,
    &CORE_MODULE_GET_LOG_VERSION,
    &CORE_MODULE_GET_API_VERSION,
    &CORE_MODULE_SDK_CHECK,
    &TIME_GET_UTC_TIME,
    &TIME_SET_UTC_TIME,
    &TIME_GET_LOCAL_TIME,
    &TIME_SET_TIME_ZONE_FILE,
    &TIME_ZONE_FILE_GET_VERSION,
    &LOGGER_GET_CHUNK_DATA,
    &LOGGER_ENABLE_LOGGING,
    &LOGGER_DISABLE_LOGGING,
    &LOGGER_GET_CHUNK_COUNTS,
    &LOGGER_FLUSH,
    &LOGGER_GET_CHUNK_RANGE_METADATA,
    &LOGGER_GET_CHUNK_RANGE_DATA,
    &LOGGER_DELETE_CHUNK_RANGE,
    &PROFILE_GET_DATA_APP,
    &PROFILE_SET_DATA_APP,
    &PROFILE_GET_DATA_FW,
    &PROFILE_SET_DATA_FW,
    &REMOTE_SUBSCRIPTION_SUBSCRIBE,
    &REMOTE_SUBSCRIPTION_UNSUBSCRIBE,
    &REMOTE_SUBSCRIPTION_GET_DATA_LENGTH,
    &REMOTE_SUBSCRIPTION_GET_DATA,
    &REMOTE_SUBSCRIPTION_SUBSCRIBE_ID,
    &REMOTE_SUBSCRIPTION_UNSUBSCRIBE_ID,
    &NOTIFICATION,
    &NOTIFICATION_PROTO_BUF,
    &DYNAMIC_APP_REGISTER_APP,
    &DYNAMIC_APP_REMOVE_APP,
    &DYNAMIC_APP_REGISTER_APP_ICONS,
    &DYNAMIC_APP_SET_APP_TILE_INDEX,
    &DYNAMIC_APP_SET_APP_BADGE_TILE_INDEX,
    &DYNAMIC_APP_SET_APP_NOTIFICATION_TILE_INDEX,
    &DYNAMIC_PAGE_LAYOUT_SET,
    &DYNAMIC_PAGE_LAYOUT_REMOVE,
    &DYNAMIC_PAGE_LAYOUT_GET,
    &INSTALLED_APP_LIST_GET,
    &INSTALLED_APP_LIST_SET,
    &INSTALLED_APP_LIST_START_STRIP_SYNC_START,
    &INSTALLED_APP_LIST_START_STRIP_SYNC_END,
    &INSTALLED_APP_LIST_GET_DEFAULTS,
    &INSTALLED_APP_LIST_SET_TILE,
    &INSTALLED_APP_LIST_GET_TILE,
    &INSTALLED_APP_LIST_GET_SETTINGS_MASK,
    &INSTALLED_APP_LIST_SET_SETTINGS_MASK,
    &INSTALLED_APP_LIST_ENABLE_SETTING,
    &INSTALLED_APP_LIST_DISABLE_SETTING,
    &INSTALLED_APP_LIST_GET_NO_IMAGES,
    &INSTALLED_APP_LIST_GET_DEFAULTS_NO_IMAGES,
    &INSTALLED_APP_LIST_GET_MAX_TILE_COUNT,
    &INSTALLED_APP_LIST_GET_MAX_TILE_ALLOCATED_COUNT,
    &SYSTEM_SETTINGS_OOBE_COMPLETE_CLEAR,
    &SYSTEM_SETTINGS_OOBE_COMPLETE_SET,
    &SYSTEM_SETTINGS_FACTORY_RESET,
    &SYSTEM_SETTINGS_GET_TIME_ZONE,
    &SYSTEM_SETTINGS_SET_TIME_ZONE,
    &SYSTEM_SETTINGS_SET_EPHEMERIS_FILE,
    &SYSTEM_SETTINGS_GET_ME_TILE_IMAGE_ID,
    &SYSTEM_SETTINGS_OOBE_COMPLETE_GET,
    &SYSTEM_SETTINGS_ENABLE_DEMO_MODE,
    &SYSTEM_SETTINGS_DISABLE_DEMO_MODE,
    &SRAMFW_UPDATE_LOAD_DATA,
    &SRAMFW_UPDATE_BOOT_INTO_UPDATE_MODE,
    &SRAMFW_UPDATE_VALIDATE_ASSETS,
    &E_FLASH_READ,
    &GPS_IS_ENABLED,
    &GPS_EPHEMERIS_COVERAGE_DATES,
    &FIREBALL_UI_NAVIGATE_TO_SCREEN,
    &FIREBALL_UI_CLEAR_ME_TILE_IMAGE,
    &FIREBALL_UI_SET_SMS_RESPONSE,
    &FIREBALL_UI_GET_ALL_SMS_RESPONSE,
    &FIREBALL_UI_READ_ME_TILE_IMAGE,
    &FIREBALL_UI_WRITE_ME_TILE_IMAGE_WITH_ID,
    &THEME_COLOR_SET_FIRST_PARTY_THEME,
    &THEME_COLOR_GET_FIRST_PARTY_THEME,
    &THEME_COLOR_SET_CUSTOM_THEME,
    &THEME_COLOR_RESET,
    &HAPTIC_PLAY_VIBRATION_STREAM,
    &GOAL_TRACKER_SET,
    &FITNESS_PLANS_WRITE_FILE,
    &GOLF_COURSE_FILE_WRITE,
    &GOLF_COURSE_FILE_GET_MAX_SIZE,
    &OOBE_SET_STAGE,
    &OOBE_GET_STAGE,
    &OOBE_FINALIZE,
    &CORTANA_NOTIFICATION,
    &CORTANA_START,
    &CORTANA_STOP,
    &CORTANA_CANCEL,
    &PERSISTED_APP_DATA_SET_RUN_METRICS,
    &PERSISTED_APP_DATA_GET_RUN_METRICS,
    &PERSISTED_APP_DATA_SET_BIKE_METRICS,
    &PERSISTED_APP_DATA_GET_BIKE_METRICS,
    &PERSISTED_APP_DATA_SET_BIKE_SPLIT_MULT,
    &PERSISTED_APP_DATA_GET_BIKE_SPLIT_MULT,
    &PERSISTED_APP_DATA_SET_WORKOUT_ACTIVITIES,
    &PERSISTED_APP_DATA_GET_WORKOUT_ACTIVITIES,
    &PERSISTED_APP_DATA_SET_SLEEP_NOTIFICATION,
    &PERSISTED_APP_DATA_GET_SLEEP_NOTIFICATION,
    &PERSISTED_APP_DATA_DISABLE_SLEEP_NOTIFICATION,
    &PERSISTED_APP_DATA_SET_LIGHT_EXPOSURE_NOTIFICATION,
    &PERSISTED_APP_DATA_GET_LIGHT_EXPOSURE_NOTIFICATION,
    &PERSISTED_APP_DATA_DISABLE_LIGHT_EXPOSURE_NOTIFICATION,
    &GET_PRODUCT_SERIAL_NUMBER,
    &KEYBOARD_CMD,
    &SUBSCRIPTION_LOGGER_SUBSCRIBE,
    &SUBSCRIPTION_LOGGER_UNSUBSCRIBE,
    &CRASH_DUMP_GET_FILE_SIZE,
    &CRASH_DUMP_GET_AND_DELETE_FILE,
    &INSTRUMENTATION_GET_FILE_SIZE,
    &INSTRUMENTATION_GET_FILE,
    &PERSISTED_STATISTICS_RUN_GET,
    &PERSISTED_STATISTICS_WORKOUT_GET,
    &PERSISTED_STATISTICS_SLEEP_GET,
    &PERSISTED_STATISTICS_GUIDED_WORKOUT_GET,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_sizes() {
        assert_eq!(TILE_RECORD_SIZE, 88);
        assert_eq!(FIRMWARE_VERSION.sizeof(), Some(13));
        assert_eq!(APP_VERSION.sizeof(), Some(19));
        assert_eq!(BAND_SYSTEM_TIME.sizeof(), Some(16));
    }

    #[test]
    fn declared_lengths_follow_layouts() {
        assert_eq!(CORE_MODULE_GET_VERSION.declared_data_length(), Some(57));
        assert_eq!(CORE_MODULE_GET_UNIQUE_ID.declared_data_length(), Some(66));
        assert_eq!(LOGGER_DELETE_CHUNK_RANGE.declared_data_length(), Some(12));
        assert_eq!(REMOTE_SUBSCRIPTION_SUBSCRIBE_ID.declared_data_length(), Some(21));
        assert_eq!(LOGGER_FLUSH.declared_data_length(), Some(0));
        assert_eq!(INSTALLED_APP_LIST_SET.declared_data_length(), None);
    }

    #[test]
    fn every_command_is_named() {
        assert_eq!(COMMANDS.len(), 119);
        assert!(COMMANDS.iter().all(|c| c.name.is_some()));
    }
}
