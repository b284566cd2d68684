//! Catalog of named device statuses.
//!
//! Keyed by `(customer, severity, facility, code)`. Built into a hash index on
//! first lookup.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::facility::Facility;
use crate::status::Severity;

type Key = (bool, Severity, Facility, u16);

/// `(name, customer, severity, facility, code)`
static STATUSES: &[(&str, bool, Severity, Facility, u16)] = &[
    ("OobeError0", true, Severity::Error, Facility::MODULE_OOBE, 0),
    ("OobeError8", true, Severity::Error, Facility::MODULE_OOBE, 8),
    ("BadDataLength", true, Severity::Error, Facility::MYSTERY, 1),
    ("Success", false, Severity::Null, Facility::NULL, 0),
    ("DmaPending", true, Severity::Null, Facility::DRIVER_DMA, 0),
    ("DmaChannelBusy", true, Severity::Error, Facility::DRIVER_DMA, 0),
    ("DmaNoChanInit", true, Severity::Error, Facility::DRIVER_DMA, 1),
    ("DmaOddSourceAddr", true, Severity::Error, Facility::DRIVER_DMA, 2),
    ("DmaOddDestAddr", true, Severity::Error, Facility::DRIVER_DMA, 3),
    ("DmaOddByteCount", true, Severity::Error, Facility::DRIVER_DMA, 4),
    ("DmaDestBusErr", true, Severity::Error, Facility::DRIVER_DMA, 5),
    ("DmaSourceBusErr", true, Severity::Error, Facility::DRIVER_DMA, 6),
    ("DmaOddSgaAddr", true, Severity::Error, Facility::DRIVER_DMA, 7),
    ("DmaCiterErr", true, Severity::Error, Facility::DRIVER_DMA, 8),
    ("DmaDoffErr", true, Severity::Error, Facility::DRIVER_DMA, 9),
    ("DmaSoffErr", true, Severity::Error, Facility::DRIVER_DMA, 10),
    ("DmaCancelled", true, Severity::Error, Facility::DRIVER_DMA, 11),
    ("DmaUnknown", true, Severity::Error, Facility::DRIVER_DMA, 12),
    ("DmaBadChannel", true, Severity::Error, Facility::DRIVER_DMA, 13),
    ("DmaBadMuxIndex", true, Severity::Error, Facility::DRIVER_DMA, 14),
    ("DmaBadSourceType", true, Severity::Error, Facility::DRIVER_DMA, 15),
    ("DmaBadDestType", true, Severity::Error, Facility::DRIVER_DMA, 16),
    ("DmaByteCountTooHigh", true, Severity::Error, Facility::DRIVER_DMA, 17),
    ("DisplayMissingDisplay", true, Severity::Error, Facility::DRIVER_DISPLAY, 0),
    ("DisplayAlreadyInitialized", true, Severity::Error, Facility::DRIVER_DISPLAY, 1),
    ("DisplayInvalidPowerTransition", true, Severity::Error, Facility::DRIVER_DISPLAY, 2),
    ("DisplayIsOff", true, Severity::Error, Facility::DRIVER_DISPLAY, 3),
    ("DisplayBltPending", true, Severity::Error, Facility::DRIVER_DISPLAY, 4),
    ("DisplayDmaInProgress", true, Severity::Error, Facility::DRIVER_DISPLAY, 5),
    ("DisplayTearingEffectIsrWithBlt", true, Severity::Null, Facility::DRIVER_DISPLAY, 6),
    ("DisplayTearingEffectIsrWithoutBlt", true, Severity::Null, Facility::DRIVER_DISPLAY, 7),
    ("BtleResetFailed", true, Severity::Error, Facility::DRIVER_BTLE, 0),
    ("BtleGpioInitFailed", true, Severity::Error, Facility::DRIVER_BTLE, 1),
    ("BtleInvalidArg", true, Severity::Error, Facility::DRIVER_BTLE, 2),
    ("BtleSetRftx", true, Severity::Error, Facility::DRIVER_BTLE, 3),
    ("BtleNoResponse", true, Severity::Error, Facility::DRIVER_BTLE, 4),
    ("BtleUartTxTimeout", true, Severity::Error, Facility::DRIVER_BTLE, 5),
    ("BtleUartRxTimeout", true, Severity::Error, Facility::DRIVER_BTLE, 6),
    ("BtleStackInitFailed", true, Severity::Error, Facility::DRIVER_BTLE, 7),
    ("PdbInvalidParam", true, Severity::Error, Facility::DRIVER_PDB, 0),
    ("PdbNotInitialized", true, Severity::Error, Facility::DRIVER_PDB, 1),
    ("PdbAlreadyInitialized", true, Severity::Error, Facility::DRIVER_PDB, 2),
    ("PdbNotEnabled", true, Severity::Error, Facility::DRIVER_PDB, 3),
    ("PdbSequenceError", true, Severity::Error, Facility::DRIVER_PDB, 4),
    ("AdcCalibrationError", true, Severity::Error, Facility::DRIVER_ADC, 0),
    ("AdcModuleBusy", true, Severity::Error, Facility::DRIVER_ADC, 1),
    ("AdcConversationStarted", true, Severity::Null, Facility::DRIVER_ADC, 2),
    ("AdcReadyForTrigger", true, Severity::Null, Facility::DRIVER_ADC, 3),
    ("AdcConversationComplete", true, Severity::Null, Facility::DRIVER_ADC, 4),
    ("AdcInitComplete", true, Severity::Null, Facility::DRIVER_ADC, 5),
    ("I2cTransactionPending", false, Severity::Null, Facility::DRIVER_I2C, 0),
    ("I2cNackReceived", false, Severity::Error, Facility::DRIVER_I2C, 1),
    ("I2cArbitrationLost", false, Severity::Error, Facility::DRIVER_I2C, 2),
    ("I2cClockHoldTimeout", false, Severity::Error, Facility::DRIVER_I2C, 3),
    ("I2cEnqueueBadModule", false, Severity::Error, Facility::DRIVER_I2C, 4),
    ("I2cEnqueueUninitialized", false, Severity::Error, Facility::DRIVER_I2C, 5),
    ("I2cEnqueueNullBuffer", false, Severity::Error, Facility::DRIVER_I2C, 6),
    ("I2cEnqueueReadHasZeroSize", false, Severity::Error, Facility::DRIVER_I2C, 7),
    ("I2cEnqueueDuplicateTransaction", false, Severity::Error, Facility::DRIVER_I2C, 8),
    ("I2cTransactionTimeout", false, Severity::Error, Facility::DRIVER_I2C, 9),
    ("I2cNotSupported", false, Severity::Error, Facility::DRIVER_I2C, 10),
    ("I2cNullTransaction", false, Severity::Error, Facility::DRIVER_I2C, 11),
    ("I2cEnqueueNullTransaction", false, Severity::Error, Facility::DRIVER_I2C, 12),
    ("I2cTransactionCorrupted", false, Severity::Error, Facility::DRIVER_I2C, 13),
    ("I2cBusUnrecoverable", false, Severity::Error, Facility::DRIVER_I2C, 14),
    ("GpioInvalidSignal", true, Severity::Error, Facility::DRIVER_GPIO, 0),
    ("GpioInvalidAlternate", true, Severity::Error, Facility::DRIVER_GPIO, 1),
    ("GpioTooManyInterrupts", true, Severity::Error, Facility::DRIVER_GPIO, 2),
    ("GpioInvalidInterruptFlag", true, Severity::Error, Facility::DRIVER_GPIO, 3),
    ("GpioPortFilterConflict", true, Severity::Error, Facility::DRIVER_GPIO, 4),
    ("GpioSignalFilterUnavailable", true, Severity::Error, Facility::DRIVER_GPIO, 5),
    ("MotorModuleBusy", true, Severity::Error, Facility::DRIVER_MOTOR, 0),
    ("MotorPowerLevelLow", true, Severity::Null, Facility::DRIVER_MOTOR, 1),
    ("DacNotInitialized", true, Severity::Error, Facility::DRIVER_DAC, 1),
    ("DacAlreadyInitialized", true, Severity::Error, Facility::DRIVER_DAC, 2),
    ("DacVrefError", true, Severity::Error, Facility::DRIVER_DAC, 3),
    ("RtcNullArgument", true, Severity::Error, Facility::DRIVER_RTC, 0),
    ("RtcInvalidTime", true, Severity::Error, Facility::DRIVER_RTC, 1),
    ("RtcTimeSyncDisabled", true, Severity::Error, Facility::DRIVER_RTC, 2),
    ("AnalogMgrModuleBusy", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 0),
    ("AnalogMgrInitialized", true, Severity::Null, Facility::DRIVER_ANALOG_MGR, 1),
    ("AnalogMgrInitializationStarted", true, Severity::Null, Facility::DRIVER_ANALOG_MGR, 2),
    ("AnalogMgrDeinitialized", true, Severity::Null, Facility::DRIVER_ANALOG_MGR, 3),
    ("AnalogMgrNotInitialized", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 4),
    ("AnalogMgrWriteCountInvalid", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 5),
    ("AnalogMgrReadCountInvalid", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 6),
    ("AnalogMgrWriteStarted", true, Severity::Null, Facility::DRIVER_ANALOG_MGR, 7),
    ("AnalogMgrWriteSuccessful", true, Severity::Null, Facility::DRIVER_ANALOG_MGR, 8),
    ("AnalogMgrReadStarted", true, Severity::Null, Facility::DRIVER_ANALOG_MGR, 9),
    ("AnalogMgrReadSuccessful", true, Severity::Null, Facility::DRIVER_ANALOG_MGR, 10),
    ("AnalogMgrSubscribed", true, Severity::Null, Facility::DRIVER_ANALOG_MGR, 11),
    ("AnalogMgrSubscriptionDataValid", true, Severity::Null, Facility::DRIVER_ANALOG_MGR, 12),
    ("AnalogMgrResetAlert", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 13),
    ("AnalogMgrBootloaderModeAlert", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 14),
    ("AnalogMgrNullParameter", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 15),
    ("AnalogMgrWriteFailed", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 16),
    ("AnalogMgrReadFailed", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 17),
    ("AnalogMgrResetReasonUpdateSuccess", true, Severity::Null, Facility::DRIVER_ANALOG_MGR, 18),
    ("AnalogMgrResetReasonUpdateFailure", true, Severity::Null, Facility::DRIVER_ANALOG_MGR, 19),
    ("AnalogMgrBootloaderCommandWriteStageFailed", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 20),
    ("AnalogMgrBootloaderCommandReadStageFailed", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 21),
    ("AnalogMgrProgramFlashRowWriteStageFailed", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 22),
    ("AnalogMgrProgramFlashRowReadStageFailed", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 23),
    ("AnalogMgrVerifyFlashRowWriteStageFailed", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 24),
    ("AnalogMgrVerifyFlashRowReadStageFailed", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 25),
    ("AnalogMgrVerifyApplicationWriteStageFailed", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 26),
    ("AnalogMgrVerifyApplicationReadStageFailed", true, Severity::Error, Facility::DRIVER_ANALOG_MGR, 27),
    ("PmuInitialized", true, Severity::Null, Facility::DRIVER_PMU, 0),
    ("PmuInitializationFailed", true, Severity::Error, Facility::DRIVER_PMU, 1),
    ("PmuWriteSynchronousCompleted", true, Severity::Null, Facility::DRIVER_PMU, 2),
    ("PmuWriteSynchronousFailed", true, Severity::Error, Facility::DRIVER_PMU, 3),
    ("PmuReadSynchronousCompleted", true, Severity::Null, Facility::DRIVER_PMU, 4),
    ("PmuReadSynchronousFailed", true, Severity::Error, Facility::DRIVER_PMU, 5),
    ("PmuNotInitialized", true, Severity::Error, Facility::DRIVER_PMU, 6),
    ("PmuUnitialized", true, Severity::Null, Facility::DRIVER_PMU, 7),
    ("PmuSetGpioCompleted", true, Severity::Null, Facility::DRIVER_PMU, 8),
    ("PmuSetCpioFailed", true, Severity::Error, Facility::DRIVER_PMU, 9),
    ("PmuWriteAsynchronousCompleted", true, Severity::Null, Facility::DRIVER_PMU, 10),
    ("PmuWriteAsynchronousFailed", true, Severity::Error, Facility::DRIVER_PMU, 11),
    ("PmuReadAsynchronousCompleted", true, Severity::Null, Facility::DRIVER_PMU, 12),
    ("PmuReadAsynchronousFailed", true, Severity::Error, Facility::DRIVER_PMU, 13),
    ("PmuTransactionsLocked", true, Severity::Error, Facility::DRIVER_PMU, 14),
    ("PmuPowerLatchSucceeded", true, Severity::Null, Facility::DRIVER_PMU, 15),
    ("PmuPowerUnlatchSucceeded", true, Severity::Null, Facility::DRIVER_PMU, 16),
    ("PmuUnitTestPassed", true, Severity::Null, Facility::DRIVER_PMU, 17),
    ("PmuUnitTestFailed", true, Severity::Error, Facility::DRIVER_PMU, 18),
    ("PmuSetGpioStarted", true, Severity::Null, Facility::DRIVER_PMU, 19),
    ("PmuSetChargeStateFailed", true, Severity::Error, Facility::DRIVER_PMU, 20),
    ("AlsInitialized", true, Severity::Null, Facility::DRIVER_ALS, 0),
    ("AlsInitializationFailed", true, Severity::Error, Facility::DRIVER_ALS, 1),
    ("AlsWriteSynchronousCompleted", true, Severity::Null, Facility::DRIVER_ALS, 2),
    ("AlsWriteSynchronousFailed", true, Severity::Error, Facility::DRIVER_ALS, 3),
    ("AlsReadSynchrounousCompleted", true, Severity::Null, Facility::DRIVER_ALS, 4),
    ("AlsReadSynchrounousFailed", true, Severity::Error, Facility::DRIVER_ALS, 5),
    ("AlsAlreadyInitialized", true, Severity::Error, Facility::DRIVER_ALS, 6),
    ("AlsUnitialized", true, Severity::Null, Facility::DRIVER_ALS, 7),
    ("AlsWriteAsynchronousCompleted", true, Severity::Null, Facility::DRIVER_ALS, 8),
    ("AlsWriteAsynchronousFailed", true, Severity::Error, Facility::DRIVER_ALS, 9),
    ("AlsReadAsynchronousCompleted", true, Severity::Null, Facility::DRIVER_ALS, 10),
    ("AlsReadAsynchronousFailed", true, Severity::Error, Facility::DRIVER_ALS, 11),
    ("AlsTransactionsLocked", true, Severity::Error, Facility::DRIVER_ALS, 12),
    ("AlsUnitTestPassed", true, Severity::Null, Facility::DRIVER_ALS, 13),
    ("AlsUnitTestFailed", true, Severity::Error, Facility::DRIVER_ALS, 14),
    ("AlsNotPresent", true, Severity::Error, Facility::DRIVER_ALS, 15),
    ("AlsNotConfigured", true, Severity::Error, Facility::DRIVER_ALS, 16),
    ("AlsQueueFull", true, Severity::Error, Facility::DRIVER_ALS, 17),
    ("AlsWriteStarted", true, Severity::Null, Facility::DRIVER_ALS, 18),
    ("AlsWriteEnqueued", true, Severity::Null, Facility::DRIVER_ALS, 19),
    ("AlsReadBusy", true, Severity::Error, Facility::DRIVER_ALS, 20),
    ("AlsReadEnqueued", true, Severity::Null, Facility::DRIVER_ALS, 21),
    ("AlsDeprecatedRegister", true, Severity::Error, Facility::DRIVER_ALS, 22),
    ("UartAsyncWritePending", true, Severity::Null, Facility::DRIVER_UART_ASYNC, 0),
    ("UartAsyncWriteBusy", true, Severity::Error, Facility::DRIVER_UART_ASYNC, 1),
    ("UartAsyncBadBaudRate", true, Severity::Error, Facility::DRIVER_UART_ASYNC, 2),
    ("UartAsyncZeroLength", true, Severity::Error, Facility::DRIVER_UART_ASYNC, 3),
    ("UartAsyncDmaUnavailable", true, Severity::Error, Facility::DRIVER_UART_ASYNC, 4),
    ("UartAsyncDmaTxIsrMiscall", true, Severity::Error, Facility::DRIVER_UART_ASYNC, 5),
    ("UartAsyncTxChannelNotInit", true, Severity::Error, Facility::DRIVER_UART_ASYNC, 6),
    ("UartAsyncTxDmaError", true, Severity::Error, Facility::DRIVER_UART_ASYNC, 7),
    ("ExternalRamFailedVerification", true, Severity::Error, Facility::DRIVER_EXTERNAL_RAM, 0),
    ("FlexBusNullArgument", true, Severity::Error, Facility::DRIVER_FLEX_BUS, 0),
    ("FlexBusBadCsRequested", true, Severity::Error, Facility::DRIVER_FLEX_BUS, 1),
    ("FlexBusBadAddressRangeForAddress", true, Severity::Error, Facility::DRIVER_FLEX_BUS, 2),
    ("FlexBusNotFlexBusAddress", true, Severity::Error, Facility::DRIVER_FLEX_BUS, 3),
    ("FlexBusBusWidthNotAvailable", true, Severity::Error, Facility::DRIVER_FLEX_BUS, 4),
    ("FlexBusWaitStatesTooLarge", true, Severity::Error, Facility::DRIVER_FLEX_BUS, 5),
    ("FlexBusAddressSetupTimeTooLarge", true, Severity::Error, Facility::DRIVER_FLEX_BUS, 6),
    ("FlexBusHoldTimeTooLarge", true, Severity::Error, Facility::DRIVER_FLEX_BUS, 7),
    ("SpiOperationPending", true, Severity::Null, Facility::DRIVER_SPI, 0),
    ("SpiStructOverwritten", true, Severity::Error, Facility::DRIVER_SPI, 1),
    ("SpiMicTransactionInProgress", true, Severity::Error, Facility::DRIVER_SPI, 2),
    ("SpiMicNoTransactionInProgress", true, Severity::Error, Facility::DRIVER_SPI, 3),
    ("SpiMicTimeoutStop", true, Severity::Error, Facility::DRIVER_SPI, 4),
    ("EFlashPending", true, Severity::Null, Facility::DRIVER_E_FLASH, 0),
    ("EFlashSpiError0", true, Severity::Error, Facility::DRIVER_E_FLASH, 1),
    ("EFlashBadJedecId0", true, Severity::Error, Facility::DRIVER_E_FLASH, 2),
    ("EFlashBadJedecId1", true, Severity::Error, Facility::DRIVER_E_FLASH, 3),
    ("EFlashBadJedecId2", true, Severity::Error, Facility::DRIVER_E_FLASH, 4),
    ("EFlashTimeout", true, Severity::Error, Facility::DRIVER_E_FLASH, 5),
    ("EFlashBusy", true, Severity::Error, Facility::DRIVER_E_FLASH, 6),
    ("EFlashUnableToWrite", true, Severity::Error, Facility::DRIVER_E_FLASH, 7),
    ("EFlashBadAddress", true, Severity::Error, Facility::DRIVER_E_FLASH, 8),
    ("EFlashBadSize", true, Severity::Error, Facility::DRIVER_E_FLASH, 9),
    ("EFlashWrError", true, Severity::Error, Facility::DRIVER_E_FLASH, 10),
    ("EFlashBadOperation", true, Severity::Error, Facility::DRIVER_E_FLASH, 11),
    ("EFlashSpiInitFail", true, Severity::Error, Facility::DRIVER_E_FLASH, 20),
    ("EFlashEraseCheckFail", true, Severity::Error, Facility::DRIVER_E_FLASH, 21),
    ("EFlashAddressConflict", true, Severity::Error, Facility::DRIVER_E_FLASH, 22),
    ("EFlashQueueEmpty", true, Severity::Error, Facility::DRIVER_E_FLASH, 23),
    ("EFlashStructAlreadyQueued", true, Severity::Error, Facility::DRIVER_E_FLASH, 24),
    ("EFlashNullStruct", true, Severity::Error, Facility::DRIVER_E_FLASH, 25),
    ("EFlashPageStraddled", true, Severity::Error, Facility::DRIVER_E_FLASH, 26),
    ("EFlashNullCallback", true, Severity::Error, Facility::DRIVER_E_FLASH, 27),
    ("EFlashNullBuffer", true, Severity::Error, Facility::DRIVER_E_FLASH, 28),
    ("EFlashPowerUpFail", true, Severity::Error, Facility::DRIVER_E_FLASH, 29),
    ("CrcPending", true, Severity::Null, Facility::DRIVER_CRC, 0),
    ("CrcNotReady", true, Severity::Error, Facility::DRIVER_CRC, 1),
    ("CrcNullPointer", true, Severity::Error, Facility::DRIVER_CRC, 2),
    ("CrcZeroSize", true, Severity::Error, Facility::DRIVER_CRC, 3),
    ("PFlashProgramFailed", true, Severity::Error, Facility::DRIVER_P_FLASH, 0),
    ("PFlashSectionProgramFailed", true, Severity::Error, Facility::DRIVER_P_FLASH, 1),
    ("PFlashSectionEraseFailed", true, Severity::Error, Facility::DRIVER_P_FLASH, 2),
    ("PFlashWriteFailed", true, Severity::Error, Facility::DRIVER_P_FLASH, 3),
    ("PFlashAddressInvalid", true, Severity::Error, Facility::DRIVER_P_FLASH, 4),
    ("PFlashInvalid2Up", true, Severity::Error, Facility::DRIVER_P_FLASH, 5),
    ("PFlashResetReasonWriteComplete", true, Severity::Null, Facility::DRIVER_P_FLASH, 6),
    ("FpuInvalid", true, Severity::Null, Facility::DRIVER_FPU, 0),
    ("FpuInitialized", true, Severity::Null, Facility::DRIVER_FPU, 1),
    ("FpuInitializedFailed", true, Severity::Error, Facility::DRIVER_FPU, 1),
    ("FpuUnitialized", true, Severity::Null, Facility::DRIVER_FPU, 2),
    ("FpuUnitializationFailed", true, Severity::Error, Facility::DRIVER_FPU, 2),
    ("FpuEnabled", true, Severity::Null, Facility::DRIVER_FPU, 3),
    ("FpuNotEnabled", true, Severity::Error, Facility::DRIVER_FPU, 3),
    ("FpuDisabled", true, Severity::Null, Facility::DRIVER_FPU, 4),
    ("FpuNotDisabled", true, Severity::Error, Facility::DRIVER_FPU, 4),
    ("FpuCommandHandlersRegistered", true, Severity::Null, Facility::DRIVER_FPU, 5),
    ("TimeTimerNotGreaterThan", true, Severity::Null, Facility::DRIVER_TIMERS, 0),
    ("WatchdogInvalidTimeout", true, Severity::Error, Facility::DRIVER_WATCH_DOG, 0),
    ("WatchdogDisabled", true, Severity::Error, Facility::DRIVER_WATCH_DOG, 1),
    ("CoreModuleResetReasonUsbCommand", true, Severity::Null, Facility::DRIVER_CORE_MODULE, 0),
    ("CoreModuleResetReasonSystemCrash", true, Severity::Error, Facility::DRIVER_CRASH_DUMP, 0),
    ("MmcauInvalidBufferSize", true, Severity::Null, Facility::DRIVER_MMCAU, 0),
    ("BacklightDisabled", true, Severity::Null, Facility::LIBRARY_BACKLIGHT, 0),
    ("BacklightPending", true, Severity::Null, Facility::LIBRARY_BACKLIGHT, 1),
    ("BacklightBusy", true, Severity::Error, Facility::LIBRARY_BACKLIGHT, 2),
    ("BatteryNotInitialized", true, Severity::Error, Facility::LIBRARY_BATTERY, 0),
    ("BatteryNotConfigured", true, Severity::Error, Facility::LIBRARY_BATTERY, 1),
    ("BatteryQueueFull", true, Severity::Error, Facility::LIBRARY_BATTERY, 2),
    ("BatteryWriteStarted", true, Severity::Null, Facility::LIBRARY_BATTERY, 3),
    ("BatteryWriteSuccessful", true, Severity::Null, Facility::LIBRARY_BATTERY, 4),
    ("BatterySubscriptionDataValid", true, Severity::Null, Facility::LIBRARY_BATTERY, 5),
    ("BatteryWriteEnqueued", true, Severity::Null, Facility::LIBRARY_BATTERY, 6),
    ("BatteryReadBusy", true, Severity::Error, Facility::LIBRARY_BATTERY, 7),
    ("BatteryReadEnqueued", true, Severity::Null, Facility::LIBRARY_BATTERY, 8),
    ("BatteryAlreadyInitialized", true, Severity::Error, Facility::LIBRARY_BATTERY, 9),
    ("UsbCmdProtocolSuccess", true, Severity::Null, Facility::LIBRARY_USB_CMD_PROTOCOL, 0),
    ("UsbCmdProtocolBadCommand", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 1),
    ("UsbCmdProtocolUnknownCommand", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 2),
    ("UsbCmdProtocolFailed", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 3),
    ("UsbCmdProtocolBusy", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 4),
    ("UsbCmdProtocolOpenPipeInFailed", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 5),
    ("UsbCmdProtocolOpenPipeOutFailed", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 6),
    ("UsbCmdProtocolSendFailed", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 7),
    ("UsbCmdProtocolReceiveFailed", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 8),
    ("UsbCmdProtocolInvalidDevice", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 9),
    ("UsbCmdProtocolExceededListSize", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 10),
    ("UsbCmdProtocolInvalidBuffer", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 11),
    ("UsbCmdProtocolNoData", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 12),
    ("UsbCmdProtocolPendingWait", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 13),
    ("UsbCmdProtocolSendIncomplete", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 14),
    ("UsbCmdProtocolHandlerInProgress", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 15),
    ("UsbCmdProtocolTimeout", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 16),
    ("UsbCmdProtocolCmdDoesNotExist", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 17),
    ("UsbCmdProtocolCmdIsTimedOut", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 18),
    ("UsbCmdProtocolIsNotAValidCmdPacket", true, Severity::Error, Facility::LIBRARY_USB_CMD_PROTOCOL, 19),
    ("JutilSuccess", true, Severity::Null, Facility::LIBRARY_JUTIL, 0),
    ("JutilFailedInternalMemoryAllocation", true, Severity::Error, Facility::LIBRARY_JUTIL, 1),
    ("JutilNoConnectedDevices", true, Severity::Null, Facility::LIBRARY_JUTIL, 2),
    ("JutilFailedToGetDevicePath", true, Severity::Error, Facility::LIBRARY_JUTIL, 3),
    ("JutilNoMoreDevicesDetected", true, Severity::Error, Facility::LIBRARY_JUTIL, 4),
    ("JutilInvalidDevicePathFromInternalBuffer", true, Severity::Error, Facility::LIBRARY_JUTIL, 5),
    ("JutilCorruptedInternalList", true, Severity::Error, Facility::LIBRARY_JUTIL, 6),
    ("JutilFailedCallbackInvocation", true, Severity::Error, Facility::LIBRARY_JUTIL, 7),
    ("JutilCommunicationFailure", true, Severity::Error, Facility::LIBRARY_JUTIL, 8),
    ("JutilInvalidHandle", true, Severity::Error, Facility::LIBRARY_JUTIL, 9),
    ("JutilNullHandle", true, Severity::Error, Facility::LIBRARY_JUTIL, 10),
    ("JutilInsufficientBufferAlloc", true, Severity::Error, Facility::LIBRARY_JUTIL, 11),
    ("JutilNoDeviceSelected", true, Severity::Error, Facility::LIBRARY_JUTIL, 12),
    ("JutilDeprecatedCommand", true, Severity::Error, Facility::LIBRARY_JUTIL, 13),
    ("JutilMultipleInstances", true, Severity::Error, Facility::LIBRARY_JUTIL, 14),
    ("JutilBtedrTransportNotInitialized", true, Severity::Error, Facility::LIBRARY_JUTIL, 15),
    ("JutilBtedrDiscoveryTimerNotInitialized", true, Severity::Error, Facility::LIBRARY_JUTIL, 16),
    ("TimeNullArgument", true, Severity::Error, Facility::LIBRARY_TIME, 0),
    ("TimeInvalidArgument", true, Severity::Error, Facility::LIBRARY_TIME, 1),
    ("TimeTzInvalidBias", true, Severity::Error, Facility::LIBRARY_TIME, 2),
    ("TimeTzInvalidStandardDate", true, Severity::Error, Facility::LIBRARY_TIME, 3),
    ("TimeTzInvalidDaylightDate", true, Severity::Error, Facility::LIBRARY_TIME, 4),
    ("TimeSetDaylightAmbiguity", true, Severity::Error, Facility::LIBRARY_TIME, 5),
    ("TimeBadCategoryIndex", true, Severity::Error, Facility::LIBRARY_TIME, 6),
    ("TimeBadTimeZoneIndex", true, Severity::Error, Facility::LIBRARY_TIME, 7),
    ("TimeTzFileOperationInProgress", true, Severity::Error, Facility::LIBRARY_TIME, 8),
    ("TimeTzFileNameNotFound", true, Severity::Error, Facility::LIBRARY_TIME, 9),
    ("HRManagerSucceeded", true, Severity::Null, Facility::LIBRARY_HR_MANAGER, 0),
    ("HRManagerNotInitialized", true, Severity::Error, Facility::LIBRARY_HR_MANAGER, 1),
    ("HRManagerAlreadyInitialized", true, Severity::Error, Facility::LIBRARY_HR_MANAGER, 2),
    ("HRManagerUnsupportedConfig", true, Severity::Error, Facility::LIBRARY_HR_MANAGER, 3),
    ("HRManagerFifoOverflow", true, Severity::Error, Facility::LIBRARY_HR_MANAGER, 4),
    ("ConfigurationSucceeded", true, Severity::Null, Facility::LIBRARY_CONFIGURATION, 0),
    ("ConfigurationFailed", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 1),
    ("ConfigurationPflashReadOtpFailed", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 2),
    ("ConfigurationPflashWriteOtpfailed", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 3),
    ("ConfigurationEflashInvalidHeader", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 4),
    ("ConfigurationEflashReadFailed", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 5),
    ("ConfigurationEflashWriteFailed", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 6),
    ("ConfigurationEraseFailed", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 7),
    ("ConfigurationVerifyFailed", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 8),
    ("ConfigurationModuleBusy", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 9),
    ("ConfigurationInvalidKey", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 10),
    ("ConfigurationInvalidVersion", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 11),
    ("ConfigurationInvalidModule", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 12),
    ("ConfigurationInvalidRegister", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 13),
    ("ConfigurationInvalidRegisterSize", true, Severity::Error, Facility::LIBRARY_CONFIGURATION, 14),
    ("MotionTooFewSamplesAvailable", true, Severity::Error, Facility::LIBRARY_MOTION, 0),
    ("MotionNullSubscription", true, Severity::Error, Facility::LIBRARY_MOTION, 1),
    ("MotionBadSampleRate", true, Severity::Error, Facility::LIBRARY_MOTION, 2),
    ("MotionNullFifoStorage", true, Severity::Error, Facility::LIBRARY_MOTION, 3),
    ("MotionNullCallback", true, Severity::Error, Facility::LIBRARY_MOTION, 4),
    ("MotionInsufficientFifoStorage", true, Severity::Error, Facility::LIBRARY_MOTION, 5),
    ("MotionAlreadySubscribed", true, Severity::Error, Facility::LIBRARY_MOTION, 6),
    ("MotionSubscriptionNotFound", true, Severity::Error, Facility::LIBRARY_MOTION, 7),
    ("MotionReusingFifoStorage", true, Severity::Error, Facility::LIBRARY_MOTION, 8),
    ("MotionDeviceUnavailable", true, Severity::Error, Facility::LIBRARY_MOTION, 9),
    ("MotionBadFifoElementSize", true, Severity::Error, Facility::LIBRARY_MOTION, 10),
    ("MotionDeviceNotReady", true, Severity::Error, Facility::LIBRARY_MOTION, 11),
    ("MotionPending", true, Severity::Null, Facility::LIBRARY_MOTION, 12),
    ("MotionDisabled", true, Severity::Error, Facility::LIBRARY_MOTION, 13),
    ("MotionBadSampleType", true, Severity::Error, Facility::LIBRARY_MOTION, 14),
    ("PegAlreadyEnabled", true, Severity::Null, Facility::LIBRARY_PEG, 0),
    ("PegNotInitialized", true, Severity::Error, Facility::LIBRARY_PEG, 1),
    ("PegCurrentlyEnabled", true, Severity::Error, Facility::LIBRARY_PEG, 2),
    ("TouchNotInitialized", true, Severity::Error, Facility::LIBRARY_TOUCH, 0),
    ("TouchNotConfigured", true, Severity::Error, Facility::LIBRARY_TOUCH, 1),
    ("TouchBusy", true, Severity::Error, Facility::LIBRARY_TOUCH, 2),
    ("TouchWriteStarted", true, Severity::Null, Facility::LIBRARY_TOUCH, 3),
    ("TouchWriteSuccessful", true, Severity::Null, Facility::LIBRARY_TOUCH, 4),
    ("TouchSubscriptionDataValid", true, Severity::Null, Facility::LIBRARY_TOUCH, 5),
    ("TouchQueueFull", true, Severity::Error, Facility::LIBRARY_TOUCH, 6),
    ("TouchWriteEnqueued", true, Severity::Null, Facility::LIBRARY_TOUCH, 7),
    ("TouchReadBusy", true, Severity::Error, Facility::LIBRARY_TOUCH, 8),
    ("TouchReadEnqueued", true, Severity::Null, Facility::LIBRARY_TOUCH, 9),
    ("TouchAlreadyInitialized", true, Severity::Error, Facility::LIBRARY_TOUCH, 10),
    ("MicrophonePending", true, Severity::Null, Facility::LIBRARY_MICROPHONE, 0),
    ("MicrophoneEnabled", true, Severity::Null, Facility::LIBRARY_MICROPHONE, 1),
    ("MicrophoneDisabled", true, Severity::Null, Facility::LIBRARY_MICROPHONE, 2),
    ("MicrophoneNotInitialized", true, Severity::Error, Facility::LIBRARY_MICROPHONE, 3),
    ("MicrophoneBusy", true, Severity::Error, Facility::LIBRARY_MICROPHONE, 4),
    ("MicrophoneAlreadyEnabled", true, Severity::Error, Facility::LIBRARY_MICROPHONE, 5),
    ("MicrophoneIllegalBuffer", true, Severity::Error, Facility::LIBRARY_MICROPHONE, 6),
    ("MicrophoneInsufficientSamples", true, Severity::Error, Facility::LIBRARY_MICROPHONE, 7),
    ("MicrophoneNotStopping", true, Severity::Error, Facility::LIBRARY_MICROPHONE, 8),
    ("MicrophoneBadBufferSize", true, Severity::Error, Facility::LIBRARY_MICROPHONE, 9),
    ("MicrophoneBadGainValue", true, Severity::Error, Facility::LIBRARY_MICROPHONE, 10),
    ("HrLedNotInitialized", true, Severity::Error, Facility::LIBRARY_HR_LED, 0),
    ("HrLedNotConfigured", true, Severity::Error, Facility::LIBRARY_HR_LED, 1),
    ("HrLedQueueFull", true, Severity::Error, Facility::LIBRARY_HR_LED, 2),
    ("HrLedWriteStarted", true, Severity::Null, Facility::LIBRARY_HR_LED, 3),
    ("HrLedSuccessful", true, Severity::Null, Facility::LIBRARY_HR_LED, 4),
    ("HrLedSubscriptionDataValid", true, Severity::Null, Facility::LIBRARY_HR_LED, 5),
    ("HrLedWriteEnqueued", true, Severity::Null, Facility::LIBRARY_HR_LED, 6),
    ("HrLedReadBusy", true, Severity::Error, Facility::LIBRARY_HR_LED, 7),
    ("HrLedReadEnqueued", true, Severity::Null, Facility::LIBRARY_HR_LED, 8),
    ("HrLedWriteBusy", true, Severity::Error, Facility::LIBRARY_HR_LED, 9),
    ("HrLedAlreadyInitialized", true, Severity::Error, Facility::LIBRARY_HR_LED, 10),
    ("GsrNotInitialized", true, Severity::Error, Facility::LIBRARY_GSR, 0),
    ("GsrNotConfigured", true, Severity::Error, Facility::LIBRARY_GSR, 1),
    ("GsrQueueFull", true, Severity::Error, Facility::LIBRARY_GSR, 2),
    ("GsrWriteStarted", true, Severity::Null, Facility::LIBRARY_GSR, 3),
    ("GsrSuccessful", true, Severity::Null, Facility::LIBRARY_GSR, 4),
    ("GsrSubscriptionDataValid", true, Severity::Null, Facility::LIBRARY_GSR, 5),
    ("GsrWriteEnqueued", true, Severity::Null, Facility::LIBRARY_GSR, 6),
    ("GsrReadBusy", true, Severity::Error, Facility::LIBRARY_GSR, 7),
    ("GsrReadEnqueued", true, Severity::Null, Facility::LIBRARY_GSR, 8),
    ("GsrAlreadyInitialized", true, Severity::Error, Facility::LIBRARY_GSR, 9),
    ("UvNotInitialized", true, Severity::Error, Facility::LIBRARY_UV, 0),
    ("UvNotConfigured", true, Severity::Error, Facility::LIBRARY_UV, 1),
    ("UvQueueFull", true, Severity::Error, Facility::LIBRARY_UV, 2),
    ("UvWriteStarted", true, Severity::Null, Facility::LIBRARY_UV, 3),
    ("UvSuccessful", true, Severity::Null, Facility::LIBRARY_UV, 4),
    ("UvSubscriptionDataValid", true, Severity::Null, Facility::LIBRARY_UV, 5),
    ("UvWriteEnqueued", true, Severity::Null, Facility::LIBRARY_UV, 6),
    ("UvReadBusy", true, Severity::Error, Facility::LIBRARY_UV, 7),
    ("UvReadEnqueued", true, Severity::Null, Facility::LIBRARY_UV, 8),
    ("UvAlreadyInitialized", true, Severity::Error, Facility::LIBRARY_UV, 9),
    ("SkinTempNotInitialized", true, Severity::Error, Facility::LIBRARY_SKIN_TEMP, 0),
    ("SkinTempNotConfigured", true, Severity::Error, Facility::LIBRARY_SKIN_TEMP, 1),
    ("SkinTempQueueFull", true, Severity::Error, Facility::LIBRARY_SKIN_TEMP, 2),
    ("SkinTempWriteStarted", true, Severity::Null, Facility::LIBRARY_SKIN_TEMP, 3),
    ("SkinTempSuccessful", true, Severity::Null, Facility::LIBRARY_SKIN_TEMP, 4),
    ("SkinTempSubscriptionDataValid", true, Severity::Null, Facility::LIBRARY_SKIN_TEMP, 5),
    ("SkinTempWriteEnqueued", true, Severity::Null, Facility::LIBRARY_SKIN_TEMP, 6),
    ("SkinTempReadBusy", true, Severity::Error, Facility::LIBRARY_SKIN_TEMP, 7),
    ("SkinTempReadEnqueued", true, Severity::Null, Facility::LIBRARY_SKIN_TEMP, 8),
    ("SkinTempAlreadyInitialized", true, Severity::Error, Facility::LIBRARY_SKIN_TEMP, 9),
    ("AmbTempNotInitialized", true, Severity::Error, Facility::LIBRARY_AMB_TEMP, 0),
    ("AmbTempNotConfigured", true, Severity::Error, Facility::LIBRARY_AMB_TEMP, 1),
    ("AmbTempQueueFull", true, Severity::Error, Facility::LIBRARY_AMB_TEMP, 2),
    ("AmbTempWriteStarted", true, Severity::Null, Facility::LIBRARY_AMB_TEMP, 3),
    ("AmbTempSuccessful", true, Severity::Null, Facility::LIBRARY_AMB_TEMP, 4),
    ("AmbTempSubscriptionDataValid", true, Severity::Null, Facility::LIBRARY_AMB_TEMP, 5),
    ("AmbTempWriteEnqueued", true, Severity::Null, Facility::LIBRARY_AMB_TEMP, 6),
    ("AmbTempReadBusy", true, Severity::Error, Facility::LIBRARY_AMB_TEMP, 7),
    ("AmbTempReadEnqueued", true, Severity::Null, Facility::LIBRARY_AMB_TEMP, 8),
    ("AmbTempAlreadyInitialized", true, Severity::Error, Facility::LIBRARY_AMB_TEMP, 9),
    ("PedometerFifoOverflow", true, Severity::Error, Facility::LIBRARY_PEDOMETER, 0),
    ("AlgoMathInitializeSucceeded", true, Severity::Null, Facility::LIBRARY_ALGO_MATH, 0),
    ("AlgoMathInitializeFailed", true, Severity::Error, Facility::LIBRARY_ALGO_MATH, 1),
    ("AlgoMathBadMatrix", true, Severity::Error, Facility::LIBRARY_ALGO_MATH, 2),
    ("AlgoMathMathError", true, Severity::Error, Facility::LIBRARY_ALGO_MATH, 3),
    ("DataLoggerPending", true, Severity::Null, Facility::LIBRARY_LOGGER, 0),
    ("DataLoggerEndOfLog", true, Severity::Null, Facility::LIBRARY_LOGGER, 1),
    ("DataLoggerBusy", true, Severity::Error, Facility::LIBRARY_LOGGER, 2),
    ("DataLoggerRecordTooLarge", true, Severity::Error, Facility::LIBRARY_LOGGER, 3),
    ("DataLoggerIsDisabled", true, Severity::Error, Facility::LIBRARY_LOGGER, 4),
    ("DataLoggerIsActive", true, Severity::Error, Facility::LIBRARY_LOGGER, 5),
    ("DataLoggerIsCorrupt", true, Severity::Error, Facility::LIBRARY_LOGGER, 6),
    ("DataLoggerPastLogEnd", true, Severity::Error, Facility::LIBRARY_LOGGER, 7),
    ("DataLoggerReadPastChunkEnd", true, Severity::Error, Facility::LIBRARY_LOGGER, 8),
    ("DataLoggerChunkNotRead", true, Severity::Error, Facility::LIBRARY_LOGGER, 9),
    ("DataLoggerFlashOpInProgress", true, Severity::Error, Facility::LIBRARY_LOGGER, 10),
    ("DataLoggerBadChunkCount", true, Severity::Error, Facility::LIBRARY_LOGGER, 11),
    ("DataLoggerBadGetMetadataState", true, Severity::Error, Facility::LIBRARY_LOGGER, 12),
    ("DataLoggerBadChunkDeleteState", true, Severity::Error, Facility::LIBRARY_LOGGER, 13),
    ("DataLoggerBadBufferWriteCount", true, Severity::Error, Facility::LIBRARY_LOGGER, 14),
    ("DataLoggerBadWriteBufferAvailable", true, Severity::Error, Facility::LIBRARY_LOGGER, 15),
    ("DataLoggerBadBufferBusyState", true, Severity::Error, Facility::LIBRARY_LOGGER, 16),
    ("DataLoggerBadWriteBufferState", true, Severity::Error, Facility::LIBRARY_LOGGER, 17),
    ("DataLoggerTooManyCallbacks", true, Severity::Error, Facility::LIBRARY_LOGGER, 18),
    ("DataLoggerCrcFail", true, Severity::Error, Facility::LIBRARY_LOGGER, 19),
    ("DataLoggerDupFlashOpStruct", true, Severity::Error, Facility::LIBRARY_LOGGER, 20),
    ("DataLoggerBadFlashOp", true, Severity::Error, Facility::LIBRARY_LOGGER, 21),
    ("DataLoggerFlashGeometryBad", true, Severity::Error, Facility::LIBRARY_LOGGER, 22),
    ("DataLoggerBadChunkAddress", true, Severity::Error, Facility::LIBRARY_LOGGER, 23),
    ("GpsHibernating", true, Severity::Error, Facility::LIBRARY_GPS, 0),
    ("GpsNotPatched", true, Severity::Error, Facility::LIBRARY_GPS, 1),
    ("GpsCommandArgumentLengthError", true, Severity::Error, Facility::LIBRARY_GPS, 2),
    ("GpsInvalidSatelliteId", true, Severity::Error, Facility::LIBRARY_GPS, 3),
    ("GpsInvalidTestMode", true, Severity::Error, Facility::LIBRARY_GPS, 4),
    ("GpsBusy", true, Severity::Error, Facility::LIBRARY_GPS, 5),
    ("GpsUnableToEnableOrDisable", true, Severity::Error, Facility::LIBRARY_GPS, 6),
    ("GpsIsEnabled", true, Severity::Null, Facility::LIBRARY_GPS, 7),
    ("GpsIsDisabled", true, Severity::Null, Facility::LIBRARY_GPS, 8),
    ("FilePending", true, Severity::Null, Facility::LIBRARY_FILE, 0),
    ("FileFileStructInUse", true, Severity::Error, Facility::LIBRARY_FILE, 1),
    ("FileFileAlreadyOpen", true, Severity::Error, Facility::LIBRARY_FILE, 2),
    ("FileFileNotOpen", true, Severity::Error, Facility::LIBRARY_FILE, 3),
    ("FileOperationPending", true, Severity::Error, Facility::LIBRARY_FILE, 4),
    ("FileSizeBeyondMaxForFile", true, Severity::Error, Facility::LIBRARY_FILE, 5),
    ("FileSeekError", true, Severity::Error, Facility::LIBRARY_FILE, 6),
    ("FileNotOpenForWrite", true, Severity::Error, Facility::LIBRARY_FILE, 7),
    ("FileInvalidFile", true, Severity::Error, Facility::LIBRARY_FILE, 8),
    ("FileSizeMismatch", true, Severity::Error, Facility::LIBRARY_FILE, 9),
    ("FileBacklogOverflow", true, Severity::Error, Facility::LIBRARY_FILE, 10),
    ("FileBadFileAdress", true, Severity::Error, Facility::LIBRARY_FILE, 11),
    ("FileFatTableMismatch", true, Severity::Error, Facility::LIBRARY_FILE, 12),
    ("FileBadFileSizeSpecified", true, Severity::Error, Facility::LIBRARY_FILE, 13),
    ("FileTooLittleFlashLeft", true, Severity::Error, Facility::LIBRARY_FILE, 14),
    ("FileTooManyFilesDefined", true, Severity::Error, Facility::LIBRARY_FILE, 15),
    ("FileNumberOfFilesDecreased", true, Severity::Error, Facility::LIBRARY_FILE, 16),
    ("FileNullStructurePointer", true, Severity::Error, Facility::LIBRARY_FILE, 17),
    ("FileBadFileIndex", true, Severity::Error, Facility::LIBRARY_FILE, 18),
    ("FileStructOnStack", true, Severity::Error, Facility::LIBRARY_FILE, 19),
    ("FileBadFileType", true, Severity::Error, Facility::LIBRARY_FILE, 20),
    ("FileNullBufferPointer", true, Severity::Error, Facility::LIBRARY_FILE, 21),
    ("FileBadSeekOrigin", true, Severity::Error, Facility::LIBRARY_FILE, 22),
    ("RemoteSubscriptionInvalidArg", true, Severity::Error, Facility::LIBRARY_REMOTE_SUBSCRIPTION, 0),
    ("RemoteSubscriptionPushServiceInUse", true, Severity::Error, Facility::LIBRARY_REMOTE_SUBSCRIPTION, 1),
    ("BluetoothInvalidArg", true, Severity::Error, Facility::LIBRARY_BTPS, 756),
    ("BluetoothSendFailed", true, Severity::Error, Facility::LIBRARY_BTPS, 757),
    ("BluetoothSendPending", true, Severity::Null, Facility::LIBRARY_BTPS, 758),
    ("BluetoothHciRawCommandFailed", true, Severity::Error, Facility::LIBRARY_BTPS, 759),
    ("BluetoothBusy", true, Severity::Error, Facility::LIBRARY_BTPS, 760),
    ("BluetoothExitSleepPending", true, Severity::Null, Facility::LIBRARY_BTPS, 761),
    ("BluetoothChipAsleep", true, Severity::Error, Facility::LIBRARY_BTPS, 762),
    ("BluetoothDisabled", true, Severity::Error, Facility::LIBRARY_BTPS, 763),
    ("BluetoothHwIncompatible", true, Severity::Error, Facility::LIBRARY_BTPS, 764),
    ("BluetoothAlreadyInState", true, Severity::Null, Facility::LIBRARY_BTPS, 765),
    ("BluetoothLinkKeyNotFound", true, Severity::Error, Facility::LIBRARY_BTPS, 766),
    ("BluetoothDisconnectPending", true, Severity::Null, Facility::LIBRARY_BTPS, 767),
    ("BluetoothDisconnetAlreadyInProgress", true, Severity::Error, Facility::LIBRARY_BTPS, 768),
    ("BluetoothNotConnected", true, Severity::Error, Facility::LIBRARY_BTPS, 769),
    ("BluetoothDisconnectTimedOut", true, Severity::Error, Facility::LIBRARY_BTPS, 770),
    ("BluetoothBandwidthExceeded", true, Severity::Error, Facility::LIBRARY_BTPS, 771),
    ("BluetoothRetryPending", true, Severity::Null, Facility::LIBRARY_BTPS, 772),
    ("BluetoothWpnsPerformingOverflow", true, Severity::Error, Facility::LIBRARY_BTPS, 1024),
    ("BluetoothWpnsInvalidPacket", true, Severity::Error, Facility::LIBRARY_BTPS, 1025),
    ("BluetoothSdpuInvalidSize", true, Severity::Error, Facility::LIBRARY_BTPS, 1792),
    ("BluetoothSdpuInvalidSequHeader", true, Severity::Error, Facility::LIBRARY_BTPS, 1793),
    ("BluetoothSdpuInvalidElinoNotFound", true, Severity::Error, Facility::LIBRARY_BTPS, 1794),
    ("BluetoothSdpuInvalidPidNotFound", true, Severity::Error, Facility::LIBRARY_BTPS, 1795),
    ("BluetoothSdpuPidTooLong", true, Severity::Error, Facility::LIBRARY_BTPS, 1796),
    ("BluetoothUnitTestFailed", true, Severity::Error, Facility::LIBRARY_BTPS, 2048),
    ("BluetoothEnableNotAllowed", true, Severity::Error, Facility::LIBRARY_BTPS, 2304),
    ("MinuteTimerAlreadySubscribed", true, Severity::Error, Facility::LIBRARY_MINUTE_TIMER, 0),
    ("MinuteTimerSubscriptionNotFound", true, Severity::Error, Facility::LIBRARY_MINUTE_TIMER, 1),
    ("MinuteTimerSubscriptionRemoveFail", true, Severity::Error, Facility::LIBRARY_MINUTE_TIMER, 2),
    ("SubscriptionBaseListRemovalError", true, Severity::Error, Facility::LIBRARY_SUBSCRIPTION_BASE, 0),
    ("SubscriptionBaseRecursiveNotification", true, Severity::Error, Facility::LIBRARY_SUBSCRIPTION_BASE, 1),
    ("SubscriptionBaseInvalidRemovedNotification", true, Severity::Error, Facility::LIBRARY_SUBSCRIPTION_BASE, 2),
    ("SubscriptionBaseBadPointer", true, Severity::Error, Facility::LIBRARY_SUBSCRIPTION_BASE, 3),
    ("SubscriptionBaseNullPointer", true, Severity::Error, Facility::LIBRARY_SUBSCRIPTION_BASE, 4),
    ("SubscriptionBaseSubscriptionNotInitialized", true, Severity::Error, Facility::LIBRARY_SUBSCRIPTION_BASE, 5),
    ("AlgorithmsRecoveryProfileInvalidInput", true, Severity::Error, Facility::LIBRARY_RECOVERY, 0),
    ("AlgorithmsRecoveryProfileInvalidMaxHrOrMaxMet", true, Severity::Error, Facility::LIBRARY_RECOVERY, 1),
    ("USBConnectionReinitialization", true, Severity::Error, Facility::LIBRARY_USB_CONNECTION, 0),
    ("USBConnectionAlreadyStarted", true, Severity::Error, Facility::LIBRARY_USB_CONNECTION, 1),
    ("SramFwUpdateBootIntoUpdateMode", true, Severity::Null, Facility::LIBRARY_SRAMFW_UPDATE, 0),
    ("SramFwUpdateResetReasonSRAMUpdateSuccess", true, Severity::Null, Facility::LIBRARY_SRAMFW_UPDATE, 1),
    ("SramFwUpdateResetReasonSRAMTimeout", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 2),
    ("SramFwUpdateBatteryTooLow", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 3),
    ("SramFwUpdateFileWriteFailure", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 4),
    ("SramFwUpdateFileWriteRequestFailure", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 5),
    ("SramFwUpdateFileCrcMismatch", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 6),
    ("SramFwUpdateFileVersionReadFailure", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 7),
    ("SramFwUpdateFileVersionRequestFailure", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 8),
    ("SramFwUpdate2upCrcMismatch", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 9),
    ("SramFwUpdateAppCrcMismatch", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 10),
    ("SramFwUpdateBlobCrcMismatch", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 11),
    ("SramFwUpdateAppNotFound", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 12),
    ("SramFwUpdateFileOpenRequestFailure", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 13),
    ("SramFwUpdateFileOpenFailure", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 14),
    ("SramFwUpdateFileCloseRequestFailed", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 15),
    ("SramFwUpdateFileCloseFailure", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 16),
    ("SramFwUpdateBlobPcbIdMismatch", true, Severity::Error, Facility::LIBRARY_SRAMFW_UPDATE, 17),
    ("DateChangeSubscriptionAlreadyInitialized", true, Severity::Error, Facility::LIBRARY_DATE_CHANGE_SUBSCRIPTION, 0),
    ("DateChangeSubscriptionNotInitialized", true, Severity::Error, Facility::LIBRARY_DATE_CHANGE_SUBSCRIPTION, 1),
    ("HapticInvalidStreamId", true, Severity::Error, Facility::LIBRARY_HAPTIC, 0),
    ("FitnessPlansUnableToOpenFile", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 0),
    ("FitnessPlansFileReadError", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 1),
    ("FitnessPlansCorruptFile", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 2),
    ("FitnessPlansVersionMismatch", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 3),
    ("FitnessPlansCrcAssumptionBroken", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 4),
    ("FitnessPlansOutOfMemory", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 5),
    ("FitnessPlansInvalidFileFormat", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 6),
    ("FitnessPlansBadArgument", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 7),
    ("FitnessPlansNoElementsAvailable", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 8),
    ("FitnessPlansEndOfData", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 9),
    ("FitnessPlansWorkoutAlreadyStored", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 10),
    ("FitnessPlansWorkoutNotStarted", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 11),
    ("FitnessPlansPreviousRequestStillActive", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 12),
    ("FitnessPlansWorkoutAlreadyLoaded", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 13),
    ("FitnessPlansWorkoutNotLoaded", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 14),
    ("FitnessPlanInvalidCompletionType", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 15),
    ("FitnessPlanExerciseTimeTooShort", true, Severity::Error, Facility::LIBRARY_FITNESS_PLANS, 16),
    ("AncsNotificationCacheUnitTestFailed", true, Severity::Error, Facility::LIBRARY_ANCS_NOTIFICATION_CACHE, 0),
    ("AncsNotificationCacheAlreadyInCache", true, Severity::Error, Facility::LIBRARY_ANCS_NOTIFICATION_CACHE, 1),
    ("FireballUiInvalidParameterSize", true, Severity::Error, Facility::MODULE_FIREBALL_UI, 0),
    ("FireballUiInvalidScreenId", true, Severity::Error, Facility::MODULE_FIREBALL_UI, 1),
    ("FireballUiNavigationDisabled", true, Severity::Error, Facility::MODULE_FIREBALL_UI, 2),
    ("FireballUiInvalidBufferSize", true, Severity::Error, Facility::MODULE_FIREBALL_UI, 3),
    ("FireballUiNoMeTileImage", true, Severity::Error, Facility::MODULE_FIREBALL_UI, 4),
    ("FireballUiMeTileImageNotAvailable", true, Severity::Error, Facility::MODULE_FIREBALL_UI, 5),
    ("FireballUiMeTileWriteInProgress", true, Severity::Error, Facility::MODULE_FIREBALL_UI, 6),
    ("FireballUiSyncInProgress", true, Severity::Error, Facility::MODULE_FIREBALL_UI, 7),
    ("FireballListTailNoHead", true, Severity::Error, Facility::MODULE_FIREBALL_UTILITIES, 0),
    ("FireballListHeadNoTail", true, Severity::Error, Facility::MODULE_FIREBALL_UTILITIES, 1),
    ("FireballListTailHasNext", true, Severity::Error, Facility::MODULE_FIREBALL_UTILITIES, 2),
    ("FireballListParamNull", true, Severity::Error, Facility::MODULE_FIREBALL_UTILITIES, 3),
    ("FireballListListEmpty", true, Severity::Null, Facility::MODULE_FIREBALL_UTILITIES, 4),
    ("FireballListElementNotPresent", true, Severity::Error, Facility::MODULE_FIREBALL_UTILITIES, 5),
    ("ProfileNotInitialized", true, Severity::Error, Facility::MODULE_PROFILE, 0),
    ("ProfileReinitialization", true, Severity::Error, Facility::MODULE_PROFILE, 1),
    ("ProfileFileSizeMismatch", true, Severity::Error, Facility::MODULE_PROFILE, 2),
    ("ProfileFileBusy", true, Severity::Error, Facility::MODULE_PROFILE, 3),
    ("ProfileUnsupportedVersion", true, Severity::Error, Facility::MODULE_PROFILE, 4),
    ("ProfileInvalidValue", true, Severity::Error, Facility::MODULE_PROFILE, 5),
    ("ProfileTelemetryDisallowed", true, Severity::Error, Facility::MODULE_PROFILE, 6),
    ("LoggerSubscriptionsInvalidArg", true, Severity::Error, Facility::MODULE_LOGGER_SUBSCRIPTIONS, 0),
    ("PowerManagerReinitialization", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 0),
    ("PowerManagerPowerOffDisallowed", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 1),
    ("PowerManagerAlreadyEnteredRunMode", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 2),
    ("PowerManagerAlreadyExitedRunMode", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 3),
    ("PowerManagerAlreadyEnabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 4),
    ("PowerManagerAlreadyDisabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 5),
    ("PowerManagerDisabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 6),
    ("PowerManagerEnabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 7),
    ("PowerManagerDisplayMgmtDisabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 8),
    ("PowerManagerDisplayMgmtEnabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 9),
    ("PowerManagerBacklightMgmtDisabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 10),
    ("PowerManagerBacklightMgmtEnabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 11),
    ("PowerManagerTouchMgmtDisabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 12),
    ("PowerManagerTouchMgmtEnabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 13),
    ("PowerManagerHrMgmtDisabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 14),
    ("PowerManagerHrMgmtEnabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 15),
    ("PowerManagerAlreadyEnteredOobeMode", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 16),
    ("PowerManagerAlreadyExitedOobeMode", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 17),
    ("PowerManagerAlreadyEnteredSleepMode", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 18),
    ("PowerManagerAlreadyExitedSleepMode", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 19),
    ("PowerManagerInvalidModuleId", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 20),
    ("PowerManagerInvalidModuleState", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 21),
    ("PowerManagerInvalidPowerMode", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 22),
    ("PowerManagerInvalidTransition", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 23),
    ("PowerManagerShutdownAlreadyInProgress", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 24),
    ("PowerManagerDimmingDisabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 25),
    ("PowerManagerDimmingEnabled", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 26),
    ("PowerManagerResetReasonFailedBatteryKill", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 27),
    ("PowerManagerUnitTestFailed", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 28),
    ("PowerManagerBiometricSensorsAlreadyOn", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 29),
    ("PowerManagerBiometricSensorsAlreadyOff", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 30),
    ("PowerManagerGenericCleanReset", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 31),
    ("PowerManagerHardRequirementsStackFull", true, Severity::Error, Facility::MODULE_POWER_MANAGER, 50),
    ("HrPowerManagerReinitialization", true, Severity::Error, Facility::MODULE_HR_POWER_MANAGER, 0),
    ("HrPowerManagerUnitTestFailure", true, Severity::Error, Facility::MODULE_HR_POWER_MANAGER, 1),
    ("FireballHardwareManagerBtAlreadySubscribed", true, Severity::Error, Facility::MODULE_FIREBALL_TILES_MODELS, 0),
    ("FireballHardwareManagerBtNotSubscribed", true, Severity::Error, Facility::MODULE_FIREBALL_TILES_MODELS, 1),
    ("SystemSettingsOperationNotImplemented", true, Severity::Error, Facility::MODULE_SYSTEM_SETTINGS, 0),
    ("SystemSettingsOperationNotStarted", true, Severity::Error, Facility::MODULE_SYSTEM_SETTINGS, 1),
    ("SystemSettingsOperationBusy", true, Severity::Error, Facility::MODULE_SYSTEM_SETTINGS, 2),
    ("SystemSettingsOperationRetrying", true, Severity::Null, Facility::MODULE_SYSTEM_SETTINGS, 0),
    ("SystemSettingsResetReasonFactoryReset", true, Severity::Null, Facility::MODULE_SYSTEM_SETTINGS, 1),
    ("SystemSettingsStageSkipped", true, Severity::Null, Facility::MODULE_SYSTEM_SETTINGS, 2),
    ("NotificationInvalidNotificationType", true, Severity::Error, Facility::MODULE_NOTIFICATION, 0),
    ("NotificationAddFailed", true, Severity::Error, Facility::MODULE_NOTIFICATION, 1),
    ("NotificationRemoveFailed", true, Severity::Error, Facility::MODULE_NOTIFICATION, 2),
    ("NotificationRemoveAllFailed", true, Severity::Error, Facility::MODULE_NOTIFICATION, 3),
    ("NotificationInitializationFailed", true, Severity::Error, Facility::MODULE_NOTIFICATION, 4),
    ("NotificationCleanUpFailed", true, Severity::Error, Facility::MODULE_NOTIFICATION, 5),
    ("NotificationUnitTestAppNotInstalled", true, Severity::Error, Facility::MODULE_NOTIFICATION, 6),
    ("NotificationUnitTestFailed", true, Severity::Error, Facility::MODULE_NOTIFICATION, 7),
    ("NotificationUnitTestDialogFailed", true, Severity::Error, Facility::MODULE_NOTIFICATION, 8),
    ("NotificationUnitTestBadgeFailed", true, Severity::Error, Facility::MODULE_NOTIFICATION, 9),
    ("NotificationGenericBadData", true, Severity::Error, Facility::MODULE_NOTIFICATION, 100),
    ("NotificationGenericBufferReadPosition", true, Severity::Error, Facility::MODULE_NOTIFICATION, 101),
    ("NotificationGenericDataBadType", true, Severity::Error, Facility::MODULE_NOTIFICATION, 102),
    ("NotificationGenericDataBadId", true, Severity::Error, Facility::MODULE_NOTIFICATION, 103),
    ("NotificationGenericDataBadValue", true, Severity::Error, Facility::MODULE_NOTIFICATION, 104),
    ("NotificationMultipleSubscribersNotSupported", true, Severity::Error, Facility::MODULE_NOTIFICATION, 65533),
    ("NotificationNotSupported", true, Severity::Error, Facility::MODULE_NOTIFICATION, 65534),
    ("NotificationError", true, Severity::Error, Facility::MODULE_NOTIFICATION, 65535),
    ("InstrumentationInvalidIndex", true, Severity::Error, Facility::MODULE_INSTRUMENTATION, 0),
    ("InstrumentationModuleUnintialized", true, Severity::Error, Facility::MODULE_INSTRUMENTATION, 1),
    ("InstrumentationModuleIsBusy", true, Severity::Error, Facility::MODULE_INSTRUMENTATION, 2),
    ("InstrumentationUnusedIndex", true, Severity::Error, Facility::MODULE_INSTRUMENTATION, 3),
    ("PalInvalidServiceIndex", true, Severity::Error, Facility::MODULE_PAL, 1),
    ("FtlTouchManagerGestureSubscriberNotFound", true, Severity::Error, Facility::MODULE_FTL_TOUCH_MANAGER, 0),
    ("FtlTouchManagerGestureSubscriberRemovalError", true, Severity::Error, Facility::MODULE_FTL_TOUCH_MANAGER, 1),
    ("PersistedStatisticsNotInitialized", true, Severity::Error, Facility::MODULE_PERSISTED_STATISTICS, 0),
    ("PersistedStatisticsFileIoBusy", true, Severity::Error, Facility::MODULE_PERSISTED_STATISTICS, 1),
    ("PersistedStatisticsInvalidFileSize", true, Severity::Error, Facility::MODULE_PERSISTED_STATISTICS, 2),
    ("PersistedStatisticsInvalidBufferSize", true, Severity::Error, Facility::MODULE_PERSISTED_STATISTICS, 3),
    ("PersistedApplicationDataFileIoBusy", true, Severity::Error, Facility::MODULE_PERSISTED_APPLICATION_DATA, 0),
    ("PersistedApplicationDataInvalidMetricData", true, Severity::Error, Facility::MODULE_PERSISTED_APPLICATION_DATA, 1),
    ("CortanaNotImplemented", true, Severity::Error, Facility::MODULE_CORTANA, 0),
    ("CortanaInvalidParameter", true, Severity::Error, Facility::MODULE_CORTANA, 1),
    ("CortanaNotAvailable", true, Severity::Error, Facility::MODULE_CORTANA, 2),
    ("CortanaNotRunning", true, Severity::Error, Facility::MODULE_CORTANA, 3),
    ("CortanaButtonActivated", true, Severity::Null, Facility::MODULE_CORTANA, 4),
    ("CortanaButtonRelease", true, Severity::Null, Facility::MODULE_CORTANA, 5),
    ("CortanaNotificationSuccess", true, Severity::Null, Facility::MODULE_CORTANA, 6),
    ("CortanaNotificationError", true, Severity::Error, Facility::MODULE_CORTANA, 7),
    ("CortanaNotificationMore", true, Severity::Null, Facility::MODULE_CORTANA, 8),
    ("CortanaVoicePushStarted", true, Severity::Null, Facility::MODULE_CORTANA, 9),
    ("CortanaNotificationTimeout", true, Severity::Null, Facility::MODULE_CORTANA, 10),
    ("CortanaNotificationMessage", true, Severity::Null, Facility::MODULE_CORTANA, 11),
    ("FireballAppsManagementInvalidOrCorruptAsset", true, Severity::Error, Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 0),
    ("FireballAppsManagementCorruptLayout", true, Severity::Error, Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 1),
    ("FireballAppsManagementTooManyApps", true, Severity::Error, Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 2),
    ("FireballAppsManagementAppIdNotFound", true, Severity::Error, Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 3),
    ("FireballAppsManagementNoResourcesProvided", true, Severity::Error, Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 4),
    ("FireballAppsManagementWriteAlreadyExists", true, Severity::Error, Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 5),
    ("FireballAppsManagementAppAlreadyExists", true, Severity::Error, Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 6),
    ("FireballAppsManagementCannotModifyNativeIcons", true, Severity::Error, Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 7),
    ("FireballAppsManagementInvalidTileIconIndex", true, Severity::Error, Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 8),
    ("FireballAppsManagementTilesNotYetLoaded", true, Severity::Error, Facility::MODULE_FIREBALL_APPS_MANAGEMENT, 9),
    ("BatteryGaugeAlreadyInstalled", true, Severity::Error, Facility::MODULE_BATTERY_GAUGE, 0),
    ("UnitTestsInvalidTestId", true, Severity::Error, Facility::MODULE_UNIT_TESTS, 0),
    ("InstalledAncsAppListFull", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 0),
    ("InstalledAncsAppNameLengthIllegal", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 1),
    ("InstalledAncsAppNotRegistered", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 2),
    ("InstalledAncsAppListEmpty", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 3),
    ("InstalledAncsFreshListInitialization", true, Severity::Null, Facility::MODULE_INSTALLED_APP_LIST, 4),
    ("InstalledAncsDuplicateNameEntry", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 5),
    ("InstalledAncsDuplicateGuidEntry", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 6),
    ("InstalledAncsAppListUnitTestFailed", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 7),
    ("InstalledAncsAppListUninitialized", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 8),
    ("InstalledAppListInvalidParameter", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 9),
    ("InstalledAppListAppNotFound", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 10),
    ("InstalledAppListListFull", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 11),
    ("InstalledAppListAppIdNotFound", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 12),
    ("InstalledAppListPageIndexInvalid", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 13),
    ("InstalledAppListPageLayoutFormatInvalid", true, Severity::Error, Facility::MODULE_INSTALLED_APP_LIST, 14),
    ("KFrostSessionAlreadyRunning", true, Severity::Error, Facility::MODULE_KFROST, 0),
    ("KFrostTestNotRunning", true, Severity::Error, Facility::MODULE_KFROST, 1),
    ("KFrostInvalidArgs", true, Severity::Error, Facility::MODULE_KFROST, 2),
    ("KFrostUsbParamsNotLoaded", true, Severity::Error, Facility::MODULE_KFROST, 3),
    ("KFrostUsbNoRunFlags", true, Severity::Error, Facility::MODULE_KFROST, 4),
    ("KFrostUsbParamInvalidFile", true, Severity::Error, Facility::MODULE_KFROST, 5),
    ("KFrostUsbAllocFail", true, Severity::Error, Facility::MODULE_KFROST, 6),
    ("KFrostNotPresent", true, Severity::Error, Facility::MODULE_KFROST, 7),
    ("KFrostInvalidId", true, Severity::Error, Facility::MODULE_KFROST, 8),
    ("KFrostOutOfBounds", true, Severity::Error, Facility::MODULE_KFROST, 9),
    ("VoicePushMic", true, Severity::Null, Facility::MODULE_VOICE_PUSH, 0),
    ("VoicePushMicOffPushInProgress", true, Severity::Null, Facility::MODULE_VOICE_PUSH, 1),
    ("VoicePushPushComplete", true, Severity::Null, Facility::MODULE_VOICE_PUSH, 2),
    ("VoicePushCancelled", true, Severity::Error, Facility::MODULE_VOICE_PUSH, 3),
    ("VoicePushAlreadyInProgress", true, Severity::Error, Facility::MODULE_VOICE_PUSH, 4),
    ("VoicePushNotInProgress", true, Severity::Error, Facility::MODULE_VOICE_PUSH, 5),
    ("VoicePushServiceNotAvailable", true, Severity::Error, Facility::MODULE_VOICE_PUSH, 6),
    ("VoicePushAirplaneMode", true, Severity::Error, Facility::MODULE_VOICE_PUSH, 7),
    ("VoicePushStopInProgress", true, Severity::Error, Facility::MODULE_VOICE_PUSH, 8),
    ("VoicePushCancelInProgress", true, Severity::Error, Facility::MODULE_VOICE_PUSH, 9),
    ("AppMainResetReasonFailedInitialization", true, Severity::Error, Facility::APPLICATIONS_BASE, 0),
    ("App2UpResetReasonSramUpdateComplete", true, Severity::Error, Facility::APPLICATION2_UP, 0),
];

fn by_key() -> &'static HashMap<Key, &'static str> {
    static INDEX: OnceLock<HashMap<Key, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| {
        STATUSES
            .iter()
            .map(|&(name, customer, severity, facility, code)| {
                ((customer, severity, facility, code), name)
            })
            .collect()
    })
}

/// Name of the status with the given key, if catalogued.
pub(crate) fn name_of(
    customer: bool,
    severity: Severity,
    facility: Facility,
    code: u16,
) -> Option<&'static str> {
    by_key().get(&(customer, severity, facility, code)).copied()
}

/// Key of the status with the given name (case-insensitive).
pub(crate) fn key_of(name: &str) -> Option<(bool, Severity, Facility, u16)> {
    STATUSES
        .iter()
        .find(|entry| entry.0.eq_ignore_ascii_case(name))
        .map(|&(_, customer, severity, facility, code)| (customer, severity, facility, code))
}

/// Number of catalogued statuses.
pub(crate) fn len() -> usize {
    STATUSES.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{decode_status, status_bytes, Status};

    #[test]
    fn keys_are_unique() {
        assert_eq!(by_key().len(), len());
    }

    #[test]
    fn success_is_catalogued() {
        assert_eq!(name_of(false, Severity::Null, Facility::NULL, 0), Some("Success"));
        assert_eq!(key_of("success"), Some((false, Severity::Null, Facility::NULL, 0)));
    }

    #[test]
    fn every_catalogued_status_survives_the_wire() {
        for &(name, customer, severity, facility, code) in STATUSES {
            let status = Status::new(customer, severity, facility, code);
            let decoded = decode_status(&status_bytes(&status)).unwrap();
            assert_eq!(decoded, status, "{name}");
            assert_eq!(decoded.name(), Some(name));
            assert_eq!(Status::from_name(name), Some(status), "{name}");
            assert_eq!(decoded.is_failure(), code != 0 || severity == Severity::Error, "{name}");
        }
    }
}
