use bandwire_registry::CommandRegistry;
use bandwire_session::{DeviceConstants, DeviceFamily, ENVOY_API_THRESHOLD};
use serde::Serialize;

use crate::cmd::device::DeviceSession;
use crate::cmd::{runtime, InfoArgs};
use crate::exit::{registry_error, CliResult, SUCCESS};
use crate::output::{print_fields, print_json, print_pretty, OutputFormat};

#[derive(Debug, Serialize)]
struct InfoOutput {
    transport: &'static str,
    family: DeviceFamily,
    api_threshold: u64,
    constants: &'static DeviceConstants,
}

impl InfoOutput {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let c = self.constants;
        vec![
            ("transport", self.transport.to_string()),
            ("family", self.family.to_string()),
            (
                "me_tile",
                format!("{}x{}", c.me_tile_width, c.me_tile_height),
            ),
            ("tile_icon", c.tile_icon_size.to_string()),
            ("badge_icon", c.badge_icon_size.to_string()),
            ("notification_icon", c.notification_icon_size.to_string()),
            ("max_icons_per_tile", c.max_icons_per_tile.to_string()),
            ("profile_record_size", c.profile_record_size.to_string()),
        ]
    }
}

pub fn run(args: InfoArgs, format: OutputFormat) -> CliResult<i32> {
    let registry =
        CommandRegistry::builtin().map_err(|err| registry_error("catalog failed to load", err))?;

    let family = runtime()?.block_on(async {
        let device = DeviceSession::open(&args.transport, registry).await?;
        device.device_family().await
    })?;

    let out = InfoOutput {
        transport: args.transport.transport.as_str(),
        family,
        api_threshold: ENVOY_API_THRESHOLD,
        constants: family.constants(),
    };

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => print_fields(&out.rows()),
        OutputFormat::Pretty => print_pretty(&out.rows()),
        OutputFormat::Raw => println!("{family}"),
    }
    Ok(SUCCESS)
}
