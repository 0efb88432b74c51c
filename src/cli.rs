use std::time::Duration;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::{
    api::{DEFAULT_BASE_URL, InverterDayRequest, InverterListRequest, InverterSelector, SolisCloud},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Poll the inverter list on a fixed interval and log the readings.
    Watch(WatchArgs),

    /// Verify the credentials with a minimal list request.
    Verify(VerifyArgs),

    /// One-shot API calls, printing the raw response document.
    Debug(DebugArgs),
}

#[derive(Parser)]
pub struct SolisApiArgs {
    /// API key identifier.
    #[clap(long = "api-id", env = "SOLIS_API_ID")]
    pub api_id: String,

    /// API key secret.
    #[clap(long = "api-secret", env = "SOLIS_API_SECRET")]
    pub api_secret: String,

    /// API base URL.
    #[clap(long = "base-url", env = "SOLIS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Append `;charset=UTF-8` to the Content-Type used for signing and sending.
    #[clap(long = "json-charset", env = "SOLIS_JSON_CHARSET")]
    pub use_json_charset: bool,

    /// Per-request timeout in seconds.
    #[clap(long = "timeout-secs", default_value = "30", env = "SOLIS_TIMEOUT_SECS")]
    pub timeout_secs: u64,
}

impl SolisApiArgs {
    pub fn try_new_client(&self) -> Result<SolisCloud> {
        SolisCloud::try_new(
            &self.api_id,
            &self.api_secret,
            &self.base_url,
            self.use_json_charset,
            Duration::from_secs(self.timeout_secs),
        )
    }
}

#[derive(Parser)]
pub struct WatchArgs {
    #[clap(flatten)]
    pub api: SolisApiArgs,

    /// Poll interval in seconds.
    #[clap(long = "interval-secs", default_value = "120", env = "SOLIS_SCAN_INTERVAL_SECS")]
    pub interval_secs: u64,

    /// Page size for the list request.
    #[clap(long, default_value = "20")]
    pub page_size: u32,

    /// Restrict the poll to one station.
    #[clap(long)]
    pub station_id: Option<String>,
}

impl WatchArgs {
    #[must_use]
    pub fn request(&self) -> InverterListRequest {
        InverterListRequest {
            page_size: self.page_size,
            station_id: self.station_id.clone(),
            ..InverterListRequest::default()
        }
    }
}

#[derive(Parser)]
pub struct VerifyArgs {
    #[clap(flatten)]
    pub api: SolisApiArgs,
}

#[derive(Parser)]
pub struct DebugArgs {
    #[clap(flatten)]
    pub api: SolisApiArgs,

    #[command(subcommand)]
    pub command: DebugCommand,
}

#[derive(Subcommand)]
pub enum DebugCommand {
    /// List inverters.
    InverterList(InverterListArgs),

    /// Details of one inverter.
    InverterDetail(InverterSelectorArgs),

    /// One day of telemetry for one inverter.
    InverterDay(InverterDayArgs),
}

#[derive(Parser)]
pub struct InverterListArgs {
    #[clap(long, default_value = "1")]
    pub page_no: u32,

    #[clap(long, default_value = "20")]
    pub page_size: u32,

    #[clap(long)]
    pub station_id: Option<String>,

    #[clap(long)]
    pub nmi_code: Option<String>,

    /// May be repeated to filter on several serial numbers.
    #[clap(long = "serial-number")]
    pub serial_numbers: Vec<String>,
}

impl InverterListArgs {
    #[must_use]
    pub fn request(&self) -> InverterListRequest {
        InverterListRequest {
            page_no: self.page_no,
            page_size: self.page_size,
            station_id: self.station_id.clone(),
            nmi_code: self.nmi_code.clone(),
            serial_numbers: (!self.serial_numbers.is_empty())
                .then(|| self.serial_numbers.clone()),
        }
    }
}

#[derive(Parser)]
pub struct InverterSelectorArgs {
    /// Cloud record id of the inverter.
    #[clap(long)]
    pub id: Option<String>,

    #[clap(long, alias = "serial")]
    pub serial_number: Option<String>,
}

impl From<&InverterSelectorArgs> for InverterSelector {
    fn from(args: &InverterSelectorArgs) -> Self {
        Self { id: args.id.clone(), serial_number: args.serial_number.clone() }
    }
}

#[derive(Parser)]
pub struct InverterDayArgs {
    #[clap(flatten)]
    pub inverter: InverterSelectorArgs,

    /// The day to query, as `YYYY-MM-DD`.
    #[clap(long)]
    pub date: NaiveDate,

    /// Timezone offset in hours.
    #[clap(long, default_value = "0", allow_negative_numbers = true)]
    pub time_zone: i32,

    /// Currency code for the yield figures.
    #[clap(long, default_value = "")]
    pub currency: String,
}

impl InverterDayArgs {
    #[must_use]
    pub fn request(&self) -> InverterDayRequest {
        InverterDayRequest {
            date: self.date,
            time_zone: self.time_zone,
            currency: self.currency.clone(),
            inverter: InverterSelector::from(&self.inverter),
        }
    }
}
