use chrono::NaiveDate;
use serde::Serialize;
use serde_with::serde_as;

/// Paging and filters for `/v1/api/inverterList`.
///
/// Unset filters are omitted from the payload entirely: the server treats an
/// absent key and an explicit `null` differently.
#[derive(Serialize)]
pub struct InverterListRequest {
    #[serde(rename = "pageNo")]
    pub page_no: u32,

    #[serde(rename = "pageSize")]
    pub page_size: u32,

    /// Station identifier, transmitted as a string even for numeric ids.
    #[serde(rename = "stationId", skip_serializing_if = "Option::is_none")]
    pub station_id: Option<String>,

    /// Australian national meter identifier.
    #[serde(rename = "nmiCode", skip_serializing_if = "Option::is_none")]
    pub nmi_code: Option<String>,

    #[serde(rename = "snList", skip_serializing_if = "Option::is_none")]
    pub serial_numbers: Option<Vec<String>>,
}

impl InverterListRequest {
    #[must_use]
    pub const fn page(page_no: u32, page_size: u32) -> Self {
        Self { page_no, page_size, station_id: None, nmi_code: None, serial_numbers: None }
    }
}

impl Default for InverterListRequest {
    fn default() -> Self {
        Self::page(1, 20)
    }
}

/// Identifies one inverter by cloud record id, serial number, or both.
#[derive(Default, Serialize)]
pub struct InverterSelector {
    /// Cloud record id, transmitted as a string.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "sn", skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

impl InverterSelector {
    pub(super) const fn is_empty(&self) -> bool {
        self.id.is_none() && self.serial_number.is_none()
    }
}

/// Parameters for `/v1/api/inverterDay`.
#[serde_as]
#[derive(Serialize)]
pub struct InverterDayRequest {
    /// The day to query, transmitted as `YYYY-MM-DD`.
    #[serde(rename = "time")]
    pub date: NaiveDate,

    /// Timezone offset in hours, transmitted as a string.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(rename = "timeZone")]
    pub time_zone: i32,

    /// Currency code for the yield figures; the server accepts an empty string.
    #[serde(rename = "money")]
    pub currency: String,

    #[serde(flatten)]
    pub inverter: InverterSelector,
}
