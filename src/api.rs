pub mod soliscloud;

pub use self::soliscloud::{
    Api as SolisCloud,
    ApiError,
    DEFAULT_BASE_URL,
    InverterDayRequest,
    InverterListRequest,
    InverterSelector,
};
