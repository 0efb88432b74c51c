//! Fixed-interval polling of the inverter list.
//!
//! At most one call is in flight at a time. A failed cycle keeps the last
//! successful document, so readers always see the most recent good data.

use std::time::Duration;

use serde_json::Value;
use tokio::time::{MissedTickBehavior, interval};

use crate::{
    api::{ApiError, InverterListRequest, SolisCloud},
    prelude::*,
    readings,
};

pub struct Poller {
    api: SolisCloud,
    request: InverterListRequest,
    period: Duration,
    last: Option<Value>,
}

impl Poller {
    #[must_use]
    pub const fn new(api: SolisCloud, request: InverterListRequest, period: Duration) -> Self {
        Self { api, request, period, last: None }
    }

    /// The most recent successful document, if any cycle has succeeded yet.
    #[must_use]
    pub const fn last(&self) -> Option<&Value> {
        self.last.as_ref()
    }

    /// Run one poll cycle. On failure the cached document is left untouched.
    pub async fn poll_once(&mut self) -> Result<(), ApiError> {
        let document = self.api.inverter_list(&self.request).await?;
        self.last = Some(document);
        Ok(())
    }

    /// Poll forever, logging the readings after each successful cycle.
    ///
    /// The first cycle runs immediately; afterwards one cycle per period,
    /// without bursting after a missed tick.
    pub async fn run(mut self) -> Result {
        let mut timer = interval(self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            timer.tick().await;
            match self.poll_once().await {
                Ok(()) => {
                    if let Some(document) = &self.last {
                        for reading in readings::extract(document) {
                            match reading.value {
                                Some(value) => {
                                    info!(name = reading.name, value, unit = reading.unit, "reading");
                                }
                                None => debug!(name = reading.name, "no value"),
                            }
                        }
                    }
                }
                Err(error) => warn!(%error, "poll cycle failed, keeping the last document"),
            }
        }
    }
}
