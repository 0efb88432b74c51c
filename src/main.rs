mod api;
mod cli;
mod poller;
mod prelude;
mod readings;
mod setup;

use std::time::Duration;

use clap::{Parser, crate_version};

use crate::{
    api::InverterSelector,
    cli::{Args, Command, DebugCommand},
    poller::Poller,
    prelude::*,
    setup::{CredentialCheck, verify_credentials},
};

#[tokio::main]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Watch(args) => {
            let api = args.api.try_new_client()?;
            let period = Duration::from_secs(args.interval_secs);
            Poller::new(api, args.request(), period).run().await
        }

        Command::Verify(args) => {
            match verify_credentials(&args.api.try_new_client()?).await {
                Ok(CredentialCheck::Valid) => {
                    info!("credentials accepted");
                    Ok(())
                }
                Ok(CredentialCheck::InvalidAuth) => bail!("the API rejected the credentials"),
                Err(error) => Err(error).context("could not reach the API"),
            }
        }

        Command::Debug(args) => {
            let api = args.api.try_new_client()?;
            let document = match args.command {
                DebugCommand::InverterList(args) => api.inverter_list(&args.request()).await?,
                DebugCommand::InverterDetail(args) => {
                    api.inverter_detail(&InverterSelector::from(&args)).await?
                }
                DebugCommand::InverterDay(args) => api.inverter_day(&args.request()).await?,
            };
            println!("{}", serde_json::to_string_pretty(&document)?);
            Ok(())
        }
    }
}
