use std::sync::Arc;

use anyhow::{Context, Result};
use time::OffsetDateTime;

use prepdesk::explorer::{DataStore, HomeContext};
use prepdesk::model::{ConfigSources, DeskConfig, UpcomingExam, upcoming_exams};
use prepdesk::remote::{BackgroundStatusSink, RemoteClient};

use crate::{Commands, ConfigCommands};

mod config;
mod dashboard;
mod dispatch;
mod editorials;

pub(super) fn handle_command(
    command: Commands,
    config: &DeskConfig,
    sources: &ConfigSources,
) -> Result<()> {
    dispatch::handle_command(command, config, sources)
}

fn connect(config: &DeskConfig) -> Result<Arc<RemoteClient>> {
    let client = RemoteClient::new(config.api.clone()).context("create API client")?;
    Ok(Arc::new(client))
}

fn fetch_upcoming(client: &RemoteClient) -> Result<Vec<UpcomingExam>> {
    let exams = client.list_exams()?;
    Ok(upcoming_exams(&exams, OffsetDateTime::now_utc())?)
}

/// CLI commands never toggle, so the sink only satisfies the store.
fn load_store(client: &Arc<RemoteClient>) -> Result<DataStore> {
    let sink = Arc::new(BackgroundStatusSink::new(Arc::clone(client)));
    Ok(DataStore::load(&**client, sink)?)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {}", what))?
    );
    Ok(())
}

fn home_ctx(exams: &[UpcomingExam]) -> HomeContext<'_> {
    HomeContext {
        next_exam: exams.first(),
    }
}
