use crate::error::{DeskError, DeskResult};
use crate::model::ApiConfig;

mod http_client;

mod types;
pub use self::types::*;
mod editorials;
mod exams;
mod status;
pub use self::status::BackgroundStatusSink;

pub struct RemoteClient {
    api: ApiConfig,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(api: ApiConfig) -> DeskResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("prepdesk/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|err| DeskError::fetch("build http client", err))?;
        Ok(Self { api, client })
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}
