use serde::de::DeserializeOwned;

use super::*;

impl RemoteClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> DeskResult<reqwest::blocking::Response> {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(DeskError::fetch(
                label,
                "unauthorized (check api.token or PREPDESK_TOKEN)",
            ));
        }
        if !status.is_success() {
            return Err(DeskError::fetch(label, format!("status {}", status)));
        }
        Ok(resp)
    }

    pub(super) fn get(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.authed(self.client.get(self.url(path)))
    }

    pub(super) fn patch(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.authed(self.client.patch(self.url(path)))
    }

    /// Sends `req`, checks the status and decodes a JSON body.
    pub(super) fn send_json<T: DeserializeOwned>(
        &self,
        req: reqwest::blocking::RequestBuilder,
        label: &str,
    ) -> DeskResult<T> {
        let body = self.send_text(req, label)?;
        serde_json::from_str(&body).map_err(|err| DeskError::parse(label, err))
    }

    pub(super) fn send_text(
        &self,
        req: reqwest::blocking::RequestBuilder,
        label: &str,
    ) -> DeskResult<String> {
        let resp = req.send().map_err(|err| DeskError::fetch(label, err))?;
        self.ensure_ok(resp, label)?
            .text()
            .map_err(|err| DeskError::fetch(label, err))
    }

    fn authed(&self, req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.api.token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => req,
        }
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url, path)
    }
}
