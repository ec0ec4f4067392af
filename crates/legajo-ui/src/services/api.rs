//! HTTP client for the legajo JSON endpoints.
//!
//! # Design
//! - One client per page boot, shared through `ApiCtx`.
//! - Every call takes a fully resolved path; templating happens in the callers.
//! - Non-2xx answers are errors except where the endpoint uses them to mean "nothing stored".

use anyhow::bail;
use gloo_net::http::Request;
use legajo_api_models::{
    DniCheckResponse, DocumentTypeOption, PersonnelStructureResponse, SectionOption,
    SectionPatch,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use web_sys::AbortSignal;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        signal: Option<&AbortSignal>,
    ) -> anyhow::Result<T> {
        let response = Request::get(&self.url(path))
            .abort_signal(signal)
            .send()
            .await?;
        if !response.ok() {
            bail!("GET {path} failed with status {}", response.status());
        }
        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn fetch_sections(&self, path: &str) -> anyhow::Result<Vec<SectionOption>> {
        self.get_json(path, None).await
    }

    pub(crate) async fn fetch_document_types(
        &self,
        path: &str,
        signal: Option<&AbortSignal>,
    ) -> anyhow::Result<Vec<DocumentTypeOption>> {
        self.get_json(path, signal).await
    }

    /// Stored structure patches for one personnel; `None` when the server has none.
    pub(crate) async fn fetch_personnel_structure(
        &self,
        path: &str,
    ) -> anyhow::Result<Option<BTreeMap<String, SectionPatch>>> {
        let response = Request::get(&self.url(path)).send().await?;
        if !response.ok() {
            return Ok(None);
        }
        let body = response.json::<PersonnelStructureResponse>().await?;
        Ok(body.into_patches())
    }

    pub(crate) async fn check_dni(&self, path: &str) -> anyhow::Result<DniCheckResponse> {
        self.get_json(path, None).await
    }

    /// Raw list body; callers decide how to treat error objects.
    pub(crate) async fn fetch_personnel_list(&self, path: &str) -> anyhow::Result<Value> {
        self.get_json(path, None).await
    }
}
