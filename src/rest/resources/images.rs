//! Image operations.
//!
//! Image ids look like `linode/debian12` for public images and `private/42`
//! for the account's own.

use std::fmt::Display;

use serde_json::json;

use crate::clients::HttpMethod;
use crate::rest::client::LinodeClient;
use crate::rest::errors::LinodeError;
use crate::rest::normalize::Outcome;
use crate::rest::params::{required, Params};
use crate::rest::path::ResourcePath;

const LIST: ResourcePath = ResourcePath::new(HttpMethod::Get, "images.list", "images");
const CREATE: ResourcePath = ResourcePath::new(HttpMethod::Post, "images.create", "images");
const UPLOAD: ResourcePath =
    ResourcePath::new(HttpMethod::Post, "images.upload", "images/upload");
const GET: ResourcePath = ResourcePath::new(HttpMethod::Get, "images.get", "images/{image_id}");
const UPDATE: ResourcePath =
    ResourcePath::new(HttpMethod::Put, "images.update", "images/{image_id}");
const DELETE: ResourcePath =
    ResourcePath::new(HttpMethod::Delete, "images.delete", "images/{image_id}");

/// Operations on images.
#[derive(Clone, Copy, Debug)]
pub struct Images<'a> {
    client: &'a LinodeClient,
}

impl<'a> Images<'a> {
    pub(crate) const fn new(client: &'a LinodeClient) -> Self {
        Self { client }
    }

    /// Lists public images and the account's private images.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn list(&self) -> Result<Outcome, LinodeError> {
        self.client.call(&LIST, &[], None)
    }

    /// Captures a private image from a disk.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn create(&self, disk_id: u64, params: Params) -> Result<Outcome, LinodeError> {
        let body = params.merge_into(required([("disk_id", json!(disk_id))]));
        self.client.call(&CREATE, &[], Some(body))
    }

    /// Starts an image upload. The payload carries the upload URL.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn upload(&self, label: &str, region: &str, params: Params) -> Result<Outcome, LinodeError> {
        let body = params.merge_into(required([
            ("label", json!(label)),
            ("region", json!(region)),
        ]));
        self.client.call(&UPLOAD, &[], Some(body))
    }

    /// Fetches one image.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn get(&self, image_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(&GET, &[("image_id", &image_id)], None)
    }

    /// Updates a private image's label or description. `params` is sent as
    /// given.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn update(&self, image_id: impl Display, params: Params) -> Result<Outcome, LinodeError> {
        self.client
            .call(&UPDATE, &[("image_id", &image_id)], Some(params.into_body()))
    }

    /// Deletes a private image.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn delete(&self, image_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(&DELETE, &[("image_id", &image_id)], None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_with, RecordingTransport};

    #[test]
    fn test_create_from_disk() {
        let transport = RecordingTransport::shared();
        let client = client_with(transport.clone());

        client
            .images()
            .create(100, Params::new().set("label", "golden").set("description", ""))
            .unwrap();

        let calls = transport.calls();
        assert!(calls[0].url.ends_with("/v4/images"));
        assert_eq!(calls[0].body, Some(json!({"disk_id": 100, "label": "golden"})));
    }

    #[test]
    fn test_upload_returns_upload_url() {
        let transport = RecordingTransport::shared();
        transport.respond_with(
            HttpMethod::Post,
            "images/upload",
            json!({"image": {"id": "private/7"}, "upload_to": "https://upload.example"}),
        );
        let client = client_with(transport.clone());

        let outcome = client
            .images()
            .upload("custom", "us-east", Params::new())
            .unwrap();

        assert_eq!(outcome.payload().unwrap()["upload_to"], "https://upload.example");
        assert_eq!(
            transport.calls()[0].body,
            Some(json!({"label": "custom", "region": "us-east"}))
        );
    }

    #[test]
    fn test_private_image_paths() {
        let transport = RecordingTransport::shared();
        let client = client_with(transport.clone());

        client.images().get("private/7").unwrap();
        client
            .images()
            .update("private/7", Params::new().set("label", "renamed"))
            .unwrap();
        client.images().delete("private/7").unwrap();
        client.images().list().unwrap();

        let calls = transport.calls();
        assert!(calls[0].url.ends_with("/v4/images/private/7"));
        assert_eq!(calls[1].method, HttpMethod::Put);
        assert_eq!(calls[2].method, HttpMethod::Delete);
        assert!(calls.iter().all(|c| c.headers.contains_key("Authorization")));
    }
}
