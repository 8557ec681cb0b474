//! Disk operations for one instance.

use std::fmt::Display;

use serde_json::json;

use crate::clients::HttpMethod;
use crate::rest::client::LinodeClient;
use crate::rest::errors::LinodeError;
use crate::rest::normalize::Outcome;
use crate::rest::params::{required, Params};
use crate::rest::path::ResourcePath;

const LIST: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    "disks.list",
    "linode/instances/{linode_id}/disks",
);
const CREATE: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "disks.create",
    "linode/instances/{linode_id}/disks",
);
const GET: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    "disks.get",
    "linode/instances/{linode_id}/disks/{disk_id}",
);
const UPDATE: ResourcePath = ResourcePath::new(
    HttpMethod::Put,
    "disks.update",
    "linode/instances/{linode_id}/disks/{disk_id}",
);
const DELETE: ResourcePath = ResourcePath::new(
    HttpMethod::Delete,
    "disks.delete",
    "linode/instances/{linode_id}/disks/{disk_id}",
);
const CLONE: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "disks.clone",
    "linode/instances/{linode_id}/disks/{disk_id}/clone",
);
const RESET_PASSWORD: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "disks.reset_password",
    "linode/instances/{linode_id}/disks/{disk_id}/password",
);
const RESIZE: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "disks.resize",
    "linode/instances/{linode_id}/disks/{disk_id}/resize",
);

/// Operations on the disks of one instance. Sizes are in MB.
#[derive(Clone, Debug)]
pub struct Disks<'a> {
    client: &'a LinodeClient,
    linode_id: String,
}

impl<'a> Disks<'a> {
    pub(crate) const fn new(client: &'a LinodeClient, linode_id: String) -> Self {
        Self { client, linode_id }
    }

    /// Lists the instance's disks.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn list(&self) -> Result<Outcome, LinodeError> {
        self.client
            .call(&LIST, &[("linode_id", &self.linode_id)], None)
    }

    /// Creates a disk of `size` MB. Deploying an image needs `image` and
    /// `root_pass` in `params`.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn create(&self, size: u64, params: Params) -> Result<Outcome, LinodeError> {
        let body = params.merge_into(required([("size", json!(size))]));
        self.client
            .call(&CREATE, &[("linode_id", &self.linode_id)], Some(body))
    }

    /// Fetches one disk.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn get(&self, disk_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(
            &GET,
            &[("linode_id", &self.linode_id), ("disk_id", &disk_id)],
            None,
        )
    }

    /// Updates a disk's label. `params` is sent as given.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn update(&self, disk_id: impl Display, params: Params) -> Result<Outcome, LinodeError> {
        self.client.call(
            &UPDATE,
            &[("linode_id", &self.linode_id), ("disk_id", &disk_id)],
            Some(params.into_body()),
        )
    }

    /// Deletes a disk.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn delete(&self, disk_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(
            &DELETE,
            &[("linode_id", &self.linode_id), ("disk_id", &disk_id)],
            None,
        )
    }

    /// Copies a disk to a new disk on the same instance.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn clone_disk(&self, disk_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(
            &CLONE,
            &[("linode_id", &self.linode_id), ("disk_id", &disk_id)],
            None,
        )
    }

    /// Sets the root password of the distribution on a disk.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn reset_password(
        &self,
        disk_id: impl Display,
        password: &str,
    ) -> Result<Outcome, LinodeError> {
        self.client.call(
            &RESET_PASSWORD,
            &[("linode_id", &self.linode_id), ("disk_id", &disk_id)],
            Some(json!({ "password": password })),
        )
    }

    /// Grows or shrinks a disk to `size` MB.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn resize(&self, disk_id: impl Display, size: u64) -> Result<Outcome, LinodeError> {
        self.client.call(
            &RESIZE,
            &[("linode_id", &self.linode_id), ("disk_id", &disk_id)],
            Some(json!({ "size": size })),
        )
    }
}
