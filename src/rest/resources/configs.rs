//! Configuration profile operations for one instance.

use std::fmt::Display;

use serde_json::{json, Value};

use crate::clients::HttpMethod;
use crate::rest::client::LinodeClient;
use crate::rest::errors::LinodeError;
use crate::rest::normalize::Outcome;
use crate::rest::params::{required, Params};
use crate::rest::path::ResourcePath;

const LIST: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    "configs.list",
    "linode/instances/{linode_id}/configs",
);
const CREATE: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "configs.create",
    "linode/instances/{linode_id}/configs",
);
const GET: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    "configs.get",
    "linode/instances/{linode_id}/configs/{config_id}",
);
const UPDATE: ResourcePath = ResourcePath::new(
    HttpMethod::Put,
    "configs.update",
    "linode/instances/{linode_id}/configs/{config_id}",
);
const DELETE: ResourcePath = ResourcePath::new(
    HttpMethod::Delete,
    "configs.delete",
    "linode/instances/{linode_id}/configs/{config_id}",
);

/// Operations on the configuration profiles of one instance.
#[derive(Clone, Debug)]
pub struct Configs<'a> {
    client: &'a LinodeClient,
    linode_id: String,
}

impl<'a> Configs<'a> {
    pub(crate) const fn new(client: &'a LinodeClient, linode_id: String) -> Self {
        Self { client, linode_id }
    }

    /// Lists the instance's configuration profiles.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn list(&self) -> Result<Outcome, LinodeError> {
        self.client
            .call(&LIST, &[("linode_id", &self.linode_id)], None)
    }

    /// Creates a profile. `devices` maps device slots (`sda`, `sdb`, ...) to
    /// disks or volumes.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn create(&self, devices: Value, label: &str, params: Params) -> Result<Outcome, LinodeError> {
        let body = params.merge_into(required([
            ("devices", devices),
            ("label", json!(label)),
        ]));
        self.client
            .call(&CREATE, &[("linode_id", &self.linode_id)], Some(body))
    }

    /// Fetches one profile.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn get(&self, config_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(
            &GET,
            &[("linode_id", &self.linode_id), ("config_id", &config_id)],
            None,
        )
    }

    /// Updates a profile. `params` is sent as given.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn update(&self, config_id: impl Display, params: Params) -> Result<Outcome, LinodeError> {
        self.client.call(
            &UPDATE,
            &[("linode_id", &self.linode_id), ("config_id", &config_id)],
            Some(params.into_body()),
        )
    }

    /// Deletes a profile.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn delete(&self, config_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(
            &DELETE,
            &[("linode_id", &self.linode_id), ("config_id", &config_id)],
            None,
        )
    }
}
