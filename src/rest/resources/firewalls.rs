//! Cloud firewall operations.

use std::fmt::Display;

use serde_json::{json, Value};

use crate::clients::HttpMethod;
use crate::rest::client::LinodeClient;
use crate::rest::errors::LinodeError;
use crate::rest::normalize::Outcome;
use crate::rest::params::{required, Params};
use crate::rest::path::ResourcePath;

const LIST: ResourcePath =
    ResourcePath::new(HttpMethod::Get, "firewalls.list", "networking/firewalls");
const CREATE: ResourcePath =
    ResourcePath::new(HttpMethod::Post, "firewalls.create", "networking/firewalls");
const GET: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    "firewalls.get",
    "networking/firewalls/{firewall_id}",
);
const UPDATE: ResourcePath = ResourcePath::new(
    HttpMethod::Put,
    "firewalls.update",
    "networking/firewalls/{firewall_id}",
);
const DELETE: ResourcePath = ResourcePath::new(
    HttpMethod::Delete,
    "firewalls.delete",
    "networking/firewalls/{firewall_id}",
);

/// Operations on cloud firewalls.
#[derive(Clone, Copy, Debug)]
pub struct Firewalls<'a> {
    client: &'a LinodeClient,
}

impl<'a> Firewalls<'a> {
    pub(crate) const fn new(client: &'a LinodeClient) -> Self {
        Self { client }
    }

    /// Lists the account's firewalls.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn list(&self) -> Result<Outcome, LinodeError> {
        self.client.call(&LIST, &[], None)
    }

    /// Creates a firewall. `rules` holds the `inbound`/`outbound` rule lists
    /// and their default policies. Attach instances with `devices` in
    /// `params`.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn create(&self, label: &str, rules: Value, params: Params) -> Result<Outcome, LinodeError> {
        let body = params.merge_into(required([("label", json!(label)), ("rules", rules)]));
        self.client.call(&CREATE, &[], Some(body))
    }

    /// Fetches one firewall.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn get(&self, firewall_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(&GET, &[("firewall_id", &firewall_id)], None)
    }

    /// Updates label, status, or tags. `params` is sent as given.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn update(&self, firewall_id: impl Display, params: Params) -> Result<Outcome, LinodeError> {
        self.client.call(
            &UPDATE,
            &[("firewall_id", &firewall_id)],
            Some(params.into_body()),
        )
    }

    /// Deletes a firewall and its device assignments.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn delete(&self, firewall_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(&DELETE, &[("firewall_id", &firewall_id)], None)
    }
}
