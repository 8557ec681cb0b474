//! IP address operations for one instance.

use std::fmt::Display;

use serde_json::json;

use crate::clients::HttpMethod;
use crate::rest::client::LinodeClient;
use crate::rest::errors::LinodeError;
use crate::rest::normalize::Outcome;
use crate::rest::path::ResourcePath;

const LIST: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    "ips.list",
    "linode/instances/{linode_id}/ips",
);
const ALLOCATE: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "ips.allocate",
    "linode/instances/{linode_id}/ips",
);
const GET: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    "ips.get",
    "linode/instances/{linode_id}/ips/{address}",
);
const UPDATE_RDNS: ResourcePath = ResourcePath::new(
    HttpMethod::Put,
    "ips.update_rdns",
    "linode/instances/{linode_id}/ips/{address}",
);
const DELETE: ResourcePath = ResourcePath::new(
    HttpMethod::Delete,
    "ips.delete",
    "linode/instances/{linode_id}/ips/{address}",
);

/// Operations on the IP addresses of one instance.
#[derive(Clone, Debug)]
pub struct Ips<'a> {
    client: &'a LinodeClient,
    linode_id: String,
}

impl<'a> Ips<'a> {
    pub(crate) const fn new(client: &'a LinodeClient, linode_id: String) -> Self {
        Self { client, linode_id }
    }

    /// Lists IPv4 and IPv6 addresses.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn list(&self) -> Result<Outcome, LinodeError> {
        self.client
            .call(&LIST, &[("linode_id", &self.linode_id)], None)
    }

    /// Allocates an address. `address_type` is `ipv4`.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn allocate(&self, address_type: &str, public: bool) -> Result<Outcome, LinodeError> {
        self.client.call(
            &ALLOCATE,
            &[("linode_id", &self.linode_id)],
            Some(json!({ "type": address_type, "public": public })),
        )
    }

    /// Fetches one address.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn get(&self, address: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(
            &GET,
            &[("linode_id", &self.linode_id), ("address", &address)],
            None,
        )
    }

    /// Sets reverse DNS for an address. `None` resets it to the default.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn update_rdns(
        &self,
        address: impl Display,
        rdns: Option<&str>,
    ) -> Result<Outcome, LinodeError> {
        self.client.call(
            &UPDATE_RDNS,
            &[("linode_id", &self.linode_id), ("address", &address)],
            Some(json!({ "rdns": rdns })),
        )
    }

    /// Releases an address.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn delete(&self, address: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(
            &DELETE,
            &[("linode_id", &self.linode_id), ("address", &address)],
            None,
        )
    }
}
