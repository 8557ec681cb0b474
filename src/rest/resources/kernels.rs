//! Kernel lookups.

use std::fmt::Display;

use crate::clients::HttpMethod;
use crate::rest::client::LinodeClient;
use crate::rest::errors::LinodeError;
use crate::rest::normalize::Outcome;
use crate::rest::path::ResourcePath;

const LIST: ResourcePath = ResourcePath::new(HttpMethod::Get, "kernels.list", "linode/kernels");
const GET: ResourcePath =
    ResourcePath::new(HttpMethod::Get, "kernels.get", "linode/kernels/{kernel_id}");

/// Read-only access to available kernels.
#[derive(Clone, Copy, Debug)]
pub struct Kernels<'a> {
    client: &'a LinodeClient,
}

impl<'a> Kernels<'a> {
    pub(crate) const fn new(client: &'a LinodeClient) -> Self {
        Self { client }
    }

    /// Lists available kernels.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn list(&self) -> Result<Outcome, LinodeError> {
        self.client.call(&LIST, &[], None)
    }

    /// Fetches one kernel, e.g. `linode/grub2`.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn get(&self, kernel_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(&GET, &[("kernel_id", &kernel_id)], None)
    }
}
