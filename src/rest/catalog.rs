//! Provider catalog lookups.
//!
//! Regions and plan types are public. The image catalog is public too, but
//! private images only show up when it is read with the credential.

use serde::Deserialize;

use crate::clients::{HttpError, HttpMethod};
use crate::rest::client::LinodeClient;
use crate::rest::errors::LinodeError;
use crate::rest::normalize::{normalize, Outcome};
use crate::rest::path::ResourcePath;

const REGIONS: ResourcePath = ResourcePath::new(HttpMethod::Get, "catalog.regions", "regions");
const TYPES: ResourcePath = ResourcePath::new(HttpMethod::Get, "catalog.types", "linode/types");
const IMAGES: ResourcePath = ResourcePath::new(HttpMethod::Get, "catalog.images", "images");

#[derive(Debug, Deserialize)]
struct CatalogPage {
    #[serde(default)]
    data: Vec<CatalogEntry>,
    #[serde(default)]
    pages: u64,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
}

/// Id lookups against the provider catalogs.
#[derive(Clone, Copy, Debug)]
pub struct Catalog<'a> {
    client: &'a LinodeClient,
}

impl<'a> Catalog<'a> {
    pub(crate) const fn new(client: &'a LinodeClient) -> Self {
        Self { client }
    }

    /// Returns the ids of all regions, e.g. `us-east`.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails or the response has no
    /// readable `data` list.
    pub fn regions(&self) -> Result<Vec<String>, LinodeError> {
        self.ids(&REGIONS, false)
    }

    /// Returns the ids of all plan types, e.g. `g6-nanode-1`.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails or the response has no
    /// readable `data` list.
    pub fn types(&self) -> Result<Vec<String>, LinodeError> {
        self.ids(&TYPES, false)
    }

    /// Returns image ids. With `include_private`, the request carries the
    /// credential and the account's private images are included.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails or the response has no
    /// readable `data` list.
    pub fn images(&self, include_private: bool) -> Result<Vec<String>, LinodeError> {
        self.ids(&IMAGES, include_private)
    }

    fn ids(&self, path: &ResourcePath, authenticated: bool) -> Result<Vec<String>, LinodeError> {
        let mut ids = Vec::new();
        let mut page = 1;

        loop {
            let response = if page == 1 {
                self.client.send(path, &[], None, authenticated)?
            } else {
                self.client.send_page(path, page, authenticated)?
            };
            let code = response.code;

            let pages = match normalize(response.body)? {
                Outcome::Success => 0,
                Outcome::Payload(body) => {
                    let listing: CatalogPage = serde_json::from_value(body)
                        .map_err(|source| HttpError::MalformedBody { code, source })?;
                    ids.extend(listing.data.into_iter().map(|entry| entry.id));
                    listing.pages
                }
            };

            if page >= pages {
                break;
            }
            page += 1;
        }

        tracing::debug!(
            catalog = path.operation,
            entries = ids.len(),
            pages = page,
            "Fetched Linode catalog"
        );

        Ok(ids)
    }
}

/// Fails with [`LinodeError::ValidationFailed`] unless `value` is listed.
pub(crate) fn ensure_listed(
    field: &'static str,
    value: &str,
    catalog: &[String],
) -> Result<(), LinodeError> {
    if catalog.iter().any(|id| id == value) {
        return Ok(());
    }
    tracing::debug!(field, value, "Rejected value missing from Linode catalog");
    Err(LinodeError::ValidationFailed {
        field,
        value: value.to_string(),
    })
}
