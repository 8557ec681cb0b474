//! Backup and snapshot operations for one instance.

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
    "backups.list",
    "linode/instances/{linode_id}/backups",
);
const SNAPSHOT: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "backups.create_snapshot",
    "linode/instances/{linode_id}/backups",
);
const ENABLE: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "backups.enable",
    "linode/instances/{linode_id}/backups/enable",
);
const CANCEL: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "backups.cancel",
    "linode/instances/{linode_id}/backups/cancel",
);
const GET: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    "backups.get",
    "linode/instances/{linode_id}/backups/{backup_id}",
);
const RESTORE: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "backups.restore",
    "linode/instances/{linode_id}/backups/{backup_id}/restore",
);

/// Operations on the backups of one instance.
#[derive(Clone, Debug)]
pub struct Backups<'a> {
    client: &'a LinodeClient,
    linode_id: String,
}

impl<'a> Backups<'a> {
    pub(crate) const fn new(client: &'a LinodeClient, linode_id: String) -> Self {
        Self { client, linode_id }
    }

    /// Lists automatic backups and snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn list(&self) -> Result<Outcome, LinodeError> {
        self.client
            .call(&LIST, &[("linode_id", &self.linode_id)], None)
    }

    /// Enables the backup service.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn enable(&self) -> Result<Outcome, LinodeError> {
        self.client
            .call(&ENABLE, &[("linode_id", &self.linode_id)], None)
    }

    /// Cancels the backup service. Existing backups are removed.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn cancel(&self) -> Result<Outcome, LinodeError> {
        self.client
            .call(&CANCEL, &[("linode_id", &self.linode_id)], None)
    }

    /// Fetches one backup.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn get(&self, backup_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(
            &GET,
            &[("linode_id", &self.linode_id), ("backup_id", &backup_id)],
            None,
        )
    }

    /// Restores a backup onto `target_linode_id`, which may be this instance
    /// or another one. Pass `overwrite` in `params` to replace its disks.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn restore(
        &self,
        backup_id: impl Display,
        target_linode_id: u64,
        params: Params,
    ) -> Result<Outcome, LinodeError> {
        let body = params.merge_into(required([("linode_id", json!(target_linode_id))]));
        self.client.call(
            &RESTORE,
            &[("linode_id", &self.linode_id), ("backup_id", &backup_id)],
            Some(body),
        )
    }

    /// Takes a manual snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn create_snapshot(&self, label: &str) -> Result<Outcome, LinodeError> {
        self.client.call(
            &SNAPSHOT,
            &[("linode_id", &self.linode_id)],
            Some(json!({ "label": label })),
        )
    }
}
