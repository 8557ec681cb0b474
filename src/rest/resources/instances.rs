//! Compute instance operations.
//!
//! Creating an instance first checks the region, plan type, and image against
//! the provider catalogs, in that order. The first unknown value fails with
//! [`LinodeError::ValidationFailed`] and nothing is created.

use std::fmt::Display;

use serde_json::json;

use crate::clients::HttpMethod;
use crate::rest::catalog::ensure_listed;
use crate::rest::client::LinodeClient;
use crate::rest::errors::LinodeError;
use crate::rest::normalize::Outcome;
use crate::rest::params::{required, Params};
use crate::rest::path::ResourcePath;

const LIST: ResourcePath =
    ResourcePath::new(HttpMethod::Get, "instances.list", "linode/instances");
const CREATE: ResourcePath =
    ResourcePath::new(HttpMethod::Post, "instances.create", "linode/instances");
const GET: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    "instances.get",
    "linode/instances/{linode_id}",
);
const UPDATE: ResourcePath = ResourcePath::new(
    HttpMethod::Put,
    "instances.update",
    "linode/instances/{linode_id}",
);
const DELETE: ResourcePath = ResourcePath::new(
    HttpMethod::Delete,
    "instances.delete",
    "linode/instances/{linode_id}",
);
const BOOT: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "instances.boot",
    "linode/instances/{linode_id}/boot",
);
const REBOOT: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "instances.reboot",
    "linode/instances/{linode_id}/reboot",
);
const SHUTDOWN: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "instances.shutdown",
    "linode/instances/{linode_id}/shutdown",
);
const RESET_PASSWORD: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "instances.reset_password",
    "linode/instances/{linode_id}/password",
);
const REBUILD: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "instances.rebuild",
    "linode/instances/{linode_id}/rebuild",
);
const CLONE: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "instances.clone",
    "linode/instances/{linode_id}/clone",
);
const RESIZE: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "instances.resize",
    "linode/instances/{linode_id}/resize",
);
const UPGRADE: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "instances.upgrade",
    "linode/instances/{linode_id}/mutate",
);
const STATS: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    "instances.stats",
    "linode/instances/{linode_id}/stats",
);

/// Operations on compute instances.
#[derive(Clone, Copy, Debug)]
pub struct Instances<'a> {
    client: &'a LinodeClient,
}

impl<'a> Instances<'a> {
    pub(crate) const fn new(client: &'a LinodeClient) -> Self {
        Self { client }
    }

    /// Lists the account's instances.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn list(&self) -> Result<Outcome, LinodeError> {
        self.client.call(&LIST, &[], None)
    }

    /// Creates an instance after checking region, type, and image against
    /// the catalogs.
    ///
    /// Optional fields such as `label`, `tags`, or `authorized_keys` go in
    /// `params`; falsy values are left out.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::ValidationFailed`] for the first argument not
    /// in its catalog, without sending the create request. Otherwise returns
    /// [`LinodeError`] if a catalog read or the create request fails.
    pub fn create(
        &self,
        region: &str,
        instance_type: &str,
        image: &str,
        root_pass: &str,
        params: Params,
    ) -> Result<Outcome, LinodeError> {
        let catalog = self.client.catalog();
        ensure_listed("region", region, &catalog.regions()?)?;
        ensure_listed("type", instance_type, &catalog.types()?)?;
        ensure_listed("image", image, &catalog.images(true)?)?;

        let body = params.merge_into(required([
            ("region", json!(region)),
            ("type", json!(instance_type)),
            ("image", json!(image)),
            ("root_pass", json!(root_pass)),
        ]));
        self.client.call(&CREATE, &[], Some(body))
    }

    /// Fetches one instance.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn get(&self, linode_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(&GET, &[("linode_id", &linode_id)], None)
    }

    /// Updates an instance. `params` is sent as given, falsy values included.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn update(&self, linode_id: impl Display, params: Params) -> Result<Outcome, LinodeError> {
        self.client
            .call(&UPDATE, &[("linode_id", &linode_id)], Some(params.into_body()))
    }

    /// Deletes an instance.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn delete(&self, linode_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(&DELETE, &[("linode_id", &linode_id)], None)
    }

    /// Boots an instance, optionally into a given `config_id`.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn boot(&self, linode_id: impl Display, params: Params) -> Result<Outcome, LinodeError> {
        let body = params.merge_into(serde_json::Map::new());
        self.client.call(&BOOT, &[("linode_id", &linode_id)], Some(body))
    }

    /// Reboots an instance, optionally into a given `config_id`.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn reboot(&self, linode_id: impl Display, params: Params) -> Result<Outcome, LinodeError> {
        let body = params.merge_into(serde_json::Map::new());
        self.client.call(&REBOOT, &[("linode_id", &linode_id)], Some(body))
    }

    /// Shuts an instance down.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn shutdown(&self, linode_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(&SHUTDOWN, &[("linode_id", &linode_id)], None)
    }

    /// Sets a new root password. The instance must be powered off.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn reset_password(
        &self,
        linode_id: impl Display,
        root_pass: &str,
    ) -> Result<Outcome, LinodeError> {
        let body = json!({ "root_pass": root_pass });
        self.client
            .call(&RESET_PASSWORD, &[("linode_id", &linode_id)], Some(body))
    }

    /// Rebuilds an instance from `image`, erasing its disks.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn rebuild(
        &self,
        linode_id: impl Display,
        image: &str,
        root_pass: &str,
        params: Params,
    ) -> Result<Outcome, LinodeError> {
        let body = params.merge_into(required([
            ("image", json!(image)),
            ("root_pass", json!(root_pass)),
        ]));
        self.client.call(&REBUILD, &[("linode_id", &linode_id)], Some(body))
    }

    /// Clones an instance into a new or existing instance.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn clone_instance(
        &self,
        linode_id: impl Display,
        params: Params,
    ) -> Result<Outcome, LinodeError> {
        let body = params.merge_into(serde_json::Map::new());
        self.client.call(&CLONE, &[("linode_id", &linode_id)], Some(body))
    }

    /// Moves an instance to another plan type.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn resize(
        &self,
        linode_id: impl Display,
        instance_type: &str,
        params: Params,
    ) -> Result<Outcome, LinodeError> {
        let body = params.merge_into(required([("type", json!(instance_type))]));
        self.client.call(&RESIZE, &[("linode_id", &linode_id)], Some(body))
    }

    /// Upgrades an instance to the newest generation of its plan.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn upgrade(&self, linode_id: impl Display, params: Params) -> Result<Outcome, LinodeError> {
        let body = params.merge_into(serde_json::Map::new());
        self.client.call(&UPGRADE, &[("linode_id", &linode_id)], Some(body))
    }

    /// Fetches CPU, IO, and network statistics for the last 24 hours.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError`] if the request fails.
    pub fn stats(&self, linode_id: impl Display) -> Result<Outcome, LinodeError> {
        self.client.call(&STATS, &[("linode_id", &linode_id)], None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_with, RecordingTransport};
    use std::sync::Arc;

    fn transport_with_catalogs() -> Arc<RecordingTransport> {
        let transport = RecordingTransport::shared();
        transport.respond_with(
            HttpMethod::Get,
            "/regions",
            json!({"data": [{"id": "us-east"}, {"id": "eu-west"}]}),
        );
        transport.respond_with(
            HttpMethod::Get,
            "/linode/types",
            json!({"data": [{"id": "g6-nanode-1"}]}),
        );
        transport.respond_with(
            HttpMethod::Get,
            "/images",
            json!({"data": [{"id": "linode/debian12"}, {"id": "private/42"}]}),
        );
        transport
    }

    #[test]
    fn test_create_posts_after_catalog_checks() {
        let transport = transport_with_catalogs();
        transport.respond_with(
            HttpMethod::Post,
            "/linode/instances",
            json!({"id": 123, "label": "web-1"}),
        );
        let client = client_with(transport.clone());

        let outcome = client
            .instances()
            .create(
                "us-east",
                "g6-nanode-1",
                "private/42",
                "hunter22",
                Params::new().set("label", "web-1").set("booted", false),
            )
            .unwrap();

        assert_eq!(outcome.payload().unwrap()["id"], 123);
        let calls = transport.calls();
        assert_eq!(calls.len(), 4);
        assert!(calls[0].url.ends_with("/regions"));
        assert!(calls[1].url.ends_with("/linode/types"));
        assert!(calls[2].url.ends_with("/images"));
        assert_eq!(
            calls[3].body,
            Some(json!({
                "region": "us-east",
                "type": "g6-nanode-1",
                "image": "private/42",
                "root_pass": "hunter22",
                "label": "web-1"
            }))
        );
    }

    #[test]
    fn test_create_finds_private_image_on_later_catalog_page() {
        let transport = RecordingTransport::shared();
        transport.respond_with(
            HttpMethod::Get,
            "/regions",
            json!({"data": [{"id": "us-east"}], "page": 1, "pages": 1}),
        );
        transport.respond_with(
            HttpMethod::Get,
            "/linode/types",
            json!({"data": [{"id": "g6-nanode-1"}]}),
        );
        transport.respond_with(
            HttpMethod::Get,
            "/images",
            json!({"data": [{"id": "linode/debian12"}], "page": 1, "pages": 2}),
        );
        transport.respond_with(
            HttpMethod::Get,
            "/images?page=2",
            json!({"data": [{"id": "private/42"}], "page": 2, "pages": 2}),
        );
        let client = client_with(transport.clone());

        client
            .instances()
            .create("us-east", "g6-nanode-1", "private/42", "hunter22", Params::new())
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 5);
        assert!(calls[3].url.ends_with("/images?page=2"));
        assert_eq!(calls[4].method, HttpMethod::Post);
        assert!(calls[4].url.ends_with("/v4/linode/instances"));
        assert_eq!(calls[4].body.as_ref().unwrap()["image"], "private/42");
    }

    #[test]
    fn test_create_unknown_region_stops_before_post() {
        let transport = transport_with_catalogs();
        let client = client_with(transport.clone());

        let error = client
            .instances()
            .create("mars-1", "g6-nanode-1", "linode/debian12", "pw", Params::new())
            .unwrap_err();

        assert!(matches!(
            error,
            LinodeError::ValidationFailed { field: "region", .. }
        ));
        assert_eq!(transport.calls_with(HttpMethod::Post), 0);
        assert_eq!(transport.calls().len(), 1);
    }

    #[test]
    fn test_create_unknown_type_checked_after_region() {
        let transport = transport_with_catalogs();
        let client = client_with(transport.clone());

        let error = client
            .instances()
            .create("eu-west", "g1-huge", "linode/debian12", "pw", Params::new())
            .unwrap_err();

        assert_eq!(error.to_string(), "Type 'g1-huge' not found or not available.");
        assert_eq!(transport.calls().len(), 2);
    }

    #[test]
    fn test_create_unknown_image_sends_no_post() {
        let transport = transport_with_catalogs();
        let client = client_with(transport.clone());

        let error = client
            .instances()
            .create("eu-west", "g6-nanode-1", "linode/arch", "pw", Params::new())
            .unwrap_err();

        assert!(matches!(error, LinodeError::ValidationFailed { field: "image", .. }));
        assert_eq!(transport.calls_with(HttpMethod::Post), 0);
    }

    #[test]
    fn test_delete_sends_authenticated_delete() {
        let transport = RecordingTransport::shared();
        let client = client_with(transport.clone());

        let outcome = client.instances().delete(12345).unwrap();

        assert_eq!(outcome, Outcome::Success);
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, HttpMethod::Delete);
        assert!(calls[0].url.ends_with("/v4/linode/instances/12345"));
        assert_eq!(
            calls[0].headers.get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
    }

    #[test]
    fn test_shutdown_is_authenticated() {
        let transport = RecordingTransport::shared();
        let client = client_with(transport.clone());

        client.instances().shutdown("77").unwrap();

        let calls = transport.calls();
        assert!(calls[0].url.ends_with("linode/instances/77/shutdown"));
        assert!(calls[0].headers.contains_key("Authorization"));
    }

    #[test]
    fn test_update_keeps_falsy_fields() {
        let transport = RecordingTransport::shared();
        let client = client_with(transport.clone());

        client
            .instances()
            .update(5, Params::new().set("label", "db").set("watchdog_enabled", false))
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Put);
        assert_eq!(
            calls[0].body,
            Some(json!({"label": "db", "watchdog_enabled": false}))
        );
    }

    #[test]
    fn test_rebuild_and_resize_bodies() {
        let transport = RecordingTransport::shared();
        let client = client_with(transport.clone());

        client
            .instances()
            .rebuild(5, "linode/debian12", "pw", Params::new().set("stackscript_id", 0))
            .unwrap();
        client
            .instances()
            .resize(5, "g6-standard-2", Params::new().set("allow_auto_disk_resize", true))
            .unwrap();

        let calls = transport.calls();
        assert_eq!(
            calls[0].body,
            Some(json!({"image": "linode/debian12", "root_pass": "pw"}))
        );
        assert_eq!(
            calls[1].body,
            Some(json!({"type": "g6-standard-2", "allow_auto_disk_resize": true}))
        );
    }

    #[test]
    fn test_action_paths() {
        let transport = RecordingTransport::shared();
        let client = client_with(transport.clone());
        let instances = client.instances();

        instances.boot(1, Params::new().set("config_id", 9)).unwrap();
        instances.reboot(1, Params::new()).unwrap();
        instances.reset_password(1, "pw").unwrap();
        instances
            .clone_instance(1, Params::new().set("region", "eu-west"))
            .unwrap();
        instances.upgrade(1, Params::new()).unwrap();
        instances.stats(1).unwrap();
        instances.get(1).unwrap();
        instances.list().unwrap();

        let urls: Vec<String> = transport.calls().into_iter().map(|c| c.url).collect();
        let suffixes = [
            "linode/instances/1/boot",
            "linode/instances/1/reboot",
            "linode/instances/1/password",
            "linode/instances/1/clone",
            "linode/instances/1/mutate",
            "linode/instances/1/stats",
            "linode/instances/1",
            "linode/instances",
        ];
        for (url, suffix) in urls.iter().zip(suffixes) {
            assert!(url.ends_with(suffix), "{url} should end with {suffix}");
        }

        let calls = transport.calls();
        assert_eq!(calls[0].body, Some(json!({"config_id": 9})));
        assert_eq!(calls[1].body, Some(json!({})));
        assert_eq!(calls[2].body, Some(json!({"root_pass": "pw"})));
    }

    #[test]
    fn test_api_errors_surface_as_request_failed() {
        let transport = RecordingTransport::shared();
        transport.respond_with_status(
            HttpMethod::Get,
            "linode/instances/404",
            404,
            json!({"errors": [{"reason": "Not found"}]}),
        );
        let client = client_with(transport);

        let error = client.instances().get(404).unwrap_err();
        assert!(matches!(error, LinodeError::RequestFailed(_)));
        assert_eq!(error.reasons(), vec!["Not found"]);
    }
}
