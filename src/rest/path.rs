//! Endpoint paths for Linode resources.
//!
//! Each operation is described by a [`ResourcePath`]: an HTTP method, a path
//! template relative to the versioned API root, and a name used in logs.
//! Placeholders in the template are written `{name}` and filled in with
//! [`build_path`].
//!
//! # Example
//!
//! ```rust
//! use linode_api::rest::{build_path, ResourcePath};
//! use linode_api::HttpMethod;
//!
//! const GET_DISK: ResourcePath = ResourcePath::new(
//!     HttpMethod::Get,
//!     "disks.get",
//!     "linode/instances/{linode_id}/disks/{disk_id}",
//! );
//!
//! let path = build_path(GET_DISK.template, &[("linode_id", &123), ("disk_id", &"456")]);
//! assert_eq!(path, "linode/instances/123/disks/456");
//! ```

use std::fmt::Display;

use crate::clients::HttpMethod;

/// One endpoint of the Linode API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// HTTP method for this endpoint.
    pub http_method: HttpMethod,
    /// Operation name, e.g. `instances.delete`.
    pub operation: &'static str,
    /// Path template, e.g. `linode/instances/{linode_id}`.
    pub template: &'static str,
}

impl ResourcePath {
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: &'static str,
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            template,
        }
    }

    /// Fills in this path's template.
    #[must_use]
    pub fn resolve(&self, ids: &[(&str, &dyn Display)]) -> String {
        build_path(self.template, ids)
    }
}

/// Replaces `{name}` placeholders in `template` with the matching ids.
///
/// The template is scanned once, so substituted text is never expanded
/// again. Placeholders without a matching id are left as they are.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &dyn Display)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match ids.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => result.push_str(&value.to_string()),
                    None => result.push_str(&rest[start..=start + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_path_substitutes_ids() {
        let path = build_path(
            "linode/instances/{linode_id}/backups/{backup_id}/restore",
            &[("linode_id", &123), ("backup_id", &"456")],
        );
        assert_eq!(path, "linode/instances/123/backups/456/restore");
    }

    #[test]
    fn test_build_path_without_placeholders() {
        assert_eq!(build_path("linode/instances", &[]), "linode/instances");
    }

    #[test]
    fn test_build_path_leaves_unknown_placeholders() {
        let path = build_path("images/{image_id}", &[("linode_id", &1)]);
        assert_eq!(path, "images/{image_id}");
    }

    #[test]
    fn test_build_path_does_not_expand_substituted_ids() {
        let path = build_path(
            "linode/instances/{linode_id}/disks/{disk_id}",
            &[("linode_id", &"{disk_id}"), ("disk_id", &9)],
        );
        assert_eq!(path, "linode/instances/{disk_id}/disks/9");
    }

    #[test]
    fn test_build_path_repeated_and_unclosed_placeholders() {
        let path = build_path("{id}/{id}/{tail", &[("id", &7)]);
        assert_eq!(path, "7/7/{tail");
    }

    #[test]
    fn test_resolve_uses_template() {
        const DELETE: ResourcePath = ResourcePath::new(
            HttpMethod::Delete,
            "instances.delete",
            "linode/instances/{linode_id}",
        );
        assert_eq!(DELETE.resolve(&[("linode_id", &12345)]), "linode/instances/12345");
        assert_eq!(DELETE.http_method, HttpMethod::Delete);
    }
}
