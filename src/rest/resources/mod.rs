//! Resource handles.
//!
//! Each handle borrows a [`LinodeClient`](crate::LinodeClient) and groups
//! the operations of one Linode resource. Handles for resources that belong
//! to an instance carry its id:
//!
//! ```rust,ignore
//! client.instances().reboot(123, Params::new())?;
//! client.disks(123).resize(456, 30_000)?;
//! client.backups(123).create_snapshot("pre-upgrade")?;
//! ```
//!
//! | Handle | Resource |
//! |---|---|
//! | [`Instances`] | `linode/instances` |
//! | [`Backups`] | `linode/instances/{id}/backups` |
//! | [`Configs`] | `linode/instances/{id}/configs` |
//! | [`Disks`] | `linode/instances/{id}/disks` |
//! | [`Ips`] | `linode/instances/{id}/ips` |
//! | [`Images`] | `images` |
//! | [`Kernels`] | `linode/kernels` |
//! | [`Firewalls`] | `networking/firewalls` |

mod backups;
mod configs;
mod disks;
mod firewalls;
mod images;
mod instances;
mod ips;
mod kernels;

pub use backups::Backups;
pub use configs::Configs;
pub use disks::Disks;
pub use firewalls::Firewalls;
pub use images::Images;
pub use instances::Instances;
pub use ips::Ips;
pub use kernels::Kernels;
