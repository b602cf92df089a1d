//! Registration of the exposed types with a declarative UI host.
//!
//! Hosts implement [`HostRegistry`] for whatever binding mechanism they use.

use crate::error::{QuotaError, Result};

/// Import URI the panel markup uses.
pub const PLUGIN_URI: &str = "org.kde.plasma.private.diskquota";

pub const VERSION_MAJOR: u8 = 1;
pub const VERSION_MINOR: u8 = 0;

/// Types made visible to the host, in registration order.
pub const EXPOSED_TYPES: [&str; 2] = ["DiskQuota", "QuotaListModel"];

pub trait HostRegistry {
    fn register_type(&mut self, uri: &str, major: u8, minor: u8, name: &str) -> Result<()>;
}

/// Register the state object and the record list under `uri`.
pub fn register_types<R: HostRegistry + ?Sized>(uri: &str, registry: &mut R) -> Result<()> {
    if uri != PLUGIN_URI {
        return Err(QuotaError::host(format!(
            "unexpected plugin uri '{}', expected '{}'",
            uri, PLUGIN_URI
        )));
    }

    for name in EXPOSED_TYPES {
        registry.register_type(uri, VERSION_MAJOR, VERSION_MINOR, name)?;
    }
    Ok(())
}
