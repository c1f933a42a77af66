//local shortcuts

//third-party shortcuts
use serde::{Deserialize, Serialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// First platform level where script-callable bridge objects can be trusted.
pub const DEFAULT_MIN_BRIDGE_LEVEL: u32 = 17;

//-------------------------------------------------------------------------------------------------------------------

/// Capability level of the host platform (e.g. an OS API level).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlatformLevel(pub u32);

impl PlatformLevel
{
    pub fn supports_bridge(&self, min_bridge_level: u32) -> bool
    {
        self.0 >= min_bridge_level
    }
}

//-------------------------------------------------------------------------------------------------------------------
