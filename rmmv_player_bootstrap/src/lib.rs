//! Capability negotiation for an embedded RPG Maker MV player.
//!
//! A probe page is loaded into the host's embedded view, feature detection reports back through a one-shot
//! bridge object, and then the real game is loaded with query flags that reflect the report.

//module tree
mod bootstrap_config;
mod bridge_controller;
mod bridge_token;
mod capability_report;
mod embedded_view;
mod launch;
mod platform;
mod probe_request;
mod query_composer;
mod view_context;
mod view_task;

//API exports
pub use crate::bootstrap_config::*;
pub use crate::bridge_controller::*;
pub use crate::bridge_token::*;
pub use crate::capability_report::*;
pub use crate::embedded_view::*;
pub use crate::launch::*;
pub use crate::platform::*;
pub use crate::probe_request::*;
pub use crate::query_composer::*;
pub use crate::view_context::*;
pub use crate::view_task::*;
