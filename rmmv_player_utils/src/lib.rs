//module tree
mod cli;
mod message_channel;
mod script_source;

//API exports
pub use crate::cli::*;
pub use crate::message_channel::*;
pub use crate::script_source::*;
