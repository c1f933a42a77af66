//module tree
mod bootstrap_plugin;
mod simulated_view;

//API exports
pub use crate::bootstrap_plugin::*;
pub use crate::simulated_view::*;
