// src/state/mod.rs
//
// Declarative state consumed by the host.
//
// Parameter and port declarations describe a module type to the host;
// module state is what survives a host save/load. None of this is
// touched on the audio thread.

mod model_info;
mod module_state;
mod param_info;

pub use model_info::*;
pub use module_state::*;
pub use param_info::*;
