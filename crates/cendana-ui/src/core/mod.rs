//! Pure page-glue state modules, plus their DOM bindings on wasm.

pub mod alerts;
pub mod dates;
pub mod modal_stack;
pub mod roles;
pub mod store;
pub mod table;
pub mod text;

#[cfg(target_arch = "wasm32")]
pub mod dom;
