//! UEFI Snake (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` so binaries, integration
//! tests and benches can reach everything through `uefi_snake::*`.

pub use uefi_snake_core as core;
pub use uefi_snake_engine as engine;
pub use uefi_snake_gfx as gfx;
pub use uefi_snake_input as input;
pub use uefi_snake_term as term;
pub use uefi_snake_types as types;
