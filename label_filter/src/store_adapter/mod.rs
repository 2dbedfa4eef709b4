// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod external_store_adapter;
pub mod filter_store;
pub mod filter_view;
pub mod reactive_cell;
pub mod results_panel;

// Re-export.
pub use external_store_adapter::*;
pub use filter_store::*;
pub use filter_view::*;
pub use reactive_cell::*;
pub use results_panel::*;
