// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod filter_event;
pub mod filter_key;
pub mod filter_machine_impl;
pub mod filter_state;
pub mod filter_transition;
pub mod validation_error;

// Re-export.
pub use filter_event::*;
pub use filter_key::*;
pub use filter_machine_impl::*;
pub use filter_state::*;
pub use filter_transition::*;
pub use validation_error::*;
