// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod range_sync_impl;
pub mod range_value;

// Re-export.
pub use range_sync_impl::*;
pub use range_value::*;
