// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Log every transition of the [`crate::FilterMachine`] (event, mode before and after).
pub const DEBUG_LABEL_FILTER: bool = true;

/// Log every inbound cell notification drained by [`crate::ExternalStoreAdapter`].
pub const DEBUG_LABEL_FILTER_SYNC: bool = false;
