// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod search_results;
pub mod selection;
pub mod vocabulary;

// Re-export.
pub use search_results::*;
pub use selection::*;
pub use vocabulary::*;
