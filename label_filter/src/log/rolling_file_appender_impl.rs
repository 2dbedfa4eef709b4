// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_appender::rolling::RollingFileAppender;

/// Creates a file appender that never rolls over, writing to `path_str`. The parent
/// folder must exist.
///
/// # Errors
///
/// Returns an error if the parent folder or the file name can't be derived from
/// `path_str`.
pub fn try_create_file_appender(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = match path.parent() {
        Some(it) if it.as_os_str().is_empty() => PathBuf::from("."),
        Some(it) => it.to_path_buf(),
        None => {
            return Err(miette::miette!(
                "Can't access parent folder of {}. It might not exist.",
                path.display()
            ));
        }
    };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Can't access file name in {}.", path.display())
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
