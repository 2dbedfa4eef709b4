// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Field name reported in every [`ValidationError`] produced by the label filter.
pub const VALIDATION_ERROR_LABEL: &str = "label";

/// Identity of one rejected commit. A fresh one is generated for every rejection, even
/// if the message text is the same as the previous one, so the view can tell "a new
/// error occurred" apart from "the same error is still showing".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorId(Uuid);

impl ErrorId {
    #[must_use]
    pub fn new_v4() -> Self { Self(Uuid::new_v4()) }
}

impl From<Uuid> for ErrorId {
    fn from(it: Uuid) -> Self { Self(it) }
}

impl Display for ErrorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

/// Transient record of a commit whose value is not in the vocabulary. It lives in the
/// machine context until the next `EDIT`, `CHANGE`, `BLUR` or successful `COMMIT`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub label: String,
    pub message: String,
    pub id: ErrorId,
}

impl ValidationError {
    /// The message quotes an empty value as `""` so it is still visible.
    #[must_use]
    pub fn does_not_exist(value: &str, id: ErrorId) -> Self {
        let shown = if value.is_empty() { r#""""# } else { value };
        Self {
            label: VALIDATION_ERROR_LABEL.to_string(),
            message: format!("{shown} does not exist"),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn message_for_value() {
        let it = ValidationError::does_not_exist("do", ErrorId::new_v4());
        assert_eq2!(it.label, "label");
        assert_eq2!(it.message, "do does not exist");
    }

    #[test]
    fn message_for_empty_value() {
        let it = ValidationError::does_not_exist("", ErrorId::new_v4());
        assert_eq2!(it.message, r#""" does not exist"#);
    }

    #[test]
    fn fresh_ids_differ() {
        assert_ne!(ErrorId::new_v4(), ErrorId::new_v4());
    }
}
