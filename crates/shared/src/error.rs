use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field '{0}' (expected name, email or phoneNumber)")]
pub struct UnknownDraftField(pub String);
