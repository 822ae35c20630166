//! Identifier wrapper types shared across the workspace.

mod id_macro;

use id_macro::impl_id;
use serde::{Deserialize, Serialize};

/// Identifier of a persisted membership application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

/// Identifier of an account in the hosted auth service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

/// Client-generated token attached to every shaped submission record so the
/// backend can deduplicate rapid repeated submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdempotencyToken(String);

impl_id!(ApplicationId, UserId, IdempotencyToken);
