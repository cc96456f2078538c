//! The authenticated actor behind a request.

use crate::{RegNo, SiteRole};
use serde::{Deserialize, Serialize};

/// An authenticated user performing an operation.
///
/// Always resolved server-side from a session token; client-supplied
/// identity claims are never trusted for authorization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub reg_no: RegNo,
    pub role: SiteRole,
}

impl Actor {
    pub fn new(reg_no: impl Into<RegNo>, role: SiteRole) -> Self {
        Self {
            reg_no: reg_no.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
