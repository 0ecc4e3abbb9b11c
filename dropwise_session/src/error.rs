// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rejected session transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A drag is already in flight; only one session may be active.
    #[error("a drag session is already active")]
    AlreadyActive,
}
