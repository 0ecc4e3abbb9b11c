// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dropwise_session::SessionError;

/// Why a drag could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    /// The session store refused the new drag.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// The host could not measure the grabbed node.
    #[error("the dragged node has no bounding rectangle")]
    Unmeasurable,
}
