// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::NodeId;

/// Errors raised while building or navigating a [`Hierarchy`](crate::Hierarchy).
#[derive(Debug, thiserror::Error)]
pub enum HierarchyError {
    /// The hierarchy document could not be parsed.
    #[error("invalid hierarchy document: {0}")]
    Json(#[from] serde_json::Error),
    /// The hierarchy document could not be read.
    #[error("failed to read hierarchy document: {0}")]
    Io(#[from] std::io::Error),
    /// The document holds more nodes than a [`NodeId`] can address.
    #[error("hierarchy exceeds {max} nodes")]
    TooManyNodes {
        /// Maximum number of addressable nodes.
        max: u32,
    },
    /// The id does not belong to this hierarchy.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),
    /// The node is not a direct child of the current focus.
    #[error("{child:?} is not a child of {focus:?}")]
    NotAChild {
        /// Current focus.
        focus: NodeId,
        /// Rejected node.
        child: NodeId,
    },
}
