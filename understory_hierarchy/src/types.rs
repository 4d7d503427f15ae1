// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the hierarchy: node identifiers, contact metadata, and nodes.

/// Identifier for a node in a [`Hierarchy`](crate::Hierarchy).
///
/// This is a small, copyable handle into the hierarchy's node arena. Ids are
/// assigned in depth-first pre-order when the hierarchy is built, so the root
/// is always the first id and every parent precedes its children.
///
/// Because a hierarchy is immutable once built, an id stays valid for the
/// lifetime of the hierarchy that produced it. Ids from one hierarchy carry no
/// meaning in another.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw arena index of this id.
    ///
    /// Useful as a stable key for rendering lists across frames.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Optional display-only contact details attached to a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    /// E-mail address, if known.
    pub email: Option<String>,
    /// Phone number, if known.
    pub phone: Option<String>,
}

impl Contact {
    /// Builds a contact record from raw optional strings.
    ///
    /// Blank values and the literal placeholder `"null"` are treated as absent.
    /// Returns `None` when neither field survives.
    #[must_use]
    pub fn from_raw(email: Option<String>, phone: Option<String>) -> Option<Self> {
        let email = email.and_then(normalize_field);
        let phone = phone.and_then(normalize_field);
        if email.is_none() && phone.is_none() {
            None
        } else {
            Some(Self { email, phone })
        }
    }
}

fn normalize_field(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(String::from(trimmed))
    }
}

/// One entity in the drill-down tree.
#[derive(Clone, Debug)]
pub struct HierarchyNode {
    pub(crate) name: String,
    pub(crate) contact: Option<Contact>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) depth: u32,
}

impl HierarchyNode {
    /// Display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact metadata, if any.
    #[must_use]
    pub fn contact(&self) -> Option<&Contact> {
        self.contact.as_ref()
    }

    /// Parent id; `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in data order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns `true` if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of ancestor hops from the root.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Relative sizing weight: the child count, floored at `1`.
    ///
    /// Leaves weigh `1`, same as a node with a single child.
    #[must_use]
    pub fn weight(&self) -> u32 {
        u32::try_from(self.children.len())
            .unwrap_or(u32::MAX)
            .max(1)
    }
}
