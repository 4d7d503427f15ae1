// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus holder: which node is centered, tracked as an explicit root→focus path.
//!
//! ## Usage
//!
//! 1) Create a [`FocusPath`] at the hierarchy root.
//! 2) Call [`FocusPath::descend`] when the user picks one of the focus's children.
//! 3) Call [`FocusPath::ascend`], [`FocusPath::home`] or [`FocusPath::truncate_to`]
//!    for "back", "home" and breadcrumb navigation.
//! 4) Compare [`FocusPath::revision`] across frames to know when to re-lay out.
//!
//! ## Minimal example
//!
//! ```
//! use understory_hierarchy::{FocusPath, Hierarchy, NodeSpec};
//!
//! let h = Hierarchy::from_spec(NodeSpec::branch(
//!     "Countries",
//!     [NodeSpec::branch("Kazakhstan", [NodeSpec::leaf("Bolat")])],
//! ))
//! .unwrap();
//! let kz = h.find_path(["Kazakhstan"]).unwrap();
//!
//! let mut focus = FocusPath::new(h.root());
//! focus.descend(&h, kz).unwrap();
//! assert_eq!(focus.depth(), 1);
//! assert_eq!(focus.breadcrumbs(&h), ["Countries", "Kazakhstan"]);
//!
//! assert_eq!(focus.ascend(), Some(h.root()));
//! // Back from the root does nothing.
//! assert_eq!(focus.ascend(), None);
//! ```

use smallvec::{SmallVec, smallvec};

use crate::{Hierarchy, HierarchyError, NodeId};

/// Root→focus path. Never empty: the first entry is always the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusPath {
    path: SmallVec<[NodeId; 8]>,
    revision: u64,
}

impl FocusPath {
    /// Starts focused on `root`.
    #[must_use]
    pub fn new(root: NodeId) -> Self {
        Self {
            path: smallvec![root],
            revision: 0,
        }
    }

    /// The currently focused node.
    #[must_use]
    pub fn focus(&self) -> NodeId {
        self.path[self.path.len() - 1]
    }

    /// The root this path starts from.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.path[0]
    }

    /// Ancestor hops from the root to the focus.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    /// The full root→focus path.
    #[must_use]
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Returns `true` when the root is focused.
    #[must_use]
    pub fn is_at_root(&self) -> bool {
        self.path.len() == 1
    }

    /// Counter that bumps whenever the focus changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Moves focus down to `child`, which must be a child of the current focus.
    pub fn descend(&mut self, hierarchy: &Hierarchy, child: NodeId) -> Result<(), HierarchyError> {
        let focus = self.focus();
        if !hierarchy.contains(child) {
            return Err(HierarchyError::UnknownNode(child));
        }
        if hierarchy.parent(child) != Some(focus) {
            return Err(HierarchyError::NotAChild { focus, child });
        }
        self.path.push(child);
        self.bump();
        log::debug!("focus descended to {child:?} (depth {})", self.depth());
        Ok(())
    }

    /// Moves focus up one level, returning the new focus.
    ///
    /// At the root this is a no-op and returns `None`.
    pub fn ascend(&mut self) -> Option<NodeId> {
        if self.is_at_root() {
            return None;
        }
        self.path.pop();
        self.bump();
        let focus = self.focus();
        log::debug!("focus ascended to {focus:?} (depth {})", self.depth());
        Some(focus)
    }

    /// Returns focus to the root. Returns `true` if the focus changed.
    pub fn home(&mut self) -> bool {
        self.truncate_to(0)
    }

    /// Cuts the path back so that the node at `depth` is focused.
    ///
    /// Depths at or beyond the current focus leave the path untouched.
    /// Returns `true` if the focus changed.
    pub fn truncate_to(&mut self, depth: usize) -> bool {
        if depth >= self.depth() {
            return false;
        }
        self.path.truncate(depth + 1);
        self.bump();
        log::debug!("focus moved to {:?} (depth {depth})", self.focus());
        true
    }

    /// Focuses an arbitrary node, rebuilding the path from the parent table.
    pub fn focus_on(&mut self, hierarchy: &Hierarchy, id: NodeId) -> Result<(), HierarchyError> {
        if id == self.focus() {
            return Ok(());
        }
        let path = hierarchy.path_to(id)?;
        self.path = path.into_iter().collect();
        self.bump();
        log::debug!("focus jumped to {id:?} (depth {})", self.depth());
        Ok(())
    }

    /// Display names along the path, root first.
    #[must_use]
    pub fn breadcrumbs<'h>(&self, hierarchy: &'h Hierarchy) -> Vec<&'h str> {
        self.path.iter().map(|&id| hierarchy.name(id)).collect()
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::FocusPath;
    use crate::{Hierarchy, HierarchyError, NodeSpec};

    fn sample() -> Hierarchy {
        Hierarchy::from_spec(NodeSpec::branch(
            "Countries",
            [
                NodeSpec::branch(
                    "Kyrgyzstan",
                    [NodeSpec::branch(
                        "Aitbek",
                        [NodeSpec::leaf("Erlan"), NodeSpec::leaf("Einar")],
                    )],
                ),
                NodeSpec::leaf("Russia"),
            ],
        ))
        .unwrap()
    }

    #[test]
    fn starts_at_root() {
        let h = sample();
        let focus = FocusPath::new(h.root());
        assert_eq!(focus.focus(), h.root());
        assert_eq!(focus.depth(), 0);
        assert!(focus.is_at_root());
        assert_eq!(focus.revision(), 0);
    }

    #[test]
    fn descend_tracks_depth_and_breadcrumbs() {
        let h = sample();
        let kg = h.find_path(["Kyrgyzstan"]).unwrap();
        let aitbek = h.find_path(["Kyrgyzstan", "Aitbek"]).unwrap();
        let mut focus = FocusPath::new(h.root());

        focus.descend(&h, kg).unwrap();
        focus.descend(&h, aitbek).unwrap();

        assert_eq!(focus.focus(), aitbek);
        assert_eq!(focus.depth(), 2);
        assert_eq!(focus.depth(), h.depth(aitbek) as usize);
        assert_eq!(focus.breadcrumbs(&h), ["Countries", "Kyrgyzstan", "Aitbek"]);
        assert_eq!(focus.revision(), 2);
    }

    #[test]
    fn descend_rejects_non_children() {
        let h = sample();
        let aitbek = h.find_path(["Kyrgyzstan", "Aitbek"]).unwrap();
        let mut focus = FocusPath::new(h.root());

        let err = focus.descend(&h, aitbek).unwrap_err();
        assert!(matches!(err, HierarchyError::NotAChild { .. }));
        assert_eq!(focus.focus(), h.root());
        assert_eq!(focus.revision(), 0);
    }

    #[test]
    fn ascend_at_root_is_noop() {
        let h = sample();
        let mut focus = FocusPath::new(h.root());
        assert_eq!(focus.ascend(), None);
        assert_eq!(focus.revision(), 0);
    }

    #[test]
    fn home_and_truncate() {
        let h = sample();
        let erlan = h.find_path(["Kyrgyzstan", "Aitbek", "Erlan"]).unwrap();
        let kg = h.find_path(["Kyrgyzstan"]).unwrap();
        let mut focus = FocusPath::new(h.root());
        focus.focus_on(&h, erlan).unwrap();
        assert_eq!(focus.depth(), 3);

        assert!(focus.truncate_to(1));
        assert_eq!(focus.focus(), kg);
        assert!(!focus.truncate_to(5));

        assert!(focus.home());
        assert!(focus.is_at_root());
        assert!(!focus.home());
    }

    #[test]
    fn focus_on_unknown_node_fails() {
        let h = sample();
        let other = Hierarchy::from_spec(NodeSpec::branch(
            "big",
            (0..20).map(|i| NodeSpec::leaf(format!("n{i}"))),
        ))
        .unwrap();
        let far = other.find_path(["n19"]).unwrap();
        let mut focus = FocusPath::new(h.root());
        assert!(matches!(
            focus.focus_on(&h, far),
            Err(HierarchyError::UnknownNode(_))
        ));
    }
}
