// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable node arena and the document form it is built from.

use std::io::Read;

use hashbrown::HashMap;
use serde::Deserialize;

use crate::{Contact, HierarchyError, HierarchyNode, NodeId};

/// Owned, nested description of a hierarchy, as supplied by a data provider.
///
/// This is the document shape accepted by [`Hierarchy::from_json_str`]:
///
/// ```json
/// { "name": "Countries", "children": [ { "name": "Kyrgyzstan", "email": "…" } ] }
/// ```
///
/// `children`, `email` and `phone` may be omitted.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NodeSpec {
    /// Display label.
    pub name: String,
    /// Ordered children.
    #[serde(default)]
    pub children: Vec<NodeSpec>,
    /// Optional e-mail metadata.
    #[serde(default)]
    pub email: Option<String>,
    /// Optional phone metadata.
    #[serde(default)]
    pub phone: Option<String>,
}

impl NodeSpec {
    /// A node with no children and no contact details.
    #[must_use]
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A node with the given children.
    #[must_use]
    pub fn branch(name: impl Into<String>, children: impl IntoIterator<Item = Self>) -> Self {
        Self {
            name: name.into(),
            children: children.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Attaches contact details, replacing any existing ones.
    #[must_use]
    pub fn with_contact(mut self, email: Option<&str>, phone: Option<&str>) -> Self {
        self.email = email.map(String::from);
        self.phone = phone.map(String::from);
        self
    }
}

/// Siblings sharing the exact same display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameCollision {
    /// Parent whose children collide.
    pub parent: NodeId,
    /// The shared name.
    pub name: String,
    /// Every sibling carrying that name, in data order.
    pub nodes: Vec<NodeId>,
}

/// Immutable drill-down tree.
///
/// Nodes own their children by id; the upward direction is an explicit
/// parent table, so the structure never contains reference cycles. The tree
/// always has a root.
#[derive(Clone, Debug)]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
}

impl Hierarchy {
    /// Builds a hierarchy from a nested document.
    ///
    /// Ids are assigned in depth-first pre-order. Exact duplicate sibling
    /// names are allowed but logged; see [`Hierarchy::sibling_name_collisions`].
    pub fn from_spec(spec: NodeSpec) -> Result<Self, HierarchyError> {
        let mut nodes: Vec<HierarchyNode> = Vec::new();
        let mut stack: Vec<(NodeSpec, Option<NodeId>, u32)> = vec![(spec, None, 0)];

        while let Some((spec, parent, depth)) = stack.pop() {
            let id = u32::try_from(nodes.len())
                .map(NodeId)
                .map_err(|_| HierarchyError::TooManyNodes { max: u32::MAX })?;
            let NodeSpec {
                name,
                children,
                email,
                phone,
            } = spec;
            nodes.push(HierarchyNode {
                name,
                contact: Contact::from_raw(email, phone),
                parent,
                children: Vec::with_capacity(children.len()),
                depth,
            });
            if let Some(parent) = parent {
                nodes[parent.idx()].children.push(id);
            }
            // Reverse so the first child is popped (and numbered) first.
            for child in children.into_iter().rev() {
                stack.push((child, Some(id), depth + 1));
            }
        }

        let hierarchy = Self { nodes };
        for collision in hierarchy.sibling_name_collisions() {
            log::warn!(
                "{} siblings under {:?} share the name {:?}",
                collision.nodes.len(),
                hierarchy.nodes[collision.parent.idx()].name,
                collision.name
            );
        }
        log::debug!("built hierarchy with {} nodes", hierarchy.len());
        Ok(hierarchy)
    }

    /// Parses a JSON document into a hierarchy.
    pub fn from_json_str(json: &str) -> Result<Self, HierarchyError> {
        let spec: NodeSpec = serde_json::from_str(json)?;
        Self::from_spec(spec)
    }

    /// Reads and parses a JSON document into a hierarchy.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, HierarchyError> {
        let spec: NodeSpec = serde_json::from_reader(reader)?;
        Self::from_spec(spec)
    }

    /// The root node id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a hierarchy has at least a root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates every node id in pre-order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        // Construction guarantees the node count fits in a `u32`.
        let len = u32::try_from(self.nodes.len()).unwrap_or(u32::MAX);
        (0..len).map(NodeId)
    }

    /// Returns `true` if `id` belongs to this hierarchy.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.idx() < self.nodes.len()
    }

    /// Looks up a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&HierarchyNode> {
        self.nodes.get(id.idx())
    }

    /// Looks up a node, reporting unknown ids as an error.
    pub fn node(&self, id: NodeId) -> Result<&HierarchyNode, HierarchyError> {
        self.get(id).ok_or(HierarchyError::UnknownNode(id))
    }

    /// Children of `id`; empty for leaves and unknown ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[][..], HierarchyNode::children)
    }

    /// Parent of `id`; `None` for the root and unknown ids.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(HierarchyNode::parent)
    }

    /// Relative sizing weight of `id`; see [`HierarchyNode::weight`].
    ///
    /// Unknown ids weigh `1`.
    #[must_use]
    pub fn weight(&self, id: NodeId) -> u32 {
        self.get(id).map_or(1, HierarchyNode::weight)
    }

    /// Depth of `id` below the root; unknown ids report `0`.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> u32 {
        self.get(id).map_or(0, HierarchyNode::depth)
    }

    /// Display name of `id`; unknown ids report an empty string.
    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        self.get(id).map_or("", HierarchyNode::name)
    }

    /// Iterates from `id` up to the root, `id` first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let start = self.contains(id).then_some(id);
        std::iter::successors(start, |&cur| self.parent(cur))
    }

    /// Root→`id` path, inclusive on both ends.
    pub fn path_to(&self, id: NodeId) -> Result<Vec<NodeId>, HierarchyError> {
        if !self.contains(id) {
            return Err(HierarchyError::UnknownNode(id));
        }
        let mut path: Vec<NodeId> = self.ancestors(id).collect();
        path.reverse();
        Ok(path)
    }

    /// First child of `parent` named exactly `name`.
    #[must_use]
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&c| self.name(c) == name)
    }

    /// Resolves a chain of names starting below the root.
    ///
    /// An empty chain resolves to the root.
    #[must_use]
    pub fn find_path<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Option<NodeId> {
        names
            .into_iter()
            .try_fold(self.root(), |cur, name| self.find_child(cur, name))
    }

    /// Reports groups of siblings that share an exact display name.
    ///
    /// Names are display labels, not identities: [`NodeId`] is the stable key.
    /// Hosts that key anything else on names can use this report to detect
    /// ambiguity. Near-duplicates (for example a short and a full name) are
    /// not collisions.
    #[must_use]
    pub fn sibling_name_collisions(&self) -> Vec<NameCollision> {
        let mut out = Vec::new();
        let mut groups: Vec<(&str, Vec<NodeId>)> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();
        for parent in self.ids() {
            let children = self.children(parent);
            if children.len() < 2 {
                continue;
            }
            groups.clear();
            slots.clear();
            for &child in children {
                let name = self.name(child);
                let slot = *slots.entry(name).or_insert_with(|| {
                    groups.push((name, Vec::new()));
                    groups.len() - 1
                });
                groups[slot].1.push(child);
            }
            out.extend(
                groups
                    .drain(..)
                    .filter(|(_, nodes)| nodes.len() > 1)
                    .map(|(name, nodes)| NameCollision {
                        parent,
                        name: String::from(name),
                        nodes,
                    }),
            );
        }
        out
    }
}
