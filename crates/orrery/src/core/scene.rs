use crate::api::types::BodyId;
use crate::components::body::OrbitalBodySpec;

/// One body in the tree. `spec.children` is always empty here: nesting is
/// carried by `parent`/`children` ids instead.
#[derive(Debug, Clone)]
pub struct BodyNode {
    pub id: BodyId,
    pub spec: OrbitalBodySpec,
    pub parent: Option<BodyId>,
    pub children: Vec<BodyId>,
}

/// Flat arena of bodies forming a forest (normally a single sun root).
///
/// Storage order is a valid composition order: every parent is stored
/// before all of its descendants, and siblings keep their declaration order.
#[derive(Debug, Clone, Default)]
pub struct BodyTree {
    nodes: Vec<BodyNode>,
    roots: Vec<BodyId>,
}

impl BodyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten nested specs into a tree, depth first.
    pub fn from_roots(roots: impl IntoIterator<Item = OrbitalBodySpec>) -> Self {
        let mut tree = Self::new();
        for root in roots {
            tree.add_root(root);
        }
        tree
    }

    /// Insert a root body and, recursively, its nested children.
    pub fn add_root(&mut self, spec: OrbitalBodySpec) -> BodyId {
        let id = self.insert(None, spec);
        self.roots.push(id);
        id
    }

    /// Insert `spec` (and its nested children) under `parent`.
    /// Returns `None` if `parent` is not in this tree.
    pub fn add_child(&mut self, parent: BodyId, spec: OrbitalBodySpec) -> Option<BodyId> {
        if parent.index() >= self.nodes.len() {
            return None;
        }
        Some(self.insert(Some(parent), spec))
    }

    fn insert(&mut self, parent: Option<BodyId>, mut spec: OrbitalBodySpec) -> BodyId {
        let id = BodyId(self.nodes.len() as u32);
        let nested = std::mem::take(&mut spec.children);
        self.nodes.push(BodyNode {
            id,
            spec,
            parent,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.nodes[p.index()].children.push(id);
        }
        for child in nested {
            self.insert(Some(id), child);
        }
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&BodyNode> {
        self.nodes.get(id.index())
    }

    pub fn spec(&self, id: BodyId) -> Option<&OrbitalBodySpec> {
        self.get(id).map(|node| &node.spec)
    }

    pub fn parent(&self, id: BodyId) -> Option<BodyId> {
        self.get(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: BodyId) -> &[BodyId] {
        self.get(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    pub fn roots(&self) -> &[BodyId] {
        &self.roots
    }

    /// All bodies, parents before children.
    pub fn iter(&self) -> impl Iterator<Item = &BodyNode> {
        self.nodes.iter()
    }

    pub fn find_by_label(&self, label: &str) -> Option<&BodyNode> {
        self.nodes
            .iter()
            .find(|node| node.spec.label.as_deref() == Some(label))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::material::Material;

    fn body(label: &str) -> OrbitalBodySpec {
        OrbitalBodySpec::new(0.5, Material::default()).with_label(label)
    }

    fn sample_tree() -> BodyTree {
        let sun = body("Sun")
            .with_child(body("Mercury"))
            .with_child(body("Earth").with_child(body("Moon")))
            .with_child(body("Mars"));
        BodyTree::from_roots([sun])
    }

    #[test]
    fn nested_specs_flatten_parent_first() {
        let tree = sample_tree();
        let labels: Vec<_> = tree
            .iter()
            .map(|n| n.spec.label.clone().unwrap())
            .collect();
        assert_eq!(labels, ["Sun", "Mercury", "Earth", "Moon", "Mars"]);
        for node in tree.iter() {
            if let Some(parent) = node.parent {
                assert!(parent < node.id);
            }
            assert!(node.spec.children.is_empty());
        }
    }

    #[test]
    fn parent_and_children_links() {
        let tree = sample_tree();
        let earth = tree.find_by_label("Earth").unwrap().id;
        let moon = tree.find_by_label("Moon").unwrap().id;
        assert_eq!(tree.parent(moon), Some(earth));
        assert_eq!(tree.children(earth), &[moon]);
        assert_eq!(tree.roots(), &[BodyId(0)]);
        assert_eq!(tree.children(BodyId(0)).len(), 3);
    }

    #[test]
    fn add_child_to_missing_parent_fails() {
        let mut tree = BodyTree::new();
        assert!(tree.add_child(BodyId(4), body("Orphan")).is_none());
        let root = tree.add_root(body("Sun"));
        let child = tree.add_child(root, body("Vulcan")).unwrap();
        assert_eq!(tree.parent(child), Some(root));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn unknown_ids_are_empty() {
        let tree = sample_tree();
        assert!(tree.get(BodyId(99)).is_none());
        assert!(tree.children(BodyId(99)).is_empty());
        assert!(tree.find_by_label("Pluto").is_none());
    }
}
