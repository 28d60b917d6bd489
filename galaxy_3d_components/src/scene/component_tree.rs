/// ComponentTree: the declarative scene description.
///
/// Nodes live in a SlotMap for O(1) insert/remove with stable keys. Each
/// node is a group, a mesh, a material component or a texture component.
/// Material and texture components find their collaborators (parent mesh,
/// parent material) by walking up the ancestor chain when they are added.

use slotmap::{new_key_type, SlotMap};
use crate::error::Result;
use crate::scene_bail;
use crate::graphics::Mesh;
use crate::component::{
    MaterialComponent, MaterialComponentDesc, MeshHandle,
    PropertyBag, TextureComponent, TextureComponentDesc,
};

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a node within a ComponentTree.
    ///
    /// A key becomes invalid only when its own node is unmounted.
    pub struct NodeKey;
}

// ===== NODES =====

/// What a node holds
pub enum NodeKind {
    /// Plain grouping node
    Group,
    /// Graphics-library mesh that descendant materials attach to
    Mesh(Mesh),
    /// Material component (inert if no ancestor mesh was found)
    Material(MaterialComponent),
    /// Texture component bound to the nearest ancestor material
    Texture(TextureComponent),
}

impl NodeKind {
    fn is_mesh(&self) -> bool {
        matches!(self, NodeKind::Mesh(_))
    }

    fn is_material(&self) -> bool {
        matches!(self, NodeKind::Material(_))
    }
}

struct Node {
    name: String,
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
    kind: NodeKind,
}

// ===== COMPONENT TREE =====

/// Tree of declarative components
///
/// Unmounting a node unmounts its whole subtree, children before parents,
/// so textures are cleared from a material before that material is
/// disposed. Dropping the tree unmounts everything.
pub struct ComponentTree {
    nodes: SlotMap<NodeKey, Node>,
    roots: Vec<NodeKey>,
}

impl ComponentTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }

    // ===== MOUNTING =====

    /// Add a grouping node
    pub fn add_group(&mut self, parent: Option<NodeKey>, name: impl Into<String>) -> Result<NodeKey> {
        self.check_parent(parent)?;
        Ok(self.insert(parent, name.into(), NodeKind::Group))
    }

    /// Add a mesh node
    pub fn add_mesh(&mut self, parent: Option<NodeKey>, mesh: Mesh) -> Result<NodeKey> {
        self.check_parent(parent)?;
        let name = mesh.name().to_string();
        Ok(self.insert(parent, name, NodeKind::Mesh(mesh)))
    }

    /// Add a material component under `parent`
    ///
    /// The material attaches to the nearest ancestor mesh. If there is none,
    /// "Missing parent Mesh" is logged and the node holds an inert component.
    /// Factory errors are returned and no node is added.
    pub fn add_material(&mut self, parent: Option<NodeKey>, desc: MaterialComponentDesc) -> Result<NodeKey> {
        self.check_parent(parent)?;
        let name = desc.variant.name().to_string();

        let mesh_key = self.find_ancestor(parent, NodeKind::is_mesh);
        let mesh = mesh_key
            .and_then(|key| self.nodes.get_mut(key))
            .and_then(|node| match &mut node.kind {
                NodeKind::Mesh(mesh) => Some(mesh as &mut dyn MeshHandle),
                _ => None,
            });
        let component = MaterialComponent::mount(desc, mesh)?;

        Ok(self.insert(parent, name, NodeKind::Material(component)))
    }

    /// Add a texture component under `parent`
    ///
    /// The texture is assigned to the nearest ancestor material. If there is
    /// none, "Missing parent Material" is logged and the texture stays unbound.
    /// If the material rejects the texture no node is added and the texture
    /// is disposed.
    pub fn add_texture(&mut self, parent: Option<NodeKey>, desc: TextureComponentDesc) -> Result<NodeKey> {
        self.check_parent(parent)?;
        let name = desc.texture.name().to_string();

        let material = self
            .find_ancestor(parent, NodeKind::is_material)
            .and_then(|key| self.material(key));
        let component = TextureComponent::mount(desc, material)?;

        Ok(self.insert(parent, name, NodeKind::Texture(component)))
    }

    // ===== UNMOUNTING =====

    /// Unmount a node and its subtree
    ///
    /// Returns false if the key is invalid (including already unmounted).
    pub fn unmount(&mut self, key: NodeKey) -> bool {
        let Some(parent) = self.nodes.get(key).map(|node| node.parent) else {
            return false;
        };

        match parent {
            Some(parent) => {
                if let Some(parent) = self.nodes.get_mut(parent) {
                    parent.children.retain(|child| *child != key);
                }
            }
            None => self.roots.retain(|root| *root != key),
        }

        self.unmount_subtree(key);
        true
    }

    /// Unmount every node
    pub fn clear(&mut self) {
        for root in std::mem::take(&mut self.roots) {
            self.unmount_subtree(root);
        }
    }

    fn unmount_subtree(&mut self, key: NodeKey) {
        // Pre-order walk with an explicit stack, then removal in reverse so
        // every node goes after all of its descendants
        let mut order = Vec::new();
        let mut stack = vec![key];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current) {
                stack.extend(std::mem::take(&mut node.children));
                order.push(current);
            }
        }

        for current in order.into_iter().rev() {
            self.unmount_node(current);
        }
    }

    fn unmount_node(&mut self, key: NodeKey) {
        let Some(node) = self.nodes.remove(key) else {
            return;
        };
        match node.kind {
            NodeKind::Material(mut component) => {
                component.unmount();
            }
            NodeKind::Texture(mut component) => {
                let material = self
                    .find_ancestor(node.parent, NodeKind::is_material)
                    .and_then(|key| self.material(key));
                if let Err(err) = component.unmount(material) {
                    crate::scene_error!("galaxy3d::ComponentTree",
                        "Failed to clear texture '{}' from '{}': {}",
                        node.name, component.field(), err);
                }
            }
            NodeKind::Group | NodeKind::Mesh(_) => {}
        }
        crate::scene_trace!("galaxy3d::ComponentTree", "Unmounted '{}'", node.name);
    }

    // ===== INPUT UPDATES =====

    /// Change the color input of a material node
    pub fn set_material_color(&mut self, key: NodeKey, color: &str) -> Result<()> {
        match self.material_mut(key) {
            Some(component) => component.set_color(color),
            None => scene_bail!("galaxy3d::ComponentTree", InvalidNode,
                "{:?} is not a mounted material", key),
        }
    }

    /// Replace the props input of a material node, returning the applied keys
    pub fn set_material_props(&mut self, key: NodeKey, props: PropertyBag) -> Result<Vec<String>> {
        match self.material_mut(key) {
            Some(component) => component.set_props(props),
            None => scene_bail!("galaxy3d::ComponentTree", InvalidNode,
                "{:?} is not a mounted material", key),
        }
    }

    // ===== ACCESSORS =====

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes, in insertion order
    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    pub fn name(&self, key: NodeKey) -> Option<&str> {
        self.nodes.get(key).map(|node| node.name.as_str())
    }

    pub fn parent(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key)?.parent
    }

    pub fn children(&self, key: NodeKey) -> &[NodeKey] {
        self.nodes.get(key).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    pub fn kind(&self, key: NodeKey) -> Option<&NodeKind> {
        self.nodes.get(key).map(|node| &node.kind)
    }

    pub fn mesh(&self, key: NodeKey) -> Option<&Mesh> {
        match self.kind(key)? {
            NodeKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn material(&self, key: NodeKey) -> Option<&MaterialComponent> {
        match self.kind(key)? {
            NodeKind::Material(component) => Some(component),
            _ => None,
        }
    }

    pub fn material_mut(&mut self, key: NodeKey) -> Option<&mut MaterialComponent> {
        match &mut self.nodes.get_mut(key)?.kind {
            NodeKind::Material(component) => Some(component),
            _ => None,
        }
    }

    pub fn texture(&self, key: NodeKey) -> Option<&TextureComponent> {
        match self.kind(key)? {
            NodeKind::Texture(component) => Some(component),
            _ => None,
        }
    }

    /// Nearest node matching `predicate`, starting at `start` and walking up
    pub fn find_ancestor(&self, start: Option<NodeKey>, predicate: fn(&NodeKind) -> bool) -> Option<NodeKey> {
        let mut current = start;
        while let Some(key) = current {
            let node = self.nodes.get(key)?;
            if predicate(&node.kind) {
                return Some(key);
            }
            current = node.parent;
        }
        None
    }

    // ===== INTERNAL =====

    fn check_parent(&self, parent: Option<NodeKey>) -> Result<()> {
        match parent {
            Some(key) if !self.nodes.contains_key(key) => {
                scene_bail!("galaxy3d::ComponentTree", InvalidNode,
                    "parent {:?} is not mounted", key)
            }
            _ => Ok(()),
        }
    }

    fn insert(&mut self, parent: Option<NodeKey>, name: String, kind: NodeKind) -> NodeKey {
        let key = self.nodes.insert(Node {
            name,
            parent,
            children: Vec::new(),
            kind,
        });
        match parent.and_then(|parent| self.nodes.get_mut(parent)) {
            Some(parent) => parent.children.push(key),
            None => self.roots.push(key),
        }
        key
    }
}

impl Default for ComponentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ComponentTree {
    fn drop(&mut self) {
        self.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "component_tree_tests.rs"]
mod tests;
