//! Composite.
//!
//! A composite owns its children outright; dropping the root drops every
//! descendant exactly once. Removal is by node identity (each node gets a
//! process-unique [`NodeId`] handle), never by name equality. A leaf
//! rejects `add`/`remove` with a non-fatal diagnostic.

use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ComponentError {
    #[error("Cannot add child to leaf node: {0}")]
    LeafCannotAdd(String),
    #[error("Cannot remove child from leaf node: {0}")]
    LeafCannotRemove(String),
    #[error("Child not found in composite '{0}'")]
    NotAMember(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

fn next_id() -> NodeId {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    NodeId(COUNTER.fetch_add(1, Ordering::Relaxed))
}

pub trait Component: std::fmt::Debug {
    fn id(&self) -> NodeId;
    fn name(&self) -> &str;
    fn render(&self, indent: usize) -> String;

    fn add(&mut self, child: Box<dyn Component>) -> Result<(), ComponentError> {
        let _ = child;
        Err(ComponentError::LeafCannotAdd(self.name().to_string()))
    }

    /// Extracts the child with the given identity, handing ownership back
    /// to the caller.
    fn remove(&mut self, id: NodeId) -> Result<Box<dyn Component>, ComponentError> {
        let _ = id;
        Err(ComponentError::LeafCannotRemove(self.name().to_string()))
    }
}

#[derive(Debug)]
pub struct Leaf {
    id: NodeId,
    name: String,
}

impl Leaf {
    pub fn new(name: &str) -> Self {
        Leaf {
            id: next_id(),
            name: name.to_string(),
        }
    }
}

impl Component for Leaf {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, indent: usize) -> String {
        format!("{}- {} (Leaf)", "  ".repeat(indent), self.name)
    }
}

#[derive(Debug)]
pub struct Composite {
    id: NodeId,
    name: String,
    children: Vec<Box<dyn Component>>,
}

impl Composite {
    pub fn new(name: &str) -> Self {
        Composite {
            id: next_id(),
            name: name.to_string(),
            children: Vec::new(),
        }
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Component for Composite {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, indent: usize) -> String {
        let mut out = format!("{}+ {} (Composite)", "  ".repeat(indent), self.name);
        for child in &self.children {
            out.push('\n');
            out.push_str(&child.render(indent + 1));
        }
        out
    }

    fn add(&mut self, child: Box<dyn Component>) -> Result<(), ComponentError> {
        self.children.push(child);
        Ok(())
    }

    fn remove(&mut self, id: NodeId) -> Result<Box<dyn Component>, ComponentError> {
        match self.children.iter().position(|child| child.id() == id) {
            Some(index) => Ok(self.children.remove(index)),
            None => Err(ComponentError::NotAMember(self.name.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> (Composite, NodeId, NodeId) {
        let mut root = Composite::new("root");
        let mut pictures = Composite::new("Pictures");
        let pictures_id = pictures.id();
        let photo = Leaf::new("vacation.jpg");
        let photo_id = photo.id();
        pictures.add(Box::new(photo)).unwrap();
        pictures.add(Box::new(Leaf::new("family.png"))).unwrap();
        root.add(Box::new(pictures)).unwrap();
        root.add(Box::new(Leaf::new("readme.txt"))).unwrap();
        (root, pictures_id, photo_id)
    }

    #[test]
    fn renders_depth_first_with_two_space_indent() {
        let (root, _, _) = sample_tree();
        let expected = "\
+ root (Composite)
  + Pictures (Composite)
    - vacation.jpg (Leaf)
    - family.png (Leaf)
  - readme.txt (Leaf)";
        assert_eq!(root.render(0), expected);
    }

    #[test]
    fn removal_is_by_identity_and_returns_ownership() {
        let (mut root, pictures_id, photo_id) = sample_tree();
        // The photo lives under Pictures, not directly under root.
        assert_eq!(
            root.remove(photo_id).err(),
            Some(ComponentError::NotAMember("root".to_string()))
        );

        let mut pictures = root.remove(pictures_id).unwrap();
        let photo = pictures.remove(photo_id).unwrap();
        assert_eq!(photo.name(), "vacation.jpg");
        assert_eq!(photo.render(0), "- vacation.jpg (Leaf)");
        // Removing again fails: the child is gone.
        assert!(pictures.remove(photo_id).is_err());
    }

    #[test]
    fn two_leaves_with_equal_names_are_distinct() {
        let mut group = Composite::new("group");
        let a = Leaf::new("twin");
        let b = Leaf::new("twin");
        let a_id = a.id();
        let b_id = b.id();
        assert_ne!(a_id, b_id);
        group.add(Box::new(a)).unwrap();
        group.add(Box::new(b)).unwrap();

        group.remove(a_id).unwrap();
        assert_eq!(group.child_count(), 1);
        // The remaining twin is b, reachable by its own handle.
        assert!(group.remove(b_id).is_ok());
    }

    #[test]
    fn leaf_rejects_structure_mutations() {
        let mut leaf = Leaf::new("file.txt");
        let err = leaf.add(Box::new(Leaf::new("other"))).unwrap_err();
        assert_eq!(err, ComponentError::LeafCannotAdd("file.txt".to_string()));
        let err = leaf.remove(next_id()).unwrap_err();
        assert_eq!(err, ComponentError::LeafCannotRemove("file.txt".to_string()));
    }
}
