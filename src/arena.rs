use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

/// A single directory entry: a name plus an ordered list of children.
///
/// Sibling names are not required to be unique; nothing here enforces it.
/// There is no parent pointer, so every operation locates its context by
/// searching down from the root.
#[derive(Debug, Clone)]
pub struct DirNode {
    /// Directory name (one path segment)
    pub name: String,
    /// Indices of child nodes in the arena, in insertion order
    pub children: Vec<Index>,
}

impl fmt::Display for DirNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Arena-based directory tree with a fixed root node.
///
/// Children are stored as arena indices. Detaching a child only removes its
/// index from the parent's list; the arena slot stays alive for the rest of
/// the run. `copy_under` relies on that: after a move, the new node still
/// references the subtree the detached source used to own.
#[derive(Debug)]
pub struct DirTree {
    arena: Arena<DirNode>,
    root: Index,
}

impl DirTree {
    pub fn new(root_name: &str) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(DirNode {
            name: root_name.to_string(),
            children: Vec::new(),
        });
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, idx: Index) -> Option<&DirNode> {
        self.arena.get(idx)
    }

    /// Appends a new empty directory under `parent`. No duplicate check.
    #[instrument(level = "trace", skip(self))]
    pub fn create_child(&mut self, parent: Index, name: &str) -> Index {
        let child = self.arena.insert(DirNode {
            name: name.to_string(),
            children: Vec::new(),
        });
        if let Some(parent) = self.arena.get_mut(parent) {
            parent.children.push(child);
        }
        child
    }

    /// Detaches every child of `parent` named `name`. No-op if none match;
    /// removes all matches if siblings share the name. The detached nodes
    /// keep their arena slots.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child(&mut self, parent: Index, name: &str) {
        let keep: Vec<Index> = match self.arena.get(parent) {
            Some(node) => node
                .children
                .iter()
                .copied()
                .filter(|&child| {
                    self.arena
                        .get(child)
                        .map(|n| n.name != name)
                        .unwrap_or(false)
                })
                .collect(),
            None => return,
        };
        if let Some(node) = self.arena.get_mut(parent) {
            node.children = keep;
        }
    }

    /// True if `parent` has an immediate child named `name`.
    #[instrument(level = "trace", skip(self))]
    pub fn has_child(&self, parent: Index, name: &str) -> bool {
        self.arena
            .get(parent)
            .map(|node| {
                node.children
                    .iter()
                    .any(|&child| self.arena.get(child).is_some_and(|n| n.name == name))
            })
            .unwrap_or(false)
    }

    /// Depth-first pre-order search over the whole tree (root excluded):
    /// visit a node, descend into it, then move to its next sibling. Returns
    /// the first match.
    #[instrument(level = "trace", skip(self))]
    pub fn find_by_name(&self, name: &str) -> Option<Index> {
        let root = self.arena.get(self.root)?;
        self.find_in(&root.children, name)
    }

    fn find_in(&self, children: &[Index], name: &str) -> Option<Index> {
        for &child in children {
            let Some(node) = self.arena.get(child) else {
                continue;
            };
            if node.name == name {
                return Some(child);
            }
            if let Some(found) = self.find_in(&node.children, name) {
                return Some(found);
            }
        }
        None
    }

    /// Constructs a new node under `destination` with `source`'s name and a
    /// copy of its children index list. The subtree itself is not cloned;
    /// until the caller detaches the source, both nodes reference the same
    /// children.
    #[instrument(level = "trace", skip(self))]
    pub fn copy_under(&mut self, source: Index, destination: Index) -> Option<Index> {
        let (name, children) = {
            let node = self.arena.get(source)?;
            (node.name.clone(), node.children.clone())
        };
        let copy = self.arena.insert(DirNode { name, children });
        self.arena.get_mut(destination)?.children.push(copy);
        Some(copy)
    }

    /// Sorts every children list ascending by ordinal name comparison,
    /// recursively. Must be called explicitly; nothing keeps the order
    /// maintained between mutations.
    #[instrument(level = "debug", skip(self))]
    pub fn sort_recursive(&mut self) {
        self.sort_subtree(self.root);
    }

    fn sort_subtree(&mut self, idx: Index) {
        let mut children = match self.arena.get(idx) {
            Some(node) => node.children.clone(),
            None => return,
        };
        children.sort_by(|&a, &b| {
            let left = self.arena.get(a).map_or("", |n| n.name.as_str());
            let right = self.arena.get(b).map_or("", |n| n.name.as_str());
            left.cmp(right)
        });
        if let Some(node) = self.arena.get_mut(idx) {
            node.children = children.clone();
        }
        for child in children {
            self.sort_subtree(child);
        }
    }

    /// Pre-order traversal over the root's descendants with their depth
    /// (0 for root children). The root itself is never yielded.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> DepthFirstIter<'_> {
        DepthFirstIter::new(self)
    }
}

pub struct DepthFirstIter<'a> {
    tree: &'a DirTree,
    stack: Vec<(Index, usize)>,
}

impl<'a> DepthFirstIter<'a> {
    fn new(tree: &'a DirTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.arena.get(tree.root) {
            // Push in reverse order for left-to-right traversal
            for &child in root.children.iter().rev() {
                stack.push((child, 0));
            }
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for DepthFirstIter<'a> {
    type Item = (Index, usize, &'a DirNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, depth)) = self.stack.pop() {
            if let Some(node) = self.tree.arena.get(current) {
                for &child in node.children.iter().rev() {
                    self.stack.push((child, depth + 1));
                }
                return Some((current, depth, node));
            }
        }
        None
    }
}
