//! Rebuilds nesting from a pre-order list of depth-annotated entries

/// Nodes that own an ordered list of children
pub trait Nested: Sized {
    fn children_mut(&mut self) -> &mut Vec<Self>;
}

/// Depth stack over the entries seen so far.
///
/// Nodes stay on the stack while they can still receive children. A node is
/// attached to its parent when it is popped, which happens in flat-list order,
/// so siblings keep their original order.
#[derive(Debug)]
pub struct ForestBuilder<T> {
    stack: Vec<(u32, T)>,
    roots: Vec<T>,
}

impl<T: Nested> ForestBuilder<T> {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Adds the next entry of the flat list
    pub fn push(&mut self, depth: u32, node: T) {
        while self.stack.last().is_some_and(|(top, _)| *top >= depth) {
            self.pop();
        }
        self.stack.push((depth, node));
    }

    /// Closes every open node and returns the top-level nodes
    pub fn finish(mut self) -> Vec<T> {
        while !self.stack.is_empty() {
            self.pop();
        }
        self.roots
    }

    fn pop(&mut self) {
        if let Some((_, node)) = self.stack.pop() {
            match self.stack.last_mut() {
                Some((_, parent)) => parent.children_mut().push(node),
                None => self.roots.push(node),
            }
        }
    }
}

impl<T: Nested> Default for ForestBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
