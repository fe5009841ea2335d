/// Position of a traversal within the payload tree.
///
/// Segments are property and link names, or `[index]` for resources of a
/// set and items of a collection.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    path_stack: Vec<String>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a named segment of the tree (pushes to path stack).
    pub fn enter(&mut self, segment: &str) {
        self.path_stack.push(segment.to_string());
    }

    /// Enter a positional segment.
    pub fn enter_index(&mut self, index: usize) {
        self.path_stack.push(format!("[{index}]"));
    }

    /// Exit the current segment (pops from path stack).
    pub fn exit(&mut self) {
        self.path_stack.pop();
    }

    pub fn segments(&self) -> &[String] {
        &self.path_stack
    }

    /// Current path joined with `/`; empty at the root.
    pub fn path(&self) -> String {
        self.path_stack.join("/")
    }

    /// Get current nesting depth.
    pub fn depth(&self) -> usize {
        self.path_stack.len()
    }
}
