/// Multi-child tree node built on `GrowableArray`
use crate::error::ArrayResult;
use crate::growable::GrowableArray;

/// A value with exclusively owned children
#[derive(Debug)]
pub struct TreeNode<T> {
    value: T,
    children: GrowableArray<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: GrowableArray::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Take ownership of `node` as the last child
    pub fn append_child(&mut self, node: TreeNode<T>) -> ArrayResult<()> {
        self.children.append(node)
    }

    pub fn children(&self) -> &[TreeNode<T>] {
        self.children.as_slice()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_child() {
        let mut root = TreeNode::new("root");
        let mut arm = TreeNode::new("arm");
        arm.append_child(TreeNode::new("hand")).unwrap();

        root.append_child(arm).unwrap();
        root.append_child(TreeNode::new("leg")).unwrap();
        root.append_child(TreeNode::new("head")).unwrap();

        assert_eq!(root.child_count(), 3);
        let names: Vec<&str> = root.children().iter().map(|c| *c.value()).collect();
        assert_eq!(names, vec!["arm", "leg", "head"]);
        assert_eq!(*root.children()[0].children()[0].value(), "hand");
    }

    #[test]
    fn test_value_mut() {
        let mut node = TreeNode::new(1);
        *node.value_mut() += 1;
        assert_eq!(*node.value(), 2);
        assert_eq!(node.child_count(), 0);
    }
}
