//! In-memory element tree for exercising the classifier without a DOM.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::classifier::TargetNode;

#[derive(Default)]
struct NodeData {
    tag: String,
    attributes: RefCell<HashMap<String, String>>,
    cursor: RefCell<Option<String>>,
    parent: RefCell<Option<TestNode>>,
}

#[derive(Clone)]
pub(crate) struct TestNode {
    inner: Rc<NodeData>,
}

impl TestNode {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            inner: Rc::new(NodeData {
                tag: tag.to_string(),
                ..Default::default()
            }),
        }
    }

    pub(crate) fn attr(self, name: &str, value: &str) -> Self {
        self.inner
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Set the element's own `cursor` style. Children inherit it.
    pub(crate) fn cursor(self, value: &str) -> Self {
        *self.inner.cursor.borrow_mut() = Some(value.to_string());
        self
    }

    pub(crate) fn child_of(self, parent: &TestNode) -> Self {
        *self.inner.parent.borrow_mut() = Some(parent.clone());
        self
    }
}

impl TargetNode for TestNode {
    fn tag_name(&self) -> String {
        self.inner.tag.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.inner.attributes.borrow().get(name).cloned()
    }

    fn parent(&self) -> Option<Self> {
        self.inner.parent.borrow().clone()
    }

    fn computed_cursor(&self) -> Option<String> {
        self.inner
            .cursor
            .borrow()
            .clone()
            .or_else(|| self.parent().and_then(|p| p.computed_cursor()))
    }
}
