//! DOM element handle for the target classifier.

use folio::cursor::TargetNode;
use web_sys::Element;

#[derive(Clone, Debug)]
pub struct DomNode(pub Element);

impl TargetNode for DomNode {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(DomNode)
    }

    fn computed_cursor(&self) -> Option<String> {
        let window = web_sys::window()?;
        let style = window.get_computed_style(&self.0).ok().flatten()?;
        style.get_property_value("cursor").ok()
    }
}
