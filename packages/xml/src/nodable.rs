use crate::node::XmlNode;

/// Something that can export itself as a neutral `XmlNode` tree
pub trait XmlNodable {
    /// Build the node for `self` and its children.
    ///
    /// `parent` is the nodable that requested this export, `None` at the root.
    fn to_xml_node(
        &self,
        ctx: &mut dyn XmlNodableContext,
        parent: Option<&dyn XmlNodable>,
    ) -> XmlNode;
}

/// Consumer-side hook threaded through an export
///
/// Implementors own whatever bookkeeping the export feeds (ids,
/// deduplication, statistics). Exporters call `finish_node` once for every
/// node that represents a nodable, after its attributes and children are
/// complete. Structural wrapper nodes do not go through the hook.
pub trait XmlNodableContext {
    fn finish_node(&mut self, _node: &mut XmlNode) {}
}

/// No bookkeeping
impl XmlNodableContext for () {}

/// Counts finished nodes, useful to check how many nodables an export visited
#[derive(Debug, Default, Clone)]
pub struct CountingContext {
    pub finished: usize,
}

impl XmlNodableContext for CountingContext {
    fn finish_node(&mut self, _node: &mut XmlNode) {
        self.finished += 1;
    }
}
