use crate::context::TreeContext;
use crate::dump::SourceWriter;
use crate::error::{TreeError, TreeResult};
use crate::item::{Item, ItemHeader};
use crate::kind::ItemKind;
use crate::value::Position;
use qmltree_xml::{XmlNodable, XmlNodableContext, XmlNode};
use tracing::{debug, trace};

/// Node owning an ordered list of children
///
/// Entries are moved in and out; an entry can never sit in two containers
/// or twice in the same one.
#[derive(Debug)]
pub struct ComplexItem {
    header: ItemHeader,
    contents: Vec<Box<dyn Item>>,
}

impl ComplexItem {
    pub fn new(position: Position) -> Self {
        Self::with_contents(position, Vec::new())
    }

    pub fn with_contents(position: Position, contents: Vec<Box<dyn Item>>) -> Self {
        Self {
            header: ItemHeader::new(position),
            contents,
        }
    }

    pub fn contents(&self) -> &[Box<dyn Item>] {
        &self.contents
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Item> + '_ {
        self.contents.iter().map(|item| &**item)
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Item> {
        self.contents.get(index).map(|item| &**item)
    }

    pub fn push(&mut self, item: Box<dyn Item>) {
        trace!(kind = %item.kind(), index = self.contents.len(), "Adding content");
        self.contents.push(item);
    }

    /// Push an entry the builder may not have produced; `None` is dropped
    /// here so traversals never meet an empty entry.
    pub fn push_optional(&mut self, item: Option<Box<dyn Item>>) {
        match item {
            Some(item) => self.push(item),
            None => trace!(position = %self.header.position(), "Skipping absent content"),
        }
    }

    pub fn insert(&mut self, index: usize, item: Box<dyn Item>) -> TreeResult<()> {
        if index > self.contents.len() {
            return Err(TreeError::index_out_of_bounds(index, self.contents.len()));
        }
        trace!(kind = %item.kind(), index, "Inserting content");
        self.contents.insert(index, item);
        Ok(())
    }

    /// Detach an entry; ownership passes to the caller
    pub fn remove(&mut self, index: usize) -> TreeResult<Box<dyn Item>> {
        if index >= self.contents.len() {
            return Err(TreeError::index_out_of_bounds(index, self.contents.len()));
        }
        let item = self.contents.remove(index);
        debug!(kind = %item.kind(), index, "Removed content");
        Ok(item)
    }

    pub fn take_contents(&mut self) -> Vec<Box<dyn Item>> {
        debug!(count = self.contents.len(), "Taking all contents");
        std::mem::take(&mut self.contents)
    }

    pub fn clear(&mut self) {
        debug!(count = self.contents.len(), "Clearing contents");
        self.contents.clear();
    }

    /// `{`, one entry per line one level deeper, `}` back at `indent`
    pub fn emit_block(
        &self,
        out: &mut SourceWriter,
        ctx: &TreeContext,
        parent: &dyn Item,
        indent: usize,
    ) {
        out.no_indent_no_newline("{");
        out.newline();
        self.emit_entries(out, ctx, parent, indent + 1);
        out.indented_no_newline(indent, "}");
    }

    /// Each entry on its own line at `level`, no surrounding braces
    pub fn emit_entries(
        &self,
        out: &mut SourceWriter,
        ctx: &TreeContext,
        parent: &dyn Item,
        level: usize,
    ) {
        for item in &self.contents {
            out.indented_no_newline(level, "");
            item.emit_source(out, ctx, Some(parent), level);
            out.newline();
        }
    }

    /// Append one exported node per entry, in order
    pub fn export_contents(
        &self,
        node: &mut XmlNode,
        ctx: &mut dyn XmlNodableContext,
        parent: &dyn XmlNodable,
    ) {
        for item in &self.contents {
            node.push(item.to_xml_node(ctx, Some(parent)));
        }
    }
}

impl Item for ComplexItem {
    fn header(&self) -> &ItemHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut ItemHeader {
        &mut self.header
    }

    fn kind(&self) -> ItemKind {
        ItemKind::ComplexItem
    }

    fn as_complex(&self) -> Option<&ComplexItem> {
        Some(self)
    }

    fn as_complex_mut(&mut self) -> Option<&mut ComplexItem> {
        Some(self)
    }

    fn emit_source(
        &self,
        out: &mut SourceWriter,
        ctx: &TreeContext,
        _parent: Option<&dyn Item>,
        indent: usize,
    ) {
        self.emit_block(out, ctx, self, indent);
    }
}

impl XmlNodable for ComplexItem {
    fn to_xml_node(
        &self,
        ctx: &mut dyn XmlNodableContext,
        _parent: Option<&dyn XmlNodable>,
    ) -> XmlNode {
        let mut node = self.header.xml_node(self.kind());
        self.export_contents(&mut node, ctx, self);
        ctx.finish_node(&mut node);
        node
    }
}
