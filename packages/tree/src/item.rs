use crate::complex::ComplexItem;
use crate::context::TreeContext;
use crate::dump::SourceWriter;
use crate::kind::ItemKind;
use crate::value::{Position, Value};
use qmltree_xml::{XmlNodable, XmlNodableContext, XmlNode};
use std::collections::BTreeMap;
use std::fmt;

/// Attribute carrying an item's literal value in XML export
pub const VALUE_ATTRIBUTE: &str = "Value";

/// Named structural children of a node; unset slots map to `None`
pub type Members<'a> = BTreeMap<&'static str, Option<&'a dyn Item>>;

/// Change delivered to observers registered with `ItemHeader::on_change`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemChange<'a> {
    Value(&'a Value),
    Parenthesized(bool),
}

type ChangeCallback = Box<dyn FnMut(ItemChange<'_>)>;

/// State every node carries: where it came from, its literal, its parentheses
pub struct ItemHeader {
    position: Position,
    value: Value,
    parenthesized: bool,
    observers: Vec<ChangeCallback>,
}

impl ItemHeader {
    pub fn new(position: Position) -> Self {
        Self::with_value(position, Value::Null)
    }

    pub fn with_value(position: Position, value: Value) -> Self {
        Self {
            position,
            value,
            parenthesized: false,
            observers: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_parenthesized(&self) -> bool {
        self.parenthesized
    }

    /// Observers run synchronously, once per effective change
    pub fn on_change(&mut self, callback: impl FnMut(ItemChange<'_>) + 'static) {
        self.observers.push(Box::new(callback));
    }

    pub fn set_value(&mut self, value: Value) {
        if self.value.same_as(&value) {
            return;
        }
        self.value = value;

        let Self {
            value, observers, ..
        } = self;
        for callback in observers.iter_mut() {
            callback(ItemChange::Value(&*value));
        }
    }

    pub fn set_parenthesized(&mut self, parenthesized: bool) {
        if self.parenthesized == parenthesized {
            return;
        }
        self.parenthesized = parenthesized;

        for callback in self.observers.iter_mut() {
            callback(ItemChange::Parenthesized(parenthesized));
        }
    }

    /// Literal value, wrapped in parentheses when flagged
    pub fn emit_literal(&self, out: &mut SourceWriter) {
        let literal = self.value.to_string();
        if self.parenthesized {
            out.no_indent_no_newline("(");
            out.no_indent_no_newline(&literal);
            out.no_indent_no_newline(")");
        } else {
            out.no_indent_no_newline(&literal);
        }
    }

    /// Export node shared by every kind: tag plus the value attribute
    pub fn xml_node(&self, kind: ItemKind) -> XmlNode {
        XmlNode::new(kind.as_str()).with_attribute(VALUE_ATTRIBUTE, self.value.to_string())
    }
}

impl fmt::Debug for ItemHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemHeader")
            .field("position", &self.position)
            .field("value", &self.value)
            .field("parenthesized", &self.parenthesized)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// A node of the QML tree
///
/// Children are owned through `Box<dyn Item>`, one owner each; dropping a
/// node drops its whole subtree once. Both traversals take `&self`.
pub trait Item: XmlNodable + fmt::Debug {
    fn header(&self) -> &ItemHeader;

    fn header_mut(&mut self) -> &mut ItemHeader;

    fn kind(&self) -> ItemKind;

    fn position(&self) -> Position {
        self.header().position()
    }

    fn value(&self) -> &Value {
        self.header().value()
    }

    fn is_parenthesized(&self) -> bool {
        self.header().is_parenthesized()
    }

    /// Literal as text, without parentheses
    fn to_text(&self) -> String {
        self.value().to_string()
    }

    fn set_value(&mut self, value: Value) {
        self.header_mut().set_value(value);
    }

    fn set_parenthesized(&mut self, parenthesized: bool) {
        self.header_mut().set_parenthesized(parenthesized);
    }

    /// Named structural children, for tools that walk the tree generically
    fn members(&self) -> Members<'_> {
        Members::new()
    }

    /// Container view, if this node owns a content list
    fn as_complex(&self) -> Option<&ComplexItem> {
        None
    }

    fn as_complex_mut(&mut self) -> Option<&mut ComplexItem> {
        None
    }

    /// Write this node's source form; `indent` is the level of the line the
    /// node starts on.
    fn emit_source(
        &self,
        out: &mut SourceWriter,
        _ctx: &TreeContext,
        _parent: Option<&dyn Item>,
        _indent: usize,
    ) {
        self.header().emit_literal(out);
    }
}

/// Default export of a node without children: tag and value attribute
pub fn export_leaf(item: &dyn Item, ctx: &mut dyn XmlNodableContext) -> XmlNode {
    let mut node = item.header().xml_node(item.kind());
    ctx.finish_node(&mut node);
    node
}

/// Emit an optional child in place; an absent child writes nothing
pub(crate) fn emit_slot(
    slot: Option<&dyn Item>,
    out: &mut SourceWriter,
    ctx: &TreeContext,
    parent: &dyn Item,
    indent: usize,
) {
    if let Some(item) = slot {
        item.emit_source(out, ctx, Some(parent), indent);
    }
}

/// Named wrapper node holding the export of `slot`, or nothing
///
/// The wrapper exists whether or not the slot is set.
pub(crate) fn slot_container(
    tag: &str,
    slot: Option<&dyn Item>,
    ctx: &mut dyn XmlNodableContext,
    parent: &dyn XmlNodable,
) -> XmlNode {
    let mut container = XmlNode::new(tag);
    if let Some(item) = slot {
        container.push(item.to_xml_node(ctx, Some(parent)));
    }
    container
}

/// Leaf node: a literal, identifier or expression fragment
#[derive(Debug)]
pub struct ValueItem {
    header: ItemHeader,
}

impl ValueItem {
    pub fn new(position: Position, value: impl Into<Value>) -> Self {
        Self {
            header: ItemHeader::with_value(position, value.into()),
        }
    }

    pub fn parenthesized(mut self) -> Self {
        self.header.set_parenthesized(true);
        self
    }

    pub fn boxed(self) -> Box<dyn Item> {
        Box::new(self)
    }
}

impl Item for ValueItem {
    fn header(&self) -> &ItemHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut ItemHeader {
        &mut self.header
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Item
    }
}

impl XmlNodable for ValueItem {
    fn to_xml_node(
        &self,
        ctx: &mut dyn XmlNodableContext,
        _parent: Option<&dyn XmlNodable>,
    ) -> XmlNode {
        export_leaf(self, ctx)
    }
}
