use crate::context::TreeContext;
use crate::dump::SourceWriter;
use crate::item::{emit_slot, slot_container, Item, ItemHeader, Members};
use crate::kind::ItemKind;
use crate::value::Position;
use qmltree_xml::{XmlNodable, XmlNodableContext, XmlNode};
use tracing::trace;

pub const INITIALIZATION: &str = "initialization";
pub const CONDITION: &str = "condition";
pub const INCREMENTATION: &str = "incrementation";
pub const CONTENT: &str = "content";

/// C-style loop: `for (init; condition; increment) { ... }`
///
/// Every slot is optional and owned by the loop.
#[derive(Debug)]
pub struct For {
    header: ItemHeader,
    initialization: Option<Box<dyn Item>>,
    condition: Option<Box<dyn Item>>,
    incrementation: Option<Box<dyn Item>>,
    content: Option<Box<dyn Item>>,
}

impl For {
    pub fn new(
        position: Position,
        initialization: Option<Box<dyn Item>>,
        condition: Option<Box<dyn Item>>,
        incrementation: Option<Box<dyn Item>>,
        content: Option<Box<dyn Item>>,
    ) -> Self {
        Self {
            header: ItemHeader::new(position),
            initialization,
            condition,
            incrementation,
            content,
        }
    }

    pub fn initialization(&self) -> Option<&dyn Item> {
        self.initialization.as_deref()
    }

    pub fn condition(&self) -> Option<&dyn Item> {
        self.condition.as_deref()
    }

    pub fn incrementation(&self) -> Option<&dyn Item> {
        self.incrementation.as_deref()
    }

    pub fn content(&self) -> Option<&dyn Item> {
        self.content.as_deref()
    }

    fn emit_body(&self, out: &mut SourceWriter, ctx: &TreeContext, indent: usize) {
        let Some(content) = self.content() else {
            return;
        };

        match content.as_complex() {
            Some(block) => block.emit_entries(out, ctx, self, indent + 1),
            None => {
                out.indented_no_newline(indent + 1, "");
                content.emit_source(out, ctx, Some(self), indent + 1);
                out.newline();
            }
        }
    }
}

impl Item for For {
    fn header(&self) -> &ItemHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut ItemHeader {
        &mut self.header
    }

    fn kind(&self) -> ItemKind {
        ItemKind::For
    }

    fn members(&self) -> Members<'_> {
        let mut members = Members::new();
        members.insert(INITIALIZATION, self.initialization());
        members.insert(CONDITION, self.condition());
        members.insert(INCREMENTATION, self.incrementation());
        members.insert(CONTENT, self.content());
        members
    }

    fn emit_source(
        &self,
        out: &mut SourceWriter,
        ctx: &TreeContext,
        _parent: Option<&dyn Item>,
        indent: usize,
    ) {
        trace!(position = %self.position(), indent, "Emitting for loop");

        out.no_indent_no_newline("for (");
        emit_slot(self.initialization(), out, ctx, self, indent + 1);
        out.no_indent_no_newline("; ");
        emit_slot(self.condition(), out, ctx, self, indent + 1);
        out.no_indent_no_newline("; ");
        emit_slot(self.incrementation(), out, ctx, self, indent + 1);
        out.no_indent_no_newline(")");
        out.newline();

        out.indented(indent, "{");
        self.emit_body(out, ctx, indent);
        out.indented_no_newline(indent, "}");
    }
}

impl XmlNodable for For {
    fn to_xml_node(
        &self,
        ctx: &mut dyn XmlNodableContext,
        _parent: Option<&dyn XmlNodable>,
    ) -> XmlNode {
        let mut node = self.header.xml_node(self.kind());
        node.push(slot_container("Initialization", self.initialization(), ctx, self));
        node.push(slot_container("Condition", self.condition(), ctx, self));
        node.push(slot_container("Incrementation", self.incrementation(), ctx, self));
        node.push(slot_container("Content", self.content(), ctx, self));
        ctx.finish_node(&mut node);
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::ComplexItem;
    use crate::item::ValueItem;

    fn leaf(text: &str) -> Option<Box<dyn Item>> {
        Some(ValueItem::new(Position::default(), text).boxed())
    }

    fn emit(item: &dyn Item, indent: usize) -> String {
        let mut out = SourceWriter::new();
        item.emit_source(&mut out, &TreeContext::default(), None, indent);
        out.finish()
    }

    #[test]
    fn test_condition_only() {
        let node = For::new(Position::default(), None, leaf("i<10"), None, None);
        assert_eq!(emit(&node, 0), "for (; i<10; )\n{\n}");
    }

    #[test]
    fn test_all_slots_with_block_body() {
        let body = ComplexItem::with_contents(
            Position::default(),
            vec![
                ValueItem::new(Position::default(), "x++").boxed(),
                ValueItem::new(Position::default(), "y++").boxed(),
            ],
        );
        let node = For::new(
            Position::default(),
            leaf("var i = 0"),
            leaf("i < 10"),
            leaf("i++"),
            Some(Box::new(body)),
        );

        assert_eq!(
            emit(&node, 0),
            "for (var i = 0; i < 10; i++)\n{\n    x++\n    y++\n}"
        );
    }

    #[test]
    fn test_single_statement_body() {
        let node = For::new(Position::default(), None, None, None, leaf("doIt()"));
        assert_eq!(emit(&node, 0), "for (; ; )\n{\n    doIt()\n}");
    }

    #[test]
    fn test_empty_block_body() {
        let body = ComplexItem::new(Position::default());
        let node = For::new(Position::default(), None, None, None, Some(Box::new(body)));
        assert_eq!(emit(&node, 0), "for (; ; )\n{\n}");
    }

    #[test]
    fn test_indented_loop() {
        let node = For::new(Position::default(), None, leaf("go"), None, leaf("step()"));
        assert_eq!(emit(&node, 1), "for (; go; )\n    {\n        step()\n    }");
    }

    #[test]
    fn test_members_always_has_four_keys() {
        let node = For::new(Position::default(), None, leaf("c"), None, None);
        let members = node.members();

        let keys: Vec<_> = members.keys().copied().collect();
        assert_eq!(keys, vec![CONDITION, CONTENT, INCREMENTATION, INITIALIZATION]);
        assert!(members[CONDITION].is_some());
        assert!(members[INITIALIZATION].is_none());
        assert!(members[INCREMENTATION].is_none());
        assert!(members[CONTENT].is_none());
    }

    #[test]
    fn test_export_empty_loop_has_four_empty_containers() {
        let node = For::new(Position::default(), None, None, None, None);
        let xml = node.to_xml_node(&mut (), None);

        assert_eq!(xml.tag, "For");
        let tags: Vec<_> = xml.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["Initialization", "Condition", "Incrementation", "Content"]);
        assert!(xml.children.iter().all(|c| c.children.is_empty()));
    }
}
