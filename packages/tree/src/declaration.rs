use crate::context::TreeContext;
use crate::dump::SourceWriter;
use crate::item::{emit_slot, slot_container, Item, ItemHeader, Members};
use crate::kind::{ItemKind, PropertyModifier};
use crate::value::{Position, Value};
use qmltree_xml::{XmlNodable, XmlNodableContext, XmlNode};

pub const TYPE: &str = "type";
pub const NAME: &str = "name";
pub const CONTENT: &str = "content";
pub const ELEMENT: &str = "element";

/// Attribute listing declaration modifiers in XML export
pub const MODIFIERS_ATTRIBUTE: &str = "Modifiers";

/// Type reference such as `int`, `Item` or `list<Item>`
#[derive(Debug)]
pub struct TypeRef {
    header: ItemHeader,
    element: Option<Box<TypeRef>>,
}

impl TypeRef {
    pub fn new(position: Position, name: impl Into<String>) -> Self {
        Self {
            header: ItemHeader::with_value(position, Value::String(name.into())),
            element: None,
        }
    }

    /// Parameterized type, e.g. `list<Item>`
    pub fn generic(position: Position, name: impl Into<String>, element: TypeRef) -> Self {
        Self {
            element: Some(Box::new(element)),
            ..Self::new(position, name)
        }
    }

    pub fn list(position: Position, element: TypeRef) -> Self {
        Self::generic(position, "list", element)
    }

    pub fn name(&self) -> String {
        self.header.value().to_string()
    }

    pub fn element(&self) -> Option<&TypeRef> {
        self.element.as_deref()
    }
}

impl Item for TypeRef {
    fn header(&self) -> &ItemHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut ItemHeader {
        &mut self.header
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Type
    }

    fn members(&self) -> Members<'_> {
        let mut members = Members::new();
        members.insert(ELEMENT, self.element().map(|t| t as &dyn Item));
        members
    }

    fn emit_source(
        &self,
        out: &mut SourceWriter,
        ctx: &TreeContext,
        _parent: Option<&dyn Item>,
        indent: usize,
    ) {
        self.header.emit_literal(out);
        if let Some(element) = self.element() {
            out.no_indent_no_newline("<");
            element.emit_source(out, ctx, Some(self), indent);
            out.no_indent_no_newline(">");
        }
    }
}

impl XmlNodable for TypeRef {
    fn to_xml_node(
        &self,
        ctx: &mut dyn XmlNodableContext,
        _parent: Option<&dyn XmlNodable>,
    ) -> XmlNode {
        let mut node = self.header.xml_node(self.kind());
        if let Some(element) = self.element() {
            node.push(element.to_xml_node(ctx, Some(self)));
        }
        ctx.finish_node(&mut node);
        node
    }
}

/// `[modifiers] property <type> <name>[: <content>]`
#[derive(Debug)]
pub struct PropertyDeclaration {
    header: ItemHeader,
    modifiers: Vec<PropertyModifier>,
    type_ref: Option<TypeRef>,
    name: Option<Box<dyn Item>>,
    content: Option<Box<dyn Item>>,
}

impl PropertyDeclaration {
    pub fn new(position: Position, type_ref: Option<TypeRef>, name: Option<Box<dyn Item>>) -> Self {
        Self {
            header: ItemHeader::new(position),
            modifiers: Vec::new(),
            type_ref,
            name,
            content: None,
        }
    }

    /// Initial value, as in `property int count: 0`
    pub fn with_content(mut self, content: Box<dyn Item>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<PropertyModifier>) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn modifiers(&self) -> &[PropertyModifier] {
        &self.modifiers
    }

    pub fn type_ref(&self) -> Option<&TypeRef> {
        self.type_ref.as_ref()
    }

    pub fn name(&self) -> Option<&dyn Item> {
        self.name.as_deref()
    }

    pub fn content(&self) -> Option<&dyn Item> {
        self.content.as_deref()
    }

    fn type_item(&self) -> Option<&dyn Item> {
        self.type_ref.as_ref().map(|t| t as &dyn Item)
    }

    /// `<type> <name>`, dropping the separator when the type is absent
    fn emit_typed_name(
        &self,
        out: &mut SourceWriter,
        ctx: &TreeContext,
        parent: &dyn Item,
        indent: usize,
    ) {
        if let Some(type_ref) = self.type_item() {
            type_ref.emit_source(out, ctx, Some(parent), indent);
            if self.name.is_some() {
                out.no_indent_no_newline(" ");
            }
        }
        emit_slot(self.name(), out, ctx, parent, indent);
    }

    fn members_of(&self) -> Members<'_> {
        let mut members = Members::new();
        members.insert(TYPE, self.type_item());
        members.insert(NAME, self.name());
        members.insert(CONTENT, self.content());
        members
    }

    fn export_as(
        &self,
        kind: ItemKind,
        ctx: &mut dyn XmlNodableContext,
        parent: &dyn XmlNodable,
    ) -> XmlNode {
        let mut node = self.header.xml_node(kind);
        if !self.modifiers.is_empty() {
            let modifiers: Vec<&str> = self.modifiers.iter().map(PropertyModifier::as_str).collect();
            node.set_attribute(MODIFIERS_ATTRIBUTE, modifiers.join(" "));
        }
        node.push(slot_container("Type", self.type_item(), ctx, parent));
        node.push(slot_container("Name", self.name(), ctx, parent));
        node.push(slot_container("Content", self.content(), ctx, parent));
        ctx.finish_node(&mut node);
        node
    }
}

impl Item for PropertyDeclaration {
    fn header(&self) -> &ItemHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut ItemHeader {
        &mut self.header
    }

    fn kind(&self) -> ItemKind {
        ItemKind::PropertyDeclaration
    }

    fn members(&self) -> Members<'_> {
        self.members_of()
    }

    fn emit_source(
        &self,
        out: &mut SourceWriter,
        ctx: &TreeContext,
        _parent: Option<&dyn Item>,
        indent: usize,
    ) {
        for modifier in &self.modifiers {
            out.no_indent_no_newline(modifier.as_str());
            out.no_indent_no_newline(" ");
        }
        out.no_indent_no_newline("property");
        if self.type_ref.is_some() || self.name.is_some() {
            out.no_indent_no_newline(" ");
        }
        self.emit_typed_name(out, ctx, self, indent);

        if let Some(content) = self.content() {
            out.no_indent_no_newline(": ");
            content.emit_source(out, ctx, Some(self), indent);
        }
    }
}

impl XmlNodable for PropertyDeclaration {
    fn to_xml_node(
        &self,
        ctx: &mut dyn XmlNodableContext,
        _parent: Option<&dyn XmlNodable>,
    ) -> XmlNode {
        self.export_as(self.kind(), ctx, self)
    }
}

/// Typed function parameter, printed as `<type> <name>`
#[derive(Debug)]
pub struct FunctionParameter {
    declaration: PropertyDeclaration,
}

impl FunctionParameter {
    pub fn new(position: Position, type_ref: Option<TypeRef>, name: Option<Box<dyn Item>>) -> Self {
        Self {
            declaration: PropertyDeclaration::new(position, type_ref, name),
        }
    }

    pub fn type_ref(&self) -> Option<&TypeRef> {
        self.declaration.type_ref()
    }

    pub fn name(&self) -> Option<&dyn Item> {
        self.declaration.name()
    }
}

impl Item for FunctionParameter {
    fn header(&self) -> &ItemHeader {
        &self.declaration.header
    }

    fn header_mut(&mut self) -> &mut ItemHeader {
        &mut self.declaration.header
    }

    fn kind(&self) -> ItemKind {
        ItemKind::FunctionParameter
    }

    fn members(&self) -> Members<'_> {
        self.declaration.members_of()
    }

    fn emit_source(
        &self,
        out: &mut SourceWriter,
        ctx: &TreeContext,
        _parent: Option<&dyn Item>,
        indent: usize,
    ) {
        self.declaration.emit_typed_name(out, ctx, self, indent);
    }
}

impl XmlNodable for FunctionParameter {
    fn to_xml_node(
        &self,
        ctx: &mut dyn XmlNodableContext,
        _parent: Option<&dyn XmlNodable>,
    ) -> XmlNode {
        self.declaration.export_as(self.kind(), ctx, self)
    }
}
