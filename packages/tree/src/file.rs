use crate::complex::ComplexItem;
use crate::context::TreeContext;
use crate::dump::SourceWriter;
use crate::item::{Item, ItemHeader};
use crate::kind::ItemKind;
use crate::value::Position;
use qmltree_xml::{XmlNodable, XmlNodableContext, XmlNode};
use tracing::debug;

/// Attribute carrying the file name in XML export
pub const FILE_NAME_ATTRIBUTE: &str = "FileName";

/// Compilation unit: the top-level declarations of one QML file
///
/// The declarations are appended one by one while the file is read, through
/// `complex_mut()` or `as_complex_mut()`.
#[derive(Debug)]
pub struct File {
    complex: ComplexItem,
    file_name: String,
}

impl File {
    pub fn new(position: Position, file_name: impl Into<String>) -> Self {
        Self {
            complex: ComplexItem::new(position),
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn complex(&self) -> &ComplexItem {
        &self.complex
    }

    pub fn complex_mut(&mut self) -> &mut ComplexItem {
        &mut self.complex
    }

    pub fn push(&mut self, declaration: Box<dyn Item>) {
        self.complex.push(declaration);
    }
}

/// Copies only the position.
///
/// The copy has no declarations, no file name, no value and no
/// parentheses. It exists so `File` can live in containers that require
/// `Clone`; it is not a duplicate of the file.
impl Clone for File {
    fn clone(&self) -> Self {
        Self {
            complex: ComplexItem::new(self.complex.position()),
            file_name: String::new(),
        }
    }
}

impl Item for File {
    fn header(&self) -> &ItemHeader {
        self.complex.header()
    }

    fn header_mut(&mut self) -> &mut ItemHeader {
        self.complex.header_mut()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::File
    }

    fn as_complex(&self) -> Option<&ComplexItem> {
        Some(&self.complex)
    }

    fn as_complex_mut(&mut self) -> Option<&mut ComplexItem> {
        Some(&mut self.complex)
    }

    fn emit_source(
        &self,
        out: &mut SourceWriter,
        ctx: &TreeContext,
        _parent: Option<&dyn Item>,
        indent: usize,
    ) {
        self.complex.emit_block(out, ctx, self, indent);
    }
}

impl XmlNodable for File {
    fn to_xml_node(
        &self,
        ctx: &mut dyn XmlNodableContext,
        _parent: Option<&dyn XmlNodable>,
    ) -> XmlNode {
        debug!(file_name = %self.file_name, declarations = self.complex.len(), "Exporting file");

        let mut node = self.header().xml_node(self.kind());
        self.complex.export_contents(&mut node, ctx, self);
        node.set_attribute(FILE_NAME_ATTRIBUTE, self.file_name.as_str());
        ctx.finish_node(&mut node);
        node
    }
}
