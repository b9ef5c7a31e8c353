//! # QML tree
//!
//! In-memory syntax tree of QML documents with two read-only views:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ parser (external): text → Item tree
//! └──────────────────────────────┘
//!            ↓                       ↓
//!   to_source: formatted QML    to_xml: neutral XmlNode tree
//! ```
//!
//! Every node owns its children through `Box<dyn Item>`; a subtree is built
//! bottom-up by the parser and then only traversed.

pub mod complex;
pub mod config;
pub mod context;
pub mod declaration;
pub mod dump;
pub mod error;
pub mod file;
pub mod for_loop;
pub mod item;
pub mod kind;
pub mod value;

pub use complex::ComplexItem;
pub use config::EmitConfig;
pub use context::TreeContext;
pub use declaration::{FunctionParameter, PropertyDeclaration, TypeRef};
pub use dump::SourceWriter;
pub use error::{TreeError, TreeResult};
pub use file::File;
pub use for_loop::For;
pub use item::{export_leaf, Item, ItemChange, ItemHeader, Members, ValueItem};
pub use kind::{ItemKind, PropertyModifier};
pub use value::{Position, Value};

pub use qmltree_xml::{XmlNodable, XmlNodableContext, XmlNode};

use tracing::instrument;

/// Format `item` as QML source at indentation level zero
#[instrument(skip_all, fields(kind = %item.kind()))]
pub fn to_source(item: &dyn Item, ctx: &TreeContext) -> String {
    let mut out = ctx.writer();
    item.emit_source(&mut out, ctx, None, 0);
    if ctx.config().trailing_newline {
        out.newline();
    }
    out.finish()
}

/// Export `item` and its subtree as a neutral node tree
#[instrument(skip_all, fields(kind = %item.kind()))]
pub fn to_xml(item: &dyn Item, ctx: &mut dyn XmlNodableContext) -> XmlNode {
    item.to_xml_node(ctx, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_source_uses_configured_indent() {
        let body = ComplexItem::with_contents(
            Position::default(),
            vec![ValueItem::new(Position::default(), "x").boxed()],
        );
        let ctx = TreeContext::new(EmitConfig {
            indent: "\t".to_string(),
            trailing_newline: true,
        });

        assert_eq!(to_source(&body, &ctx), "{\n\tx\n}\n");
    }

    #[test]
    fn test_to_xml_root_has_no_parent_wrapper() {
        let item = ValueItem::new(Position::default(), "x");
        let node = to_xml(&item, &mut ());
        assert_eq!(node.tag, "Item");
    }
}
