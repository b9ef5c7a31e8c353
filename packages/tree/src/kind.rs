use crate::error::{TreeError, TreeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Concrete node kinds; the string form is the XML export tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Item,
    ComplexItem,
    File,
    For,
    Type,
    PropertyDeclaration,
    FunctionParameter,
}

impl ItemKind {
    pub const ALL: [ItemKind; 7] = [
        ItemKind::Item,
        ItemKind::ComplexItem,
        ItemKind::File,
        ItemKind::For,
        ItemKind::Type,
        ItemKind::PropertyDeclaration,
        ItemKind::FunctionParameter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Item => "Item",
            ItemKind::ComplexItem => "ComplexItem",
            ItemKind::File => "File",
            ItemKind::For => "For",
            ItemKind::Type => "Type",
            ItemKind::PropertyDeclaration => "PropertyDeclaration",
            ItemKind::FunctionParameter => "FunctionParameter",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = TreeError;

    fn from_str(s: &str) -> TreeResult<Self> {
        ItemKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TreeError::unknown_item_kind(s))
    }
}

/// Qualifiers that may precede `property`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyModifier {
    Default,
    Readonly,
}

impl PropertyModifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyModifier::Default => "default",
            PropertyModifier::Readonly => "readonly",
        }
    }
}

impl fmt::Display for PropertyModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyModifier {
    type Err = TreeError;

    fn from_str(s: &str) -> TreeResult<Self> {
        match s {
            "default" => Ok(PropertyModifier::Default),
            "readonly" => Ok(PropertyModifier::Readonly),
            _ => Err(TreeError::unknown_modifier(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_kind_table_is_bijective() {
        for kind in ItemKind::ALL {
            assert_eq!(kind.as_str().parse::<ItemKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_item_kind() {
        let err = "Loop".parse::<ItemKind>().unwrap_err();
        assert!(matches!(err, TreeError::UnknownItemKind(ref name) if name == "Loop"));
        assert_eq!(err.to_string(), "Unknown item kind: Loop");
    }

    #[test]
    fn test_modifier_table() {
        assert_eq!("readonly".parse::<PropertyModifier>().unwrap(), PropertyModifier::Readonly);
        assert_eq!(PropertyModifier::Default.to_string(), "default");
        assert!("required".parse::<PropertyModifier>().is_err());
    }
}
