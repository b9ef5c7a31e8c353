use qmltree::{Item, ItemKind};

/// Generic read-only walk over a QML tree
///
/// Works on any node without knowing its concrete type: containers are
/// entered through `as_complex()`, slotted nodes through `members()`.
/// Override `visit_item` to act on nodes, and call `walk_item` to keep
/// descending.
pub trait Visitor: Sized {
    fn visit_item(&mut self, item: &dyn Item) {
        walk_item(self, item);
    }

    /// Called for every member key, set or not
    fn visit_member(&mut self, _name: &'static str, member: Option<&dyn Item>) {
        if let Some(item) = member {
            self.visit_item(item);
        }
    }
}

/// Visit container entries in order, then members in key order
pub fn walk_item<V: Visitor>(visitor: &mut V, item: &dyn Item) {
    if let Some(complex) = item.as_complex() {
        for child in complex.iter() {
            visitor.visit_item(child);
        }
    }
    for (name, member) in item.members() {
        visitor.visit_member(name, member);
    }
}

struct Counter {
    count: usize,
}

impl Visitor for Counter {
    fn visit_item(&mut self, item: &dyn Item) {
        self.count += 1;
        walk_item(self, item);
    }
}

/// Number of nodes in the subtree, root included
pub fn count_items(root: &dyn Item) -> usize {
    let mut counter = Counter { count: 0 };
    counter.visit_item(root);
    counter.count
}

struct KindCollector {
    kinds: Vec<ItemKind>,
}

impl Visitor for KindCollector {
    fn visit_item(&mut self, item: &dyn Item) {
        self.kinds.push(item.kind());
        walk_item(self, item);
    }
}

/// Kinds of every node, pre-order
pub fn collect_kinds(root: &dyn Item) -> Vec<ItemKind> {
    let mut collector = KindCollector { kinds: Vec::new() };
    collector.visit_item(root);
    collector.kinds
}
