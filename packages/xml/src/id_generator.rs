use crate::nodable::XmlNodableContext;
use crate::node::XmlNode;
use crc32fast::Hasher;

/// Attribute stamped by `IdAssigningContext`
pub const ID_ATTRIBUTE: &str = "Id";

/// Stable document id: CRC32 of the `qml://`-prefixed file name
pub fn get_document_id(file_name: &str) -> String {
    let mut buff = String::from(file_name);
    if !file_name.starts_with("qml://") {
        buff = format!("qml://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for exported nodes of one document
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(file_name: &str) -> Self {
        Self {
            seed: get_document_id(file_name),
            count: 0,
        }
    }

    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of ids handed out so far
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Export context that gives every finished node an `Id` attribute
///
/// Children finish before their parents, so ids are assigned in post-order.
#[derive(Debug, Clone)]
pub struct IdAssigningContext {
    generator: IdGenerator,
}

impl IdAssigningContext {
    pub fn new(file_name: &str) -> Self {
        Self {
            generator: IdGenerator::new(file_name),
        }
    }

    pub fn generator(&self) -> &IdGenerator {
        &self.generator
    }
}

impl XmlNodableContext for IdAssigningContext {
    fn finish_node(&mut self, node: &mut XmlNode) {
        node.set_attribute(ID_ATTRIBUTE, self.generator.new_id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_generation() {
        let id1 = get_document_id("main.qml");
        let id2 = get_document_id("main.qml");
        assert_eq!(id1, id2);

        // Prefix is optional
        assert_eq!(id1, get_document_id("qml://main.qml"));

        let id3 = get_document_id("Button.qml");
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new("main.qml");

        let id1 = gen.new_id();
        let id2 = gen.new_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id1.starts_with(gen.seed()));
        assert_eq!(gen.count(), 2);
    }

    #[test]
    fn test_context_stamps_ids() {
        let mut ctx = IdAssigningContext::new("main.qml");
        let mut a = XmlNode::new("Item");
        let mut b = XmlNode::new("Item");
        ctx.finish_node(&mut a);
        ctx.finish_node(&mut b);

        let seed = ctx.generator().seed().to_string();
        assert_eq!(a.attribute(ID_ATTRIBUTE), Some(format!("{}-1", seed).as_str()));
        assert_eq!(b.attribute(ID_ATTRIBUTE), Some(format!("{}-2", seed).as_str()));
    }
}
