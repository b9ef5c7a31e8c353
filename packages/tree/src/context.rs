use crate::config::EmitConfig;
use crate::dump::SourceWriter;

/// State threaded through source emission
///
/// Nodes may consult it but never change it during a traversal.
#[derive(Debug, Clone, Default)]
pub struct TreeContext {
    config: EmitConfig,
}

impl TreeContext {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Writer set up with this context's indentation unit
    pub fn writer(&self) -> SourceWriter {
        SourceWriter::with_indent(&self.config.indent)
    }
}
