/// Indentation-aware text sink shared by every node's source emission
///
/// Nodes never indent their own first line: the caller has already placed
/// the cursor. Continuation lines are written through `indented*` with the
/// level the node was given.
#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    indent_string: String,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::with_indent("    ")
    }

    pub fn with_indent(indent: &str) -> Self {
        Self {
            output: String::new(),
            indent_string: indent.to_string(),
        }
    }

    /// Indent, text, newline
    pub fn indented(&mut self, level: usize, text: &str) {
        self.indented_no_newline(level, text);
        self.newline();
    }

    pub fn indented_no_newline(&mut self, level: usize, text: &str) {
        self.write_indent(level);
        self.output.push_str(text);
    }

    pub fn no_indent_no_newline(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.output.push_str(&self.indent_string);
        }
    }
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new()
    }
}
