/// An indentation-aware line buffer.
///
/// Every renderer owns a `Printer` scoped to its indent level and hands the finished text back
/// to its caller, which splices it into its own buffer with [`Printer::print`].
#[derive(Debug, Default)]
pub struct Printer {
    indent: String,
    output: String,
}

impl Printer {
    pub fn new(indent_level: usize) -> Self {
        Self {
            indent: "  ".repeat(indent_level),
            output: String::new(),
        }
    }

    pub fn print_ln(&mut self, line: &str) {
        self.output.push_str(&self.indent);
        self.output.push_str(line);
        self.output.push('\n');
    }

    /// Prints `line` one level deeper than the printer's own indent.
    pub fn print_indented_ln(&mut self, line: &str) {
        self.output.push_str(&self.indent);
        self.output.push_str("  ");
        self.output.push_str(line);
        self.output.push('\n');
    }

    pub fn print(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn print_empty_ln(&mut self) {
        self.output.push('\n');
    }

    pub fn into_output(self) -> String {
        self.output
    }
}
