use super::*;

impl CodeGenerator<'_> {
    /// Renders an enum as a frozen object mapping value names to numbers, so that
    /// `$Values<typeof Name>` is the union of the declared numbers.
    pub(super) fn render_enum(
        &self,
        desc: &EnumDescriptorProto,
        indent_level: usize,
        prefix: Option<&str>,
    ) -> String {
        debug!("  enum: {:?}", desc.name());

        let enum_name = prefixed_name(prefix, desc.name());

        let mut printer = Printer::new(indent_level);
        printer.print_ln(&format!("export const {} = Object.freeze({{", enum_name));
        for value in &desc.value {
            printer.print_indented_ln(&format!("{}: {},", value.name(), value.number()));
        }
        printer.print_ln("});");
        printer.print_empty_ln();
        printer.into_output()
    }
}
