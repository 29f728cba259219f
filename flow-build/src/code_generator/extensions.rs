use super::*;

impl CodeGenerator<'_> {
    /// Renders an extension as an object type describing the extended message, the field number
    /// and the value type.
    pub(super) fn render_extension(
        &self,
        extension: &FieldDescriptorProto,
        indent_level: usize,
        prefix: Option<&str>,
    ) -> Result<String> {
        debug!("  extension: {:?}", extension.name());

        let extension_name = prefixed_name(prefix, &to_field_name(extension.name()));
        let ty = self.resolve_field_type(extension)?;
        let value_type = match extension.label() {
            Label::Repeated => format!("Array<{}>", ty),
            _ => ty,
        };
        let extendee = FullyQualifiedName::from_type_name(extension.extendee());

        let (open, close) = self.object_delimiters();
        let mut printer = Printer::new(indent_level);
        printer.print_ln(&format!("export type {} = {}", extension_name, open));
        printer.print_indented_ln(&format!("fieldNumber: {},", extension.number()));
        printer.print_indented_ln(&format!(
            "extendee: \"{}\",",
            extendee.without_leading_dot()
        ));
        printer.print_indented_ln(&format!(
            "value{}: {},",
            if self.optional(extension) { "?" } else { "" },
            value_type
        ));
        printer.print_ln(close);
        printer.print_empty_ln();
        Ok(printer.into_output())
    }
}
