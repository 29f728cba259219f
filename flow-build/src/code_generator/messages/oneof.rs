use super::*;

impl CodeGenerator<'_> {
    /// Renders the case lookup of a oneof: one entry per member field, keyed by the upper-cased
    /// field name and valued by its field number, plus the `<ONEOF>_NOT_SET` sentinel.
    pub(super) fn render_oneof(
        &self,
        oneof: &OneofDescriptorProto,
        fields: &[&FieldDescriptorProto],
        indent_level: usize,
        prefix: &str,
    ) -> String {
        // optional fields create a synthetic oneof that we want to skip
        if !fields.is_empty() && fields.iter().all(|field| field.proto3_optional()) {
            return String::new();
        }

        debug!("    oneof: {:?}, fields: {}", oneof.name(), fields.len());

        let case_name = prefixed_name(Some(prefix), &format!("{}Case", to_oneof_name(oneof.name())));

        let mut printer = Printer::new(indent_level);
        printer.print_ln(&format!("export const {} = Object.freeze({{", case_name));
        printer.print_indented_ln(&format!("{}_NOT_SET: 0,", oneof.name().to_uppercase()));
        for field in fields {
            printer.print_indented_ln(&format!(
                "{}: {},",
                field.name().to_uppercase(),
                field.number()
            ));
        }
        printer.print_ln("});");
        printer.print_empty_ln();
        printer.into_output()
    }
}
