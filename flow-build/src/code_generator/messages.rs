use super::*;

mod oneof;

type OneofFields<'b> = MultiMap<i32, &'b FieldDescriptorProto>;

impl CodeGenerator<'_> {
    /// Renders `message` as an object type, followed by everything nested in it.
    ///
    /// Map entry messages render to the empty string: their fields are inlined as key/value
    /// pairs wherever the map is used.
    pub(super) fn render_message(
        &self,
        message: &DescriptorProto,
        indent_level: usize,
        prefix: Option<&str>,
    ) -> Result<String> {
        debug!("  message: {:?}", message.name());

        let message_name = prefixed_name(prefix, message.name());
        if is_map_entry(message) {
            return Ok(String::new());
        }

        let (resolved_fields, oneof_fields) = self.resolve_message_fields(&message.field)?;

        let (open, close) = self.object_delimiters();
        let mut object_type = Printer::new(indent_level);
        object_type.print_ln(&format!("export type {} = {}", message_name, open));
        for resolved_field in &resolved_fields {
            object_type.print_indented_ln(resolved_field);
        }
        object_type.print_ln(close);
        object_type.print_empty_ln();

        let mut printer = Printer::new(indent_level);
        printer.print(&object_type.into_output());

        for nested in &message.nested_type {
            printer.print(&self.render_message(nested, indent_level, Some(&message_name))?);
        }
        for desc in &message.enum_type {
            printer.print(&self.render_enum(desc, indent_level, Some(&message_name)));
        }
        for (idx, oneof) in message.oneof_decl.iter().enumerate() {
            let fields = oneof_fields
                .get_vec(&(idx as i32))
                .map(Vec::as_slice)
                .unwrap_or_default();
            printer.print(&self.render_oneof(oneof, fields, indent_level, &message_name));
        }
        for extension in &message.extension {
            printer.print(&self.render_extension(extension, indent_level, Some(&message_name))?);
        }

        Ok(printer.into_output())
    }

    /// Renders one property line per field, in declaration order, and groups the oneof members
    /// by oneof index.
    fn resolve_message_fields<'b>(
        &self,
        fields: &'b [FieldDescriptorProto],
    ) -> Result<(Vec<String>, OneofFields<'b>)> {
        let mut resolved_fields = Vec::with_capacity(fields.len());
        let mut oneof_fields = OneofFields::new();

        for field in fields {
            if let Some(oneof_index) = field.oneof_index {
                oneof_fields.insert(oneof_index, field);
            }

            let resolved_field = match self.resolve_map_entry(field)? {
                Some(map_field) => self.resolve_map_field(field, map_field)?,
                None => self.resolve_field(field)?,
            };
            resolved_fields.push(resolved_field);
        }

        Ok((resolved_fields, oneof_fields))
    }

    fn resolve_field(&self, field: &FieldDescriptorProto) -> Result<String> {
        let repeated = field.label() == Label::Repeated;
        let optional = self.optional(field);
        let ty = self.resolve_field_type(field)?;

        debug!(
            "    field: {:?}, type: {:?}, optional: {}",
            field.name(),
            ty,
            optional
        );

        let field_type = match repeated {
            true => format!("Array<{}>", ty),
            false => ty,
        };

        Ok(format!(
            "{}{}: {},",
            to_field_name(field.name()),
            if optional { "?" } else { "" },
            field_type
        ))
    }

    /// Returns the key/value types of `field` if it is a `map<K, V>` field.
    fn resolve_map_entry(&self, field: &FieldDescriptorProto) -> Result<Option<&MapFieldOptions>> {
        if field.label() != Label::Repeated || field.r#type() != Type::Message {
            return Ok(None);
        }

        let fq_name = FullyQualifiedName::from_type_name(field.type_name());
        let entry = self
            .export_map
            .message(&fq_name)
            .ok_or_else(|| Error::MissingMessageExport(fq_name.without_leading_dot().to_owned()))?;

        match (entry.map_entry, entry.map_field.as_ref()) {
            (false, _) => Ok(None),
            (true, Some(map_field)) => Ok(Some(map_field)),
            (true, None) => Err(Error::MalformedMapEntry(
                fq_name.without_leading_dot().to_owned(),
            )),
        }
    }

    fn resolve_map_field(
        &self,
        field: &FieldDescriptorProto,
        map_field: &MapFieldOptions,
    ) -> Result<String> {
        let (key_ty, value_ty) = self.resolve_map_types(map_field)?;

        debug!(
            "    map field: {:?}, key type: {:?}, value type: {:?}",
            field.name(),
            key_ty,
            value_ty
        );

        Ok(format!(
            "{}: Array<[{}, {}]>,",
            to_field_name(field.name()),
            key_ty,
            value_ty
        ))
    }

    /// Map keys and values never carry field options, so `jstype` is ignored here. Bytes
    /// values widen to the byte/string form and enum values to the union of their values.
    fn resolve_map_types(&self, map_field: &MapFieldOptions) -> Result<(String, String)> {
        let MapFieldOptions { key, value } = map_field;
        let key_ty = self.resolve_type(key.r#type, key.type_name.as_deref())?;
        let value_ty = self.resolve_type(value.r#type, value.type_name.as_deref())?;
        Ok((key_ty, value_ty))
    }

    /// Returns `true` if the property is marked optional (`name?: T`).
    pub(super) fn optional(&self, field: &FieldDescriptorProto) -> bool {
        let required_message = field.label() == Label::Required
            && matches!(field.r#type(), Type::Message | Type::Group);
        has_presence(field, self.syntax) && !(self.syntax.explicit_presence() && required_message)
    }
}

/// Returns `true` if the field may be absent from a conforming value.
///
/// Evaluated in order: repeated fields are never absent, only empty; oneof members and message
/// fields always may be absent; everything else depends on the file's dialect.
pub(super) fn has_presence(field: &FieldDescriptorProto, syntax: Syntax) -> bool {
    if field.label() == Label::Repeated {
        return false;
    }

    if field.oneof_index.is_some() {
        return true;
    }

    if matches!(field.r#type(), Type::Message | Type::Group) {
        return true;
    }

    syntax.explicit_presence()
}

fn is_map_entry(message: &DescriptorProto) -> bool {
    message
        .options
        .as_ref()
        .map_or(false, |options| options.map_entry())
}
