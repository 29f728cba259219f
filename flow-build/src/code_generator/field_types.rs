use prost_types::field_options::JsType;

use super::*;

/// Bytes are accepted either raw or as a base64 encoded string.
pub(super) const BYTES_TYPE: &str = "Uint8Array | string";

impl CodeGenerator<'_> {
    /// Resolves the element type of a field, honouring its `jstype` option.
    pub(super) fn resolve_field_type(&self, field: &FieldDescriptorProto) -> Result<String> {
        let type_ = field.r#type();
        if is_integer(type_) {
            match field.options.as_ref().map(|options| options.jstype()) {
                Some(JsType::JsNumber) => return Ok(String::from("number")),
                Some(JsType::JsString) => return Ok(String::from("string")),
                Some(JsType::JsNormal) | None => {}
            }
        }
        self.resolve_type(type_, field.type_name.as_deref())
    }

    /// Resolves a wire type to its Flow type. Per-field options are not consulted.
    pub(super) fn resolve_type(&self, type_: Type, type_name: Option<&str>) -> Result<String> {
        Ok(match type_ {
            Type::Double
            | Type::Float
            | Type::Int64
            | Type::Uint64
            | Type::Int32
            | Type::Fixed64
            | Type::Fixed32
            | Type::Uint32
            | Type::Sfixed32
            | Type::Sfixed64
            | Type::Sint32
            | Type::Sint64 => String::from("number"),
            Type::Bool => String::from("boolean"),
            Type::String => String::from("string"),
            Type::Bytes => String::from(BYTES_TYPE),
            Type::Group | Type::Message => self.resolve_message_ident(type_name)?,
            Type::Enum => format!("$Values<typeof {}>", self.resolve_enum_ident(type_name)?),
        })
    }

    fn resolve_message_ident(&self, type_name: Option<&str>) -> Result<String> {
        let fq_name = FullyQualifiedName::from_type_name(type_name.unwrap_or_default());
        let entry = self
            .export_map
            .message(&fq_name)
            .ok_or_else(|| Error::MissingMessageExport(fq_name.without_leading_dot().to_owned()))?;
        Ok(self.qualify(&entry.file, fq_name.within_package(&entry.package)))
    }

    fn resolve_enum_ident(&self, type_name: Option<&str>) -> Result<String> {
        let fq_name = FullyQualifiedName::from_type_name(type_name.unwrap_or_default());
        let entry = self
            .export_map
            .enumeration(&fq_name)
            .ok_or_else(|| Error::MissingEnumExport(fq_name.without_leading_dot().to_owned()))?;
        Ok(self.qualify(&entry.file, fq_name.within_package(&entry.package)))
    }

    /// Types declared in another file are reached through that file's import namespace.
    fn qualify(&self, declaring_file: &str, within_namespace: String) -> String {
        if declaring_file == self.file_name {
            within_namespace
        } else {
            format!(
                "{}.{}",
                file_path_to_pseudo_namespace(declaring_file),
                within_namespace
            )
        }
    }
}

fn is_integer(type_: Type) -> bool {
    matches!(
        type_,
        Type::Int32
            | Type::Int64
            | Type::Uint32
            | Type::Uint64
            | Type::Sint32
            | Type::Sint64
            | Type::Fixed32
            | Type::Fixed64
            | Type::Sfixed32
            | Type::Sfixed64
    )
}
