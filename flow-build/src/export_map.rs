use std::collections::HashMap;

use log::debug;
use prost_types::{
    field_descriptor_proto::Type, DescriptorProto, FieldDescriptorProto, FileDescriptorProto,
};

use crate::FullyQualifiedName;

/// The wire type and referenced type of one half of a map entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFieldType {
    pub r#type: Type,
    /// Fully qualified name of the referenced message or enum, if any.
    pub type_name: Option<String>,
}

impl MapFieldType {
    fn from_field(field: &FieldDescriptorProto) -> Self {
        Self {
            r#type: field.r#type(),
            type_name: field.type_name.clone(),
        }
    }
}

/// Key and value types synthesized for a `map<K, V>` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFieldOptions {
    pub key: MapFieldType,
    pub value: MapFieldType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMessageEntry {
    /// Name of the `.proto` file declaring the message.
    pub file: String,
    pub package: String,
    pub map_entry: bool,
    /// `None` for ordinary messages, and for map entries missing `key` or `value`.
    pub map_field: Option<MapFieldOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEnumEntry {
    pub file: String,
    pub package: String,
}

/// `ExportMap` records where every message and enum of a request is declared, so that field
/// types can be qualified across files.
///
/// It is built once per request and only read afterwards.
#[derive(Debug, Default)]
pub struct ExportMap {
    messages: HashMap<FullyQualifiedName, ExportMessageEntry>,
    enums: HashMap<FullyQualifiedName, ExportEnumEntry>,
}

impl ExportMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_files<'a>(files: impl IntoIterator<Item = &'a FileDescriptorProto>) -> Self {
        let mut export_map = Self::new();
        for file in files {
            export_map.add_file(file);
        }
        export_map
    }

    pub fn add_file(&mut self, file: &FileDescriptorProto) {
        debug!("exports: {:?}", file.name());

        let package = file.package();
        // Empty for files without a package; `join` still yields a leading dot.
        let scope = FullyQualifiedName::new(package, &[] as &[&str], "");
        for message in &file.message_type {
            self.add_message(file.name(), package, &scope, message);
        }
        for desc in &file.enum_type {
            self.add_enum(file.name(), package, &scope.join(desc.name()));
        }
    }

    fn add_message(
        &mut self,
        file_name: &str,
        package: &str,
        scope: &FullyQualifiedName,
        message: &DescriptorProto,
    ) {
        let fq_message_name = scope.join(message.name());

        let map_entry = message
            .options
            .as_ref()
            .map_or(false, |options| options.map_entry());
        let map_field = map_entry.then(|| map_field_options(message)).flatten();

        for nested in &message.nested_type {
            self.add_message(file_name, package, &fq_message_name, nested);
        }
        for desc in &message.enum_type {
            self.add_enum(file_name, package, &fq_message_name.join(desc.name()));
        }

        self.messages.insert(
            fq_message_name,
            ExportMessageEntry {
                file: file_name.to_owned(),
                package: package.to_owned(),
                map_entry,
                map_field,
            },
        );
    }

    fn add_enum(&mut self, file_name: &str, package: &str, fq_enum_name: &FullyQualifiedName) {
        self.enums.insert(
            fq_enum_name.clone(),
            ExportEnumEntry {
                file: file_name.to_owned(),
                package: package.to_owned(),
            },
        );
    }

    pub fn message(&self, fq_message_name: &FullyQualifiedName) -> Option<&ExportMessageEntry> {
        self.messages.get(fq_message_name)
    }

    pub fn enumeration(&self, fq_enum_name: &FullyQualifiedName) -> Option<&ExportEnumEntry> {
        self.enums.get(fq_enum_name)
    }
}

fn map_field_options(message: &DescriptorProto) -> Option<MapFieldOptions> {
    let key = message.field.iter().find(|field| field.name() == "key")?;
    let value = message.field.iter().find(|field| field.name() == "value")?;
    Some(MapFieldOptions {
        key: MapFieldType::from_field(key),
        value: MapFieldType::from_field(value),
    })
}
