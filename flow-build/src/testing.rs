//! Builders for the descriptors `protoc` would hand the plugin, so tests can describe schemas
//! without invoking `protoc`.

use heck::ToUpperCamelCase;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::field_options::JsType;
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FieldOptions, FileDescriptorProto, MessageOptions, OneofDescriptorProto,
};

pub fn file(name: &str, package: &str, syntax: &str) -> FileBuilder {
    FileBuilder {
        file: FileDescriptorProto {
            name: Some(name.to_owned()),
            package: (!package.is_empty()).then(|| package.to_owned()),
            syntax: (!syntax.is_empty()).then(|| syntax.to_owned()),
            ..Default::default()
        },
        messages: Vec::new(),
    }
}

pub fn message(name: &str) -> MessageBuilder {
    MessageBuilder {
        message: DescriptorProto {
            name: Some(name.to_owned()),
            ..Default::default()
        },
        nested: Vec::new(),
        map_fields: Vec::new(),
    }
}

pub fn field(name: &str, number: i32, type_: Type) -> FieldBuilder {
    FieldBuilder {
        field: FieldDescriptorProto {
            name: Some(name.to_owned()),
            number: Some(number),
            label: Some(Label::Optional as i32),
            r#type: Some(type_ as i32),
            ..Default::default()
        },
    }
}

pub fn enumeration(name: &str, values: &[(&str, i32)]) -> EnumDescriptorProto {
    EnumDescriptorProto {
        name: Some(name.to_owned()),
        value: values
            .iter()
            .map(|&(name, number)| EnumValueDescriptorProto {
                name: Some(name.to_owned()),
                number: Some(number),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// One side of a map entry.
pub struct MapSide {
    type_: Type,
    type_name: Option<String>,
}

pub fn scalar(type_: Type) -> MapSide {
    MapSide {
        type_,
        type_name: None,
    }
}

pub fn reference(type_: Type, type_name: &str) -> MapSide {
    MapSide {
        type_,
        type_name: Some(type_name.to_owned()),
    }
}

impl MapSide {
    fn into_field(self, name: &str, number: i32) -> FieldDescriptorProto {
        let mut field = field(name, number, self.type_).build();
        field.type_name = self.type_name;
        field
    }
}

pub struct FileBuilder {
    file: FileDescriptorProto,
    messages: Vec<MessageBuilder>,
}

impl FileBuilder {
    pub fn dependency(mut self, name: &str) -> Self {
        self.file.dependency.push(name.to_owned());
        self
    }

    pub fn message(mut self, message: MessageBuilder) -> Self {
        self.messages.push(message);
        self
    }

    pub fn raw_message(mut self, message: DescriptorProto) -> Self {
        self.messages.push(MessageBuilder {
            message,
            nested: Vec::new(),
            map_fields: Vec::new(),
        });
        self
    }

    pub fn enumeration(mut self, desc: EnumDescriptorProto) -> Self {
        self.file.enum_type.push(desc);
        self
    }

    pub fn extension(mut self, extension: FieldDescriptorProto) -> Self {
        self.file.extension.push(extension);
        self
    }

    pub fn build(self) -> FileDescriptorProto {
        let FileBuilder { mut file, messages } = self;
        let scope = match file.package() {
            "" => String::new(),
            package => format!(".{}", package),
        };
        file.message_type = messages
            .into_iter()
            .map(|message| message.build_in(&scope))
            .collect();
        file
    }
}

pub struct MessageBuilder {
    message: DescriptorProto,
    nested: Vec<MessageBuilder>,
    /// Index of the map field in `message.field`, with its entry name and key/value types.
    map_fields: Vec<(usize, String, MapSide, MapSide)>,
}

impl MessageBuilder {
    pub fn field(mut self, field: FieldBuilder) -> Self {
        self.message.field.push(field.build());
        self
    }

    pub fn nested(mut self, message: MessageBuilder) -> Self {
        self.nested.push(message);
        self
    }

    pub fn raw_nested(mut self, message: DescriptorProto) -> Self {
        self.message.nested_type.push(message);
        self
    }

    pub fn enumeration(mut self, desc: EnumDescriptorProto) -> Self {
        self.message.enum_type.push(desc);
        self
    }

    pub fn oneof(mut self, name: &str) -> Self {
        self.message.oneof_decl.push(OneofDescriptorProto {
            name: Some(name.to_owned()),
            ..Default::default()
        });
        self
    }

    pub fn extension(mut self, extension: FieldBuilder) -> Self {
        self.message.extension.push(extension.build());
        self
    }

    /// Adds a `map<K, V>` field the way protoc desugars it: a repeated field referencing a
    /// nested `<Name>Entry` message flagged as a map entry.
    pub fn map_field(mut self, name: &str, number: i32, key: MapSide, value: MapSide) -> Self {
        let entry_name = format!("{}Entry", name.to_upper_camel_case());
        self.map_fields
            .push((self.message.field.len(), entry_name, key, value));
        self.message
            .field
            .push(field(name, number, Type::Message).repeated().build());
        self
    }

    pub fn build(self) -> DescriptorProto {
        self.build_in("")
    }

    fn build_in(self, scope: &str) -> DescriptorProto {
        let MessageBuilder {
            mut message,
            nested,
            map_fields,
        } = self;
        let fq_message_name = format!("{}.{}", scope, message.name());

        for nested in nested {
            let nested = nested.build_in(&fq_message_name);
            message.nested_type.push(nested);
        }

        for (index, entry_name, key, value) in map_fields {
            message.field[index].type_name = Some(format!("{}.{}", fq_message_name, entry_name));
            message.nested_type.push(DescriptorProto {
                name: Some(entry_name),
                field: vec![key.into_field("key", 1), value.into_field("value", 2)],
                options: Some(MessageOptions {
                    map_entry: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            });
        }

        message
    }
}

pub struct FieldBuilder {
    field: FieldDescriptorProto,
}

impl FieldBuilder {
    pub fn type_name(mut self, type_name: &str) -> Self {
        self.field.type_name = Some(type_name.to_owned());
        self
    }

    pub fn repeated(mut self) -> Self {
        self.field.label = Some(Label::Repeated as i32);
        self
    }

    pub fn required(mut self) -> Self {
        self.field.label = Some(Label::Required as i32);
        self
    }

    pub fn oneof_index(mut self, oneof_index: i32) -> Self {
        self.field.oneof_index = Some(oneof_index);
        self
    }

    pub fn proto3_optional(mut self) -> Self {
        self.field.proto3_optional = Some(true);
        self
    }

    pub fn jstype(mut self, jstype: JsType) -> Self {
        self.field.options = Some(FieldOptions {
            jstype: Some(jstype as i32),
            ..Default::default()
        });
        self
    }

    pub fn extendee(mut self, extendee: &str) -> Self {
        self.field.extendee = Some(extendee.to_owned());
        self
    }

    pub fn build(self) -> FieldDescriptorProto {
        self.field
    }
}
