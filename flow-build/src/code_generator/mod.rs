use std::collections::{hash_map, HashMap};

use log::debug;
use multimap::MultiMap;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto,
    OneofDescriptorProto,
};

use crate::export_map::{ExportMap, MapFieldOptions};
use crate::ident::{
    file_path_to_import_name, file_path_to_pseudo_namespace, path_to_root, to_field_name,
    to_oneof_name,
};
use crate::printer::Printer;
use crate::{Config, Error, FullyQualifiedName, Result};

mod enums;
mod extensions;
mod field_types;
mod messages;

mod syntax;
use syntax::Syntax;

/// Renders the Flow declarations of a single `.proto` file.
///
/// A `CodeGenerator` only borrows the file, the registry and the configuration; every render
/// method returns the text of its subtree, which the caller appends to its own buffer.
pub struct CodeGenerator<'a> {
    config: &'a Config,
    export_map: &'a ExportMap,
    file_name: &'a str,
    package: &'a str,
    syntax: Syntax,
}

impl<'a> CodeGenerator<'a> {
    fn new(
        config: &'a Config,
        export_map: &'a ExportMap,
        file: &'a FileDescriptorProto,
    ) -> Result<Self> {
        Ok(Self {
            config,
            export_map,
            file_name: file.name(),
            package: file.package(),
            syntax: Syntax::from_file(file)?,
        })
    }

    pub fn generate(
        config: &Config,
        export_map: &ExportMap,
        file: &FileDescriptorProto,
    ) -> Result<String> {
        let code_gen = CodeGenerator::new(config, export_map, file)?;

        debug!(
            "file: {:?}, package: {:?}, syntax: {:?}",
            code_gen.file_name, code_gen.package, code_gen.syntax
        );

        let mut printer = Printer::new(0);
        printer.print_ln("// @flow");
        printer.print_ln(&format!("// package: {}", code_gen.package));
        printer.print_ln(&format!("// file: {}", code_gen.file_name));
        printer.print_empty_ln();

        let imports = code_gen.resolve_imports(&file.dependency)?;
        if !imports.is_empty() {
            for import in &imports {
                printer.print_ln(import);
            }
            printer.print_empty_ln();
        }

        for message in &file.message_type {
            printer.print(&code_gen.render_message(message, 0, None)?);
        }
        for extension in &file.extension {
            printer.print(&code_gen.render_extension(extension, 0, None)?);
        }
        for desc in &file.enum_type {
            printer.print(&code_gen.render_enum(desc, 0, None));
        }

        Ok(printer.into_output())
    }

    /// One `import * as` line per dependency, in declaration order.
    fn resolve_imports(&self, dependencies: &[String]) -> Result<Vec<String>> {
        let mut namespaces: HashMap<String, &str> = HashMap::new();
        let mut imports = Vec::with_capacity(dependencies.len());

        for dependency in dependencies {
            let namespace = file_path_to_pseudo_namespace(dependency);
            match namespaces.entry(namespace.clone()) {
                hash_map::Entry::Occupied(occupied) => {
                    return Err(Error::NamespaceCollision {
                        namespace,
                        first: (*occupied.get()).to_owned(),
                        second: dependency.clone(),
                    });
                }
                hash_map::Entry::Vacant(vacant) => vacant.insert(dependency),
            };

            let path = if dependency.starts_with("google/protobuf/") {
                format!(
                    "{}/{}",
                    self.config.well_known_root,
                    file_path_to_import_name(dependency)
                )
            } else {
                format!(
                    "{}{}",
                    path_to_root(self.file_name),
                    file_path_to_import_name(dependency)
                )
            };
            imports.push(format!("import * as {} from \"{}\";", namespace, path));
        }

        Ok(imports)
    }

    /// Opening and closing delimiters of a generated object type.
    fn object_delimiters(&self) -> (&'static str, &'static str) {
        match self.config.exact_objects {
            true => ("{|", "|}"),
            false => ("{", "}"),
        }
    }
}

/// Flattens a nested declaration name: `Outer` and `Inner` become `Outer_Inner`.
fn prefixed_name(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}_{}", prefix, name),
        _ => name.to_owned(),
    }
}
