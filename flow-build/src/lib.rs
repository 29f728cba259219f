#![doc(html_root_url = "https://docs.rs/flow-build/0.1.0")]

//! `flow-build` renders Protocol Buffers schema descriptors into [Flow] type declarations.
//!
//! The descriptors are the `FileDescriptorProto`s `protoc` hands to a plugin. Every message
//! becomes an exported object type, every enum a frozen object whose values form the type
//! `$Values<typeof Enum>`, and every oneof a frozen object of field cases. Nested declarations
//! are flattened with `_`, so `Outer.Inner` is exported as `Outer_Inner`.
//!
//! ## Example
//!
//! The crate is normally driven by the `protoc-gen-flow` plugin:
//!
//! ```bash
//! $ protoc --plugin=protoc-gen-flow=target/release/protoc-gen-flow \
//!     --flow_out=out --flow_opt=exact_objects \
//!     shop/v1/order.proto
//! ```
//!
//! A `shop/v1/order.proto` containing
//!
//! ```proto
//! syntax = "proto3";
//!
//! package shop.v1;
//!
//! message Order {
//!   message Line {
//!     string sku = 1;
//!   }
//!
//!   string id = 1;
//!   repeated Line lines = 2;
//!   map<string, string> labels = 3;
//! }
//! ```
//!
//! is written to `out/shop/v1/order_pb.js` as
//!
//! ```js
//! // @flow
//! // package: shop.v1
//! // file: shop/v1/order.proto
//!
//! export type Order = {|
//!   id: string,
//!   lines: Array<Order_Line>,
//!   labels: Array<[string, string]>,
//! |}
//!
//! export type Order_Line = {|
//!   sku: string,
//! |}
//! ```
//!
//! The same output is available without `protoc` through [`Config::generate`], given the
//! descriptors of every file involved.
//!
//! ## Plugin options
//!
//! * `exact_objects[=true|false]`: emit exact object types (`{| ... |}`).
//! * `well_known_root=<path>`: module prefix for imports of `google/protobuf/*.proto`,
//!   `google-protobuf` by default.
//!
//! [Flow]: https://flow.org

use std::collections::HashMap;

use log::{debug, error};
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::FileDescriptorProto;

mod code_generator;
mod error;
mod export_map;
mod fully_qualified_name;
mod ident;
mod printer;

#[cfg(test)]
mod testing;

use crate::code_generator::CodeGenerator;
use crate::ident::file_path_to_output_name;

pub use crate::error::{Error, Result};
pub use crate::export_map::{
    ExportEnumEntry, ExportMap, ExportMessageEntry, MapFieldOptions, MapFieldType,
};
pub use crate::fully_qualified_name::FullyQualifiedName;

const DEFAULT_WELL_KNOWN_ROOT: &str = "google-protobuf";

/// Configuration options for Flow declaration generation.
///
/// This configuration builder can be used to set non-default code generation options.
#[derive(Debug, Clone)]
pub struct Config {
    exact_objects: bool,
    well_known_root: String,
}

impl Config {
    /// Creates a new code generator configuration with default options.
    pub fn new() -> Config {
        Config::default()
    }

    /// Creates a configuration from the parameter string `protoc` passes to the plugin, a comma
    /// separated list of `key` or `key=value` options.
    ///
    /// # Example
    ///
    /// ```rust
    /// let config = flow_build::Config::from_parameter("exact_objects,well_known_root=@pb")?;
    /// # Ok::<(), flow_build::Error>(())
    /// ```
    pub fn from_parameter(parameter: &str) -> Result<Config> {
        let mut config = Config::new();

        for option in parameter.split(',').map(str::trim) {
            if option.is_empty() {
                continue;
            }

            match option.split_once('=') {
                Some(("exact_objects", value)) => {
                    let exact_objects = value
                        .parse()
                        .map_err(|_| Error::InvalidParameter(option.to_owned()))?;
                    config.exact_objects(exact_objects);
                }
                None if option == "exact_objects" => {
                    config.exact_objects(true);
                }
                Some(("well_known_root", value)) if !value.is_empty() => {
                    config.well_known_root(value);
                }
                _ => return Err(Error::InvalidParameter(option.to_owned())),
            }
        }

        debug!("config: {:?}", config);
        Ok(config)
    }

    /// Emit exact object types, `{| ... |}`, which reject properties not declared in the schema.
    ///
    /// Object types are inexact by default.
    pub fn exact_objects(&mut self, enabled: bool) -> &mut Self {
        self.exact_objects = enabled;
        self
    }

    /// Set the module prefix that imports of the well-known types (`google/protobuf/*.proto`)
    /// resolve against.
    ///
    /// Defaults to `google-protobuf`, the package shipping the generated well-known types.
    pub fn well_known_root<S>(&mut self, root: S) -> &mut Self
    where
        S: Into<String>,
    {
        let mut root = root.into();
        while root.ends_with('/') {
            root.pop();
        }
        self.well_known_root = root;
        self
    }

    /// Generates the declarations of every file in `files_to_generate`.
    ///
    /// `files` must hold the descriptor of each file to generate and of every file they
    /// transitively import, as in `CodeGeneratorRequest::proto_file`. Returns the output path and
    /// contents of each generated file, in the order of `files_to_generate`.
    pub fn generate(
        &self,
        files: &[FileDescriptorProto],
        files_to_generate: &[String],
    ) -> Result<Vec<(String, String)>> {
        let export_map = ExportMap::from_files(files);
        let files_by_name: HashMap<&str, &FileDescriptorProto> =
            files.iter().map(|file| (file.name(), file)).collect();

        files_to_generate
            .iter()
            .map(|file_name| {
                let file = files_by_name
                    .get(file_name.as_str())
                    .ok_or_else(|| Error::MissingFile(file_name.clone()))?;
                let content = CodeGenerator::generate(self, &export_map, file)?;
                Ok((file_path_to_output_name(file_name), content))
            })
            .collect()
    }

    /// Runs a `protoc` plugin request.
    ///
    /// Failures are reported through `CodeGeneratorResponse::error`, in which case no file is
    /// returned.
    pub fn compile_request(&self, request: CodeGeneratorRequest) -> CodeGeneratorResponse {
        let mut response = CodeGeneratorResponse {
            supported_features: Some(Feature::Proto3Optional as u64),
            ..Default::default()
        };

        match self.generate(&request.proto_file, &request.file_to_generate) {
            Ok(files) => {
                response.file = files
                    .into_iter()
                    .map(|(name, content)| File {
                        name: Some(name),
                        content: Some(content),
                        ..Default::default()
                    })
                    .collect();
            }
            Err(err) => {
                error!("{}", err);
                response.error = Some(err.to_string());
            }
        }

        response
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            exact_objects: false,
            well_known_root: DEFAULT_WELL_KNOWN_ROOT.to_owned(),
        }
    }
}
