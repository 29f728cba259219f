//! Utility functions for working with identifiers and file paths.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// Converts a `snake_case` Protobuf field name to the `lowerCamel` case property name used in
/// the generated object types.
pub fn to_field_name(s: &str) -> String {
    normalise_field_name(s.to_lowercase().to_lower_camel_case())
}

/// Prefixes property names that collide with JavaScript reserved words.
pub fn normalise_field_name(ident: String) -> String {
    match &ident[..] {
        "abstract" | "boolean" | "break" | "byte" | "case" | "catch" | "char" | "class"
        | "const" | "continue" | "debugger" | "default" | "delete" | "do" | "double" | "else"
        | "enum" | "export" | "extends" | "false" | "final" | "finally" | "float" | "for"
        | "function" | "goto" | "if" | "implements" | "import" | "in" | "instanceof" | "int"
        | "interface" | "long" | "native" | "new" | "null" | "package" | "private"
        | "protected" | "public" | "return" | "short" | "static" | "super" | "switch"
        | "synchronized" | "this" | "throw" | "throws" | "transient" | "try" | "typeof"
        | "var" | "void" | "volatile" | "while" | "with" => format!("pb_{}", ident),
        _ => ident,
    }
}

/// Converts a `snake_case` oneof name to the `UpperCamel` case used for its case declaration.
pub fn to_oneof_name(s: &str) -> String {
    s.to_lowercase().to_upper_camel_case()
}

/// Derives the identifier a generated file is imported under, e.g. `foo/bar-baz.proto` becomes
/// `foo_bar_baz_pb`.
pub fn file_path_to_pseudo_namespace(path: &str) -> String {
    let mut namespace: String = strip_proto_suffix(path)
        .chars()
        .map(|c| match c {
            '/' | '.' | '-' => '_',
            c => c,
        })
        .collect();
    namespace.push_str("_pb");
    namespace
}

/// The path of the generated file for a `.proto` file, e.g. `foo/bar.proto` becomes
/// `foo/bar_pb.js`.
pub fn file_path_to_output_name(path: &str) -> String {
    format!("{}_pb.js", strip_proto_suffix(path))
}

/// The module specifier a generated file uses to import the file generated for `path`,
/// without the `.js` extension.
pub fn file_path_to_import_name(path: &str) -> String {
    format!("{}_pb", strip_proto_suffix(path))
}

/// The relative path from the directory of `path` back to the output root.
pub fn path_to_root(path: &str) -> String {
    match path.matches('/').count() {
        0 => "./".to_owned(),
        depth => "../".repeat(depth),
    }
}

fn strip_proto_suffix(path: &str) -> &str {
    path.strip_suffix(".proto").unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_field_name() {
        assert_eq!("foo", &to_field_name("foo"));
        assert_eq!("fooBar", &to_field_name("foo_bar"));
        assert_eq!("fooBarBaz", &to_field_name("FOO_BAR_BAZ"));
        assert_eq!("field0Name", &to_field_name("field_0_name"));
        assert_eq!("fieldName2", &to_field_name("field_name2"));
        assert_eq!("pb_default", &to_field_name("default"));
        assert_eq!("pb_class", &to_field_name("CLASS"));
        assert_eq!("pb_instanceof", &to_field_name("instanceof"));
        assert_eq!("classes", &to_field_name("classes"));
    }

    #[test]
    fn test_to_oneof_name() {
        assert_eq!("Kind", &to_oneof_name("kind"));
        assert_eq!("MyChoice", &to_oneof_name("my_choice"));
        assert_eq!("MyChoice", &to_oneof_name("MY_CHOICE"));
    }

    #[test]
    fn test_pseudo_namespace() {
        assert_eq!("bar_pb", file_path_to_pseudo_namespace("bar.proto"));
        assert_eq!("foo_bar_pb", file_path_to_pseudo_namespace("foo/bar.proto"));
        assert_eq!(
            "foo_v1_bar_baz_pb",
            file_path_to_pseudo_namespace("foo/v1.bar-baz.proto")
        );
        assert_eq!(
            "google_protobuf_timestamp_pb",
            file_path_to_pseudo_namespace("google/protobuf/timestamp.proto")
        );
    }

    #[test]
    fn test_output_paths() {
        assert_eq!("foo/bar_pb.js", file_path_to_output_name("foo/bar.proto"));
        assert_eq!("foo/bar_pb", file_path_to_import_name("foo/bar.proto"));
        assert_eq!("./", path_to_root("bar.proto"));
        assert_eq!("../", path_to_root("foo/bar.proto"));
        assert_eq!("../../", path_to_root("a/b/c.proto"));
    }
}
