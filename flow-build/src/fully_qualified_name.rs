use itertools::Itertools;

// Invariant: should always begin with a '.' (dot)
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct FullyQualifiedName(String);

impl FullyQualifiedName {
    pub fn new(package_string: &str, type_path: &[impl AsRef<str>], message_name: &str) -> Self {
        Self(format!(
            "{}{}{}{}{}{}",
            if package_string.is_empty() { "" } else { "." },
            package_string.trim_matches('.'),
            if type_path.is_empty() { "" } else { "." },
            type_path
                .iter()
                .map(AsRef::as_ref)
                .map(|type_path_str| type_path_str.trim_start_matches('.'))
                .join("."),
            if message_name.is_empty() { "" } else { "." },
            message_name,
        ))
    }

    /// Wraps a `type_name` taken from a field descriptor, which protoc always emits fully
    /// qualified.
    pub fn from_type_name(type_name: &str) -> Self {
        Self::new("", &[type_name], "")
    }

    pub fn join(&self, path: &str) -> Self {
        Self(format!("{}.{}", self.0, path))
    }

    /// The name without its leading dot, as written in `.proto` sources.
    pub fn without_leading_dot(&self) -> &str {
        self.0.strip_prefix('.').unwrap_or(&self.0)
    }

    /// Returns the path of the type inside `package`, with the nesting flattened by `_`.
    ///
    /// `.pkg.Outer.Inner` in package `pkg` becomes `Outer_Inner`.
    pub fn within_package(&self, package: &str) -> String {
        let package = package.trim_matches('.');
        let name = self.without_leading_dot();
        let within = match package.is_empty() {
            true => name,
            false => name
                .strip_prefix(package)
                .and_then(|rest| rest.strip_prefix('.'))
                .unwrap_or(name),
        };
        within.split('.').join("_")
    }
}

impl AsRef<str> for FullyQualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert_eq!(
            FullyQualifiedName::new("foo.bar", &["Outer"], "Inner").as_ref(),
            ".foo.bar.Outer.Inner"
        );
        assert_eq!(
            FullyQualifiedName::new("", &[] as &[&str], "Top").as_ref(),
            ".Top"
        );
        assert_eq!(
            FullyQualifiedName::from_type_name(".foo.Bar").as_ref(),
            ".foo.Bar"
        );
    }

    #[test]
    fn test_within_package() {
        let name = FullyQualifiedName::from(".foo.bar.Outer.Mid.Inner");
        assert_eq!(name.within_package("foo.bar"), "Outer_Mid_Inner");
        assert_eq!(name.without_leading_dot(), "foo.bar.Outer.Mid.Inner");

        let name = FullyQualifiedName::from(".Outer.Inner");
        assert_eq!(name.within_package(""), "Outer_Inner");
    }
}
