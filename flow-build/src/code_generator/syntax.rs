use prost_types::FileDescriptorProto;

use crate::{Error, Result};

/// The presence dialect a file is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Syntax {
    Proto2,
    Proto3,
    Edition2023,
}

impl Syntax {
    pub(super) fn from_file(file: &FileDescriptorProto) -> Result<Self> {
        match file.syntax.as_deref() {
            None | Some("") | Some("proto2") => Ok(Syntax::Proto2),
            Some("proto3") => Ok(Syntax::Proto3),
            Some("editions") => Ok(Syntax::Edition2023),
            Some(s) => Err(Error::UnknownSyntax {
                file: file.name().to_owned(),
                syntax: s.to_owned(),
            }),
        }
    }

    /// Returns `true` if singular fields track presence unless stated otherwise.
    ///
    /// Proto3 is the only dialect where plain scalar fields are implicitly present.
    pub(super) fn explicit_presence(self) -> bool {
        !matches!(self, Syntax::Proto3)
    }
}
