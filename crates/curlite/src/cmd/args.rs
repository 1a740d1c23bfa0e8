use crate::impl_deref_mut;

/// Repeatable `-H` values, kept raw until header assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadersArg(pub Vec<String>);

impl_deref_mut!(HeadersArg(Vec<String>));

impl From<Vec<String>> for HeadersArg {
    fn from(headers: Vec<String>) -> Self {
        Self(headers)
    }
}
