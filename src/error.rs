use core::fmt;

/// Returned by the checked accessors of [`Optional`](crate::Optional) when the
/// container is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BadOptionalAccess;

impl BadOptionalAccess {
    pub const MESSAGE: &'static str = "bad optional access";
}

impl fmt::Display for BadOptionalAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(Self::MESSAGE) }
}

impl core::error::Error for BadOptionalAccess {}
