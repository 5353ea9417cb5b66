/// Identifier of a stored entry. Opaque, compared byte-for-byte.
pub type Key = String;

/// Stored payload. Values are only ever compared for equality.
pub type Value = String;
