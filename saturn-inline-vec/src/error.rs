use thiserror::Error;

/// Errors returned by the shared inline-vector operations.
///
/// Variants carry only `Copy` data so the type can be embedded into other
/// error enums without cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InlineVecError {
    /// The target slot does not fit inside the buffer.
    #[error("inline buffer is full")]
    Full,

    /// A removal was requested on a container with no populated elements.
    #[error("inline buffer is empty")]
    Empty,

    /// The index policy rejected an index, or a lookup fell outside the buffer.
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A fixed-width write received fewer bytes than one element.
    #[error("payload holds {actual} bytes, element needs {expected}")]
    PayloadTooShort { expected: usize, actual: usize },

    /// Element-wise operations need a non-zero element size.
    #[error("element size must be greater than zero")]
    ZeroElementSize,

    /// The header describes more bytes than the storage provides, or the
    /// declared total size cannot hold a header.
    #[error("invalid layout: header declares {declared} bytes, storage holds {available}")]
    InvalidLayout { declared: usize, available: usize },

    /// The storage handed to a view is not aligned for the header fields.
    #[error("storage is not aligned for the inline header")]
    Misaligned,

    /// A duplication target has less buffer space than the source declares.
    #[error("insufficient storage: {required} bytes required, {available} available")]
    InsufficientStorage { required: usize, available: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, InlineVecError>;
