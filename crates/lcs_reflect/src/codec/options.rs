/// The nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options of an [`Encoder`](crate::codec::Encoder).
///
/// ```
/// use lcs_reflect::codec::{EncodeOptions, Encoder};
///
/// let encoder = Encoder::with_options(EncodeOptions::new().with_max_depth(16));
/// assert_eq!(encoder.options().max_depth(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    max_depth: usize,
}

impl EncodeOptions {
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets how many struct and variant levels may be nested.
    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for EncodeOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Options of a [`Decoder`](crate::codec::Decoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    max_depth: usize,
}

impl DecodeOptions {
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets how many struct and variant levels may be nested.
    ///
    /// Input nested deeper fails with
    /// [`Error::DepthLimitExceeded`](crate::codec::Error::DepthLimitExceeded).
    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for DecodeOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
