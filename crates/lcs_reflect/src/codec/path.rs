//! The location of the value being encoded or decoded, for failure reports.
//!
//! Without the `debug` feature the path records nothing.

use core::fmt;

/// One step from a value into a part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment {
    Field(&'static str),
    Index(usize),
    Variant(u32),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, ".{name}"),
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Variant(index) => write!(f, "<{index}>"),
        }
    }
}

#[cfg(feature = "debug")]
pub(crate) use tracked::FieldPath;

#[cfg(not(feature = "debug"))]
pub(crate) use untracked::FieldPath;

#[cfg(feature = "debug")]
mod tracked {
    use alloc::vec::Vec;
    use core::fmt;

    use super::Segment;

    #[derive(Debug, Default)]
    pub(crate) struct FieldPath {
        segments: Vec<Segment>,
    }

    impl FieldPath {
        #[inline]
        pub const fn new() -> Self {
            Self {
                segments: Vec::new(),
            }
        }

        #[inline]
        pub fn push(&mut self, segment: Segment) {
            self.segments.push(segment);
        }

        #[inline]
        pub fn pop(&mut self) {
            self.segments.pop();
        }
    }

    impl fmt::Display for FieldPath {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.segments.iter().try_for_each(|segment| segment.fmt(f))
        }
    }
}

#[cfg(not(feature = "debug"))]
mod untracked {
    use core::fmt;

    use super::Segment;

    #[derive(Debug, Default)]
    pub(crate) struct FieldPath;

    impl FieldPath {
        #[inline(always)]
        pub const fn new() -> Self {
            Self
        }

        #[inline(always)]
        pub fn push(&mut self, _segment: Segment) {}

        #[inline(always)]
        pub fn pop(&mut self) {}
    }

    impl fmt::Display for FieldPath {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Ok(())
        }
    }
}

/// A walker over values that keeps a [`FieldPath`].
pub(crate) trait Traced: Sized {
    fn path_mut(&mut self) -> &mut FieldPath;

    /// Runs `f` with `segment` pushed on the path.
    ///
    /// The segment is left in place when `f` fails, so the path of the
    /// innermost failing value survives to the top-level report.
    #[inline]
    fn scoped<T, E>(
        &mut self,
        segment: Segment,
        f: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        self.path_mut().push(segment);
        let result = f(self);
        if result.is_ok() {
            self.path_mut().pop();
        }
        result
    }
}

#[cfg(all(test, feature = "debug"))]
mod tests {
    use super::{FieldPath, Segment};
    use alloc::string::ToString;

    #[test]
    fn display_joins_segments() {
        let mut path = FieldPath::new();
        path.push(Segment::Field("args"));
        path.push(Segment::Index(1));
        path.push(Segment::Variant(2));
        assert_eq!(path.to_string(), ".args[1]<2>");
        path.pop();
        assert_eq!(path.to_string(), ".args[1]");
    }
}
