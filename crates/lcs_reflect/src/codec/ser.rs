use alloc::vec::Vec;

use crate::Reflect;
use crate::codec::descriptor::{self, Layout};
use crate::codec::path::{FieldPath, Segment, Traced};
use crate::codec::{EncodeOptions, Error, Unregistered};
use crate::ops::{ReflectRef, ScalarRef};
use crate::registry::VariantGroup;

/// Encodes reflected values into their canonical bytes.
///
/// ```
/// use lcs_reflect::codec::Encoder;
///
/// let mut out = vec![0xFF];
/// Encoder::new().encode_into(&vec![1_u16, 2], &mut out).unwrap();
/// assert_eq!(out, [0xFF, 2, 0, 0, 0, 1, 0, 2, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Creates an encoder with default options.
    #[inline]
    pub const fn new() -> Self {
        Self::with_options(EncodeOptions::new())
    }

    #[inline]
    pub const fn with_options(options: EncodeOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub const fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encodes `value` into a new buffer.
    pub fn encode(&self, value: &dyn Reflect) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        self.encode_into(value, &mut out)?;
        Ok(out)
    }

    /// Appends the encoding of `value` to `out`.
    ///
    /// On failure `out` is left as it was.
    pub fn encode_into(&self, value: &dyn Reflect, out: &mut Vec<u8>) -> Result<(), Error> {
        let info = value.reflect_type_info();
        log::trace!("encoding `{}`", info.type_name());

        let start = out.len();
        let mut writer = Writer {
            max_depth: self.options.max_depth(),
            depth: 0,
            path: FieldPath::new(),
        };

        let result = descriptor::validated(info)
            .map_err(Error::from)
            .and_then(|descriptor| writer.write(out, descriptor.layout(), value));

        if let Err(err) = &result {
            out.truncate(start);
            log::debug!("encoding `{}{}` failed: {err}", info.type_name(), writer.path);
        }
        result
    }
}

struct Writer {
    max_depth: usize,
    depth: usize,
    path: FieldPath,
}

impl Traced for Writer {
    #[inline]
    fn path_mut(&mut self) -> &mut FieldPath {
        &mut self.path
    }
}

impl Writer {
    fn write(&mut self, out: &mut Vec<u8>, layout: &Layout, value: &dyn Reflect) -> Result<(), Error> {
        match (layout, value.reflect_ref()) {
            (Layout::Scalar(kind), ReflectRef::Scalar(scalar)) if scalar.kind() == *kind => {
                write_scalar(out, scalar);
            }
            (Layout::Text, ReflectRef::Text(text)) => {
                write_len(out, text.len())?;
                out.extend_from_slice(text.as_bytes());
            }
            (Layout::Bytes, ReflectRef::List(list)) => {
                let bytes = list.as_bytes().ok_or_else(|| mismatch(layout, value))?;
                write_len(out, bytes.len())?;
                out.extend_from_slice(bytes);
            }
            (Layout::ByteArray(len), ReflectRef::Array(array)) => {
                let bytes = array
                    .as_bytes()
                    .filter(|bytes| bytes.len() == *len)
                    .ok_or_else(|| mismatch(layout, value))?;
                out.extend_from_slice(bytes);
            }
            (Layout::Array { len, item }, ReflectRef::Array(array)) if array.len() == *len => {
                for index in 0..*len {
                    let element = array.item(index).ok_or_else(|| mismatch(layout, value))?;
                    self.scoped(Segment::Index(index), |w| w.write(out, item, element))?;
                }
            }
            (Layout::Sequence(item), ReflectRef::List(list)) => {
                write_len(out, list.len())?;
                for index in 0..list.len() {
                    let element = list.item(index).ok_or_else(|| mismatch(layout, value))?;
                    self.scoped(Segment::Index(index), |w| w.write(out, item, element))?;
                }
            }
            (Layout::Map { key, value: value_layout }, ReflectRef::Map(map)) => {
                write_len(out, map.len())?;

                // Canonical order: by each key's own encoding.
                let mut entries = Vec::with_capacity(map.len());
                for (index, (k, v)) in map.entries().enumerate() {
                    let mut key_bytes = Vec::new();
                    self.scoped(Segment::Index(index), |w| w.write(&mut key_bytes, key, k))?;
                    entries.push((key_bytes, v));
                }
                entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

                for (index, (key_bytes, v)) in entries.into_iter().enumerate() {
                    out.extend_from_slice(&key_bytes);
                    self.scoped(Segment::Index(index), |w| w.write(out, value_layout, v))?;
                }
            }
            (Layout::Optional(inner), ReflectRef::Optional(optional)) => match optional.value() {
                None => out.push(0),
                Some(inner_value) => {
                    out.push(1);
                    self.write(out, inner, inner_value)?;
                }
            },
            (Layout::Variant(group), ReflectRef::Variant(union)) if union.group() == *group.marker() => {
                let Some(alternative) = union.value() else {
                    return Err(unregistered(group, Unregistered::Empty));
                };
                let entry = group.by_type(alternative.ty_id()).ok_or_else(|| {
                    let name = alternative.reflect_type_info().type_name();
                    unregistered(group, Unregistered::Type(name))
                })?;

                out.extend_from_slice(&entry.index().to_le_bytes());
                let descriptor = descriptor::resolve(entry.type_info())?;
                self.nested(|w| {
                    w.scoped(Segment::Variant(entry.index()), |w| {
                        w.write(out, descriptor.layout(), alternative)
                    })
                })?;
            }
            (Layout::Struct(fields), ReflectRef::Struct(target)) if target.field_len() == fields.len() => {
                for (index, field) in fields.iter().enumerate() {
                    let field_value = target.field_at(index).ok_or_else(|| mismatch(layout, value))?;
                    self.scoped(Segment::Field(field.name()), |w| {
                        w.write(out, field.layout(), field_value)
                    })?;
                }
            }
            (Layout::Nested(info), ReflectRef::Struct(_)) => {
                let descriptor = descriptor::resolve(*info)?;
                self.nested(|w| w.write(out, descriptor.layout(), value))?;
            }
            _ => return Err(mismatch(layout, value)),
        }
        Ok(())
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> Result<(), Error>) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(Error::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

fn write_len(out: &mut Vec<u8>, len: usize) -> Result<(), Error> {
    let len = u32::try_from(len).map_err(|_| Error::LengthOverflow { len })?;
    out.extend_from_slice(&len.to_le_bytes());
    Ok(())
}

fn write_scalar(out: &mut Vec<u8>, scalar: ScalarRef) {
    match scalar {
        ScalarRef::Bool(v) => out.push(u8::from(v)),
        ScalarRef::U8(v) => out.push(v),
        ScalarRef::U16(v) => out.extend_from_slice(&v.to_le_bytes()),
        ScalarRef::U32(v) => out.extend_from_slice(&v.to_le_bytes()),
        ScalarRef::U64(v) => out.extend_from_slice(&v.to_le_bytes()),
        ScalarRef::U128(v) => out.extend_from_slice(&v.to_le_bytes()),
        ScalarRef::I8(v) => out.extend_from_slice(&v.to_le_bytes()),
        ScalarRef::I16(v) => out.extend_from_slice(&v.to_le_bytes()),
        ScalarRef::I32(v) => out.extend_from_slice(&v.to_le_bytes()),
        ScalarRef::I64(v) => out.extend_from_slice(&v.to_le_bytes()),
        ScalarRef::I128(v) => out.extend_from_slice(&v.to_le_bytes()),
    }
}

fn mismatch(layout: &Layout, value: &dyn Reflect) -> Error {
    Error::UnsupportedKind {
        expected: layout.kind(),
        type_name: value.reflect_type_info().type_name(),
    }
}

#[inline]
fn unregistered(group: &VariantGroup, detail: Unregistered) -> Error {
    Error::UnregisteredVariant {
        group: group.name(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use crate::codec::{EncodeOptions, Encoder, Error, Unregistered, encode, encode_into};
    use crate::derive::Reflect;
    use crate::ops::{Variant, VariantOf};
    use crate::registry::{EnumTypes, EnumVariant};

    #[test]
    fn scalars_are_little_endian() {
        assert_eq!(encode(&true).unwrap(), [1]);
        assert_eq!(encode(&0x1234_u16).unwrap(), [0x34, 0x12]);
        assert_eq!(encode(&-2_i32).unwrap(), [0xFE, 0xFF, 0xFF, 0xFF]);
        assert_eq!(encode(&1_u128).unwrap().len(), 16);
    }

    #[test]
    fn byte_shapes() {
        assert_eq!(encode(&String::from("hi")).unwrap(), [2, 0, 0, 0, b'h', b'i']);
        assert_eq!(encode(&vec![7_u8, 8]).unwrap(), [2, 0, 0, 0, 7, 8]);
        assert_eq!(encode(&[7_u8, 8]).unwrap(), [7, 8]);
        assert_eq!(encode(&[1_u16, 2]).unwrap(), [1, 0, 2, 0]);
    }

    #[derive(Reflect, Default)]
    struct Tree {
        pub leaf: u8,
        pub children: Vec<Tree>,
    }

    #[test]
    fn nested_structs() {
        let tree = Tree {
            leaf: 1,
            children: vec![Tree { leaf: 2, children: Vec::new() }],
        };
        assert_eq!(
            encode(&tree).unwrap(),
            [1, 1, 0, 0, 0, 2, 0, 0, 0, 0]
        );
    }

    #[test]
    fn map_order_follows_encoded_keys() {
        let mut hashed = HashMap::new();
        let mut sorted = BTreeMap::new();
        // 256 sorts after 1 by value, but its first encoded byte is 0.
        for key in [256_u16, 1, 513, 2] {
            hashed.insert(key, key % 7 == 0);
            sorted.insert(key, key % 7 == 0);
        }

        let bytes = encode(&hashed).unwrap();
        assert_eq!(bytes, encode(&sorted).unwrap());
        assert_eq!(&bytes[..4], [4, 0, 0, 0]);
        assert_eq!(&bytes[4..7], [0x00, 0x01, 0]); // 256
        assert_eq!(&bytes[7..10], [0x01, 0x00, 0]); // 1
    }

    enum Token {}

    impl VariantOf<Token> for u8 {}
    impl VariantOf<Token> for String {}
    impl VariantOf<Token> for u32 {}

    #[derive(Reflect, Default)]
    #[reflect(enum_types)]
    struct Script {
        #[lcs = "enum=token"]
        pub tokens: Vec<Variant<Token>>,
    }

    impl EnumTypes for Script {
        fn enum_types() -> Vec<EnumVariant> {
            vec![
                EnumVariant::new::<Token, _>("token", 5, 0_u8),
                EnumVariant::new::<Token, _>("token", 9, String::new()),
            ]
        }
    }

    #[test]
    fn variants_use_registered_indices() {
        let script = Script {
            tokens: vec![Variant::new(3_u8), Variant::new(String::from("a"))],
        };
        assert_eq!(
            encode(&script).unwrap(),
            [2, 0, 0, 0, 5, 0, 0, 0, 3, 9, 0, 0, 0, 1, 0, 0, 0, b'a']
        );
    }

    #[test]
    fn unregistered_and_empty_variants() {
        let script = Script {
            tokens: vec![Variant::new(3_u32)],
        };
        assert_eq!(
            encode(&script).unwrap_err(),
            Error::UnregisteredVariant {
                group: "token",
                detail: Unregistered::Type("u32"),
            }
        );

        let script = Script {
            tokens: vec![Variant::empty()],
        };
        assert!(matches!(
            encode(&script),
            Err(Error::UnregisteredVariant { detail: Unregistered::Empty, .. })
        ));
    }

    #[test]
    fn failed_encode_leaves_buffer_untouched() {
        let script = Script {
            tokens: vec![Variant::new(1_u8), Variant::new(2_u32)],
        };
        let mut out = vec![0xAA];
        assert!(encode_into(&script, &mut out).is_err());
        assert_eq!(out, [0xAA]);
    }

    #[test]
    fn depth_limit() {
        let mut tree = Tree::default();
        for leaf in 0..4 {
            tree = Tree { leaf, children: vec![tree] };
        }

        let shallow = Encoder::with_options(EncodeOptions::new().with_max_depth(3));
        assert_eq!(
            shallow.encode(&tree).unwrap_err(),
            Error::DepthLimitExceeded { limit: 3 }
        );
        let deep = Encoder::with_options(EncodeOptions::new().with_max_depth(4));
        assert!(deep.encode(&tree).is_ok());
    }

    #[test]
    fn erased_values() {
        let value: &dyn crate::Reflect = &vec![String::from("x")];
        assert_eq!(
            crate::codec::encode_dyn(value).unwrap(),
            [1, 0, 0, 0, 1, 0, 0, 0, b'x']
        );
    }
}
