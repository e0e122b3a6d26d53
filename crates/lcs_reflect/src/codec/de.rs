use crate::Reflect;
use crate::codec::descriptor::{self, Layout};
use crate::codec::path::{FieldPath, Segment, Traced};
use crate::codec::{DecodeOptions, Error, InvalidEncoding, Unregistered};
use crate::ops::{ReflectMut, ScalarMut};
use crate::registry::VariantGroup;

/// Decodes canonical bytes into reflected values.
///
/// The input must hold exactly one value; anything left over fails with
/// [`Error::TrailingBytes`].
///
/// ```
/// use lcs_reflect::codec::{DecodeOptions, Decoder, Error};
///
/// let decoder = Decoder::with_options(DecodeOptions::new().with_max_depth(8));
/// let values: Vec<u16> = decoder.decode(&[2, 0, 0, 0, 1, 0, 2, 0]).unwrap();
/// assert_eq!(values, [1, 2]);
///
/// let err = decoder.decode::<Vec<u16>>(&[9, 0, 0, 0, 1, 0]).unwrap_err();
/// assert!(matches!(err, Error::Truncated { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Creates a decoder with default options.
    #[inline]
    pub const fn new() -> Self {
        Self::with_options(DecodeOptions::new())
    }

    #[inline]
    pub const fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub const fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes a new `T` from `bytes`.
    pub fn decode<T: Reflect + Default>(&self, bytes: &[u8]) -> Result<T, Error> {
        let mut value = T::default();
        self.decode_into(bytes, &mut value)?;
        Ok(value)
    }

    /// Decodes `bytes` into `target`.
    ///
    /// On failure the state of `target` is unspecified.
    pub fn decode_into(&self, bytes: &[u8], target: &mut dyn Reflect) -> Result<(), Error> {
        let info = target.reflect_type_info();
        log::trace!("decoding `{}` from {} bytes", info.type_name(), bytes.len());

        let mut reader = Reader {
            input: bytes,
            max_depth: self.options.max_depth(),
            depth: 0,
            path: FieldPath::new(),
        };

        let result = descriptor::validated(info)
            .map_err(Error::from)
            .and_then(|descriptor| reader.read(descriptor.layout(), target))
            .and_then(|()| match reader.input.len() {
                0 => Ok(()),
                remaining => Err(Error::TrailingBytes { remaining }),
            });

        if let Err(err) = &result {
            log::debug!("decoding `{}{}` failed: {err}", info.type_name(), reader.path);
        }
        result
    }
}

struct Reader<'de> {
    input: &'de [u8],
    max_depth: usize,
    depth: usize,
    path: FieldPath,
}

impl Traced for Reader<'_> {
    #[inline]
    fn path_mut(&mut self) -> &mut FieldPath {
        &mut self.path
    }
}

impl<'de> Reader<'de> {
    fn read(&mut self, layout: &Layout, target: &mut dyn Reflect) -> Result<(), Error> {
        if let Layout::Nested(info) = layout {
            let descriptor = descriptor::resolve(*info)?;
            return self.nested(|r| r.read(descriptor.layout(), target));
        }

        match (layout, target.reflect_mut()) {
            (Layout::Scalar(kind), ReflectMut::Scalar(scalar)) if scalar.kind() == *kind => {
                self.read_scalar(scalar)?;
            }
            (Layout::Text, ReflectMut::Text(text)) => {
                let len = self.read_len()?;
                let bytes = self.take(len)?;
                let utf8 = core::str::from_utf8(bytes).map_err(|_| InvalidEncoding::Utf8)?;
                text.clear();
                text.push_str(utf8);
            }
            (Layout::Bytes, ReflectMut::List(list)) => {
                let len = self.read_len()?;
                let bytes = self.take(len)?;
                let Some(buffer) = list.bytes_mut() else {
                    return Err(mismatch(layout, list.reflect_type_info().type_name()));
                };
                buffer.clear();
                buffer.extend_from_slice(bytes);
            }
            (Layout::ByteArray(len), ReflectMut::Array(array)) => {
                let bytes = self.take(*len)?;
                match array.as_bytes_mut() {
                    Some(buffer) if buffer.len() == *len => buffer.copy_from_slice(bytes),
                    _ => return Err(mismatch(layout, array.reflect_type_info().type_name())),
                }
            }
            (Layout::Array { len, item }, ReflectMut::Array(array)) if array.len() == *len => {
                for index in 0..*len {
                    let Some(element) = array.item_mut(index) else {
                        return Err(mismatch(layout, array.reflect_type_info().type_name()));
                    };
                    self.scoped(Segment::Index(index), |r| r.read(item, element))?;
                }
            }
            (Layout::Sequence(item), ReflectMut::List(list)) => {
                let count = self.read_count(descriptor::min_size_of(item)?)?;
                list.clear();
                list.reserve(count);
                for index in 0..count {
                    let element = list.push_default();
                    self.scoped(Segment::Index(index), |r| r.read(item, element))?;
                }
            }
            (Layout::Map { key, value }, ReflectMut::Map(map)) => {
                let entry_size = descriptor::min_size_of(key)?
                    .saturating_add(descriptor::min_size_of(value)?);
                let count = self.read_count(entry_size)?;
                map.clear();

                let mut previous: Option<&'de [u8]> = None;
                for index in 0..count {
                    let (mut k, mut v) = map.new_entry();

                    let start = self.input;
                    self.scoped(Segment::Index(index), |r| r.read(key, &mut *k))?;
                    let key_bytes = &start[..start.len() - self.input.len()];
                    // Strictly increasing, which also rules out duplicates.
                    if previous.is_some_and(|previous| previous >= key_bytes) {
                        return Err(InvalidEncoding::MapKeyOrder.into());
                    }
                    previous = Some(key_bytes);

                    self.scoped(Segment::Index(index), |r| r.read(value, &mut *v))?;
                    map.insert_boxed(k, v).map_err(|err| mismatch(layout, err.map))?;
                }
            }
            (Layout::Optional(inner), ReflectMut::Optional(optional)) => match self.byte()? {
                0 => optional.set_none(),
                1 => self.read(inner, optional.insert_default())?,
                flag => return Err(InvalidEncoding::PresenceFlag(flag).into()),
            },
            (Layout::Variant(group), ReflectMut::Variant(union)) if union.group() == *group.marker() => {
                let index = self.read_u32()?;
                let entry = group
                    .by_index(index)
                    .ok_or_else(|| unregistered(group, Unregistered::Index(index)))?;
                let descriptor = descriptor::resolve(entry.type_info())?;

                let mut alternative = entry.fresh();
                self.nested(|r| {
                    r.scoped(Segment::Variant(index), |r| {
                        r.read(descriptor.layout(), &mut *alternative)
                    })
                })?;
                union.set_value(alternative);
            }
            (Layout::Struct(fields), ReflectMut::Struct(value)) if value.field_len() == fields.len() => {
                for (index, field) in fields.iter().enumerate() {
                    let Some(field_value) = value.field_at_mut(index) else {
                        return Err(mismatch(layout, value.reflect_type_info().type_name()));
                    };
                    self.scoped(Segment::Field(field.name()), |r| {
                        r.read(field.layout(), field_value)
                    })?;
                }
            }
            _ => return Err(mismatch(layout, target.reflect_type_info().type_name())),
        }
        Ok(())
    }

    fn read_scalar(&mut self, scalar: ScalarMut<'_>) -> Result<(), Error> {
        match scalar {
            ScalarMut::Bool(v) => {
                *v = match self.byte()? {
                    0 => false,
                    1 => true,
                    byte => return Err(InvalidEncoding::Bool(byte).into()),
                }
            }
            ScalarMut::U8(v) => *v = self.byte()?,
            ScalarMut::U16(v) => *v = u16::from_le_bytes(self.array()?),
            ScalarMut::U32(v) => *v = u32::from_le_bytes(self.array()?),
            ScalarMut::U64(v) => *v = u64::from_le_bytes(self.array()?),
            ScalarMut::U128(v) => *v = u128::from_le_bytes(self.array()?),
            ScalarMut::I8(v) => *v = i8::from_le_bytes(self.array()?),
            ScalarMut::I16(v) => *v = i16::from_le_bytes(self.array()?),
            ScalarMut::I32(v) => *v = i32::from_le_bytes(self.array()?),
            ScalarMut::I64(v) => *v = i64::from_le_bytes(self.array()?),
            ScalarMut::I128(v) => *v = i128::from_le_bytes(self.array()?),
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

    fn take(&mut self, len: usize) -> Result<&'de [u8], Error> {
        if len > self.input.len() {
            return Err(Error::Truncated {
                needed: len,
                remaining: self.input.len(),
            });
        }
        let (head, tail) = self.input.split_at(len);
        self.input = tail;
        Ok(head)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut array = [0; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }

    #[inline]
    fn byte(&mut self) -> Result<u8, Error> {
        self.array::<1>().map(|[byte]| byte)
    }

    #[inline]
    fn read_u32(&mut self) -> Result<u32, Error> {
        self.array().map(u32::from_le_bytes)
    }

    fn read_len(&mut self) -> Result<usize, Error> {
        let len = self.read_u32()?;
        usize::try_from(len).map_err(|_| Error::Truncated {
            needed: usize::MAX,
            remaining: self.input.len(),
        })
    }

    /// Reads an item count, rejecting counts the rest of the input cannot
    /// possibly hold before anything is allocated.
    fn read_count(&mut self, item_size: usize) -> Result<usize, Error> {
        let count = self.read_len()?;
        let needed = count.saturating_mul(item_size);
        if needed > self.input.len() {
            return Err(Error::Truncated {
                needed,
                remaining: self.input.len(),
            });
        }
        Ok(count)
    }
}

fn mismatch(layout: &Layout, type_name: &'static str) -> Error {
    Error::UnsupportedKind {
        expected: layout.kind(),
        type_name,
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
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::codec::{DecodeOptions, Decoder, Error, InvalidEncoding, Unregistered};
    use crate::codec::{decode, decode_into, encode};
    use crate::derive::Reflect;
    use crate::ops::{Variant, VariantOf};
    use crate::registry::{EnumTypes, EnumVariant};

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Record {
        pub id: u32,
        pub flag: bool,
        #[lcs = "optional"]
        pub label: Option<String>,
        pub data: Vec<u8>,
        pub pair: [i16; 2],
    }

    fn record() -> Record {
        Record {
            id: 7,
            flag: true,
            label: Some(String::from("ok")),
            data: vec![1, 2, 3],
            pair: [-1, 1],
        }
    }

    #[test]
    fn round_trip() {
        let bytes = encode(&record()).unwrap();
        assert_eq!(decode::<Record>(&bytes).unwrap(), record());

        let absent = Record { label: None, ..record() };
        let bytes = encode(&absent).unwrap();
        assert_eq!(decode::<Record>(&bytes).unwrap(), absent);
    }

    #[test]
    fn decode_into_overwrites() {
        let mut target = Record {
            label: Some(String::from("stale")),
            data: vec![9; 10],
            ..Record::default()
        };
        let bytes = encode(&Record { label: None, ..record() }).unwrap();
        decode_into(&bytes, &mut target).unwrap();
        assert_eq!(target.label, None);
        assert_eq!(target.data, [1, 2, 3]);
    }

    #[test]
    fn every_truncation_fails() {
        let bytes = encode(&record()).unwrap();
        for len in 0..bytes.len() {
            assert!(
                matches!(decode::<Record>(&bytes[..len]), Err(Error::Truncated { .. })),
                "prefix of {len} bytes",
            );
        }
    }

    #[test]
    fn trailing_bytes() {
        let mut bytes = encode(&record()).unwrap();
        bytes.extend_from_slice(&[0, 0]);
        assert_eq!(
            decode::<Record>(&bytes).unwrap_err(),
            Error::TrailingBytes { remaining: 2 }
        );
    }

    #[test]
    fn out_of_domain_bytes() {
        let mut bytes = encode(&record()).unwrap();
        bytes[4] = 2; // flag
        assert_eq!(
            decode::<Record>(&bytes).unwrap_err(),
            Error::InvalidEncoding(InvalidEncoding::Bool(2))
        );

        let mut bytes = encode(&record()).unwrap();
        bytes[5] = 2; // presence of `label`
        assert_eq!(
            decode::<Record>(&bytes).unwrap_err(),
            Error::InvalidEncoding(InvalidEncoding::PresenceFlag(2))
        );

        let bytes = [2, 0, 0, 0, 0xC3, 0x28];
        assert_eq!(
            decode::<String>(&bytes).unwrap_err(),
            Error::InvalidEncoding(InvalidEncoding::Utf8)
        );
    }

    #[test]
    fn oversized_counts_are_rejected_up_front() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0];
        assert_eq!(
            decode::<Vec<u32>>(&bytes).unwrap_err(),
            Error::Truncated {
                needed: 0xFFFF_FFFF * 4,
                remaining: 4,
            }
        );
        assert!(matches!(
            decode::<Vec<u8>>(&bytes),
            Err(Error::Truncated { remaining: 4, .. })
        ));
    }

    #[test]
    fn map_keys_must_increase() {
        let map: BTreeMap<u8, u8> = [(1, 10), (2, 20)].into_iter().collect();
        let bytes = encode(&map).unwrap();
        assert_eq!(bytes, [2, 0, 0, 0, 1, 10, 2, 20]);
        assert_eq!(decode::<BTreeMap<u8, u8>>(&bytes).unwrap(), map);

        let swapped = [2, 0, 0, 0, 2, 20, 1, 10];
        let duplicated = [2, 0, 0, 0, 1, 10, 1, 20];
        for bytes in [swapped, duplicated] {
            assert_eq!(
                decode::<BTreeMap<u8, u8>>(&bytes).unwrap_err(),
                Error::InvalidEncoding(InvalidEncoding::MapKeyOrder)
            );
        }
    }

    enum Op {}

    impl VariantOf<Op> for u16 {}
    impl VariantOf<Op> for Vec<u8> {}

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(enum_types)]
    struct Instr {
        #[lcs = "enum=op"]
        pub op: Variant<Op>,
        #[lcs = "optional,enum=op"]
        pub extra: Option<Variant<Op>>,
    }

    impl EnumTypes for Instr {
        fn enum_types() -> Vec<EnumVariant> {
            vec![
                EnumVariant::new::<Op, _>("op", 0, 0_u16),
                EnumVariant::new::<Op, _>("op", 1, Vec::<u8>::new()),
            ]
        }
    }

    #[test]
    fn variants_round_trip() {
        let instr = Instr {
            op: Variant::new(vec![0xAB_u8]),
            extra: Some(Variant::new(3_u16)),
        };
        let bytes = encode(&instr).unwrap();
        assert_eq!(bytes, [1, 0, 0, 0, 1, 0, 0, 0, 0xAB, 1, 0, 0, 0, 0, 3, 0]);
        assert_eq!(decode::<Instr>(&bytes).unwrap(), instr);
    }

    #[test]
    fn unknown_index() {
        let bytes = [4, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            decode::<Instr>(&bytes).unwrap_err(),
            Error::UnregisteredVariant {
                group: "op",
                detail: Unregistered::Index(4),
            }
        );
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Chain {
        #[lcs = "optional"]
        pub next: Option<Box<Chain>>,
    }

    #[test]
    fn depth_limit() {
        // Every link is one level deeper than the last.
        let mut bytes = vec![1; 10];
        bytes.push(0);

        let decoder = Decoder::with_options(DecodeOptions::new().with_max_depth(9));
        assert_eq!(
            decoder.decode::<Chain>(&bytes).unwrap_err(),
            Error::DepthLimitExceeded { limit: 9 }
        );
        let decoder = Decoder::with_options(DecodeOptions::new().with_max_depth(10));
        assert!(decoder.decode::<Chain>(&bytes).is_ok());

        let hostile = vec![1; 100_000];
        let decoder = Decoder::with_options(DecodeOptions::new().with_max_depth(64));
        assert_eq!(
            decoder.decode::<Chain>(&hostile).unwrap_err(),
            Error::DepthLimitExceeded { limit: 64 }
        );
    }
}
