#![allow(missing_docs)]

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Barrier};
use std::thread;

use lcs::codec::{ConfigError, DecodeOptions, EncodeOptions, InvalidEncoding, TagError, Unregistered};
use lcs::{Decoder, Encoder, EnumTypes, EnumVariant, Error, Reflect, Variant, VariantOf};

// -----------------------------------------------------------------------------
// Hidden fields

#[derive(Reflect, Default, Debug, PartialEq)]
pub struct Session {
    pub id: u32,
    token: String,
    pub(crate) retries: u8,
    pub active: bool,
}

#[test]
fn hidden_fields_do_not_change_the_encoding() {
    let a = Session { id: 9, token: "a".into(), retries: 1, active: true };
    let b = Session { id: 9, token: "bbbb".into(), retries: 7, active: true };

    let bytes = lcs::encode(&a).unwrap();
    assert_eq!(bytes, lcs::encode(&b).unwrap());
    assert_eq!(bytes, [9, 0, 0, 0, 1]);

    let decoded: Session = lcs::decode(&bytes).unwrap();
    assert_eq!(decoded, Session { id: 9, active: true, ..Session::default() });
}

#[test]
fn decode_into_keeps_hidden_fields() {
    let mut target = Session { id: 1, token: "keep".into(), retries: 3, active: false };
    lcs::decode_into(&[2, 0, 0, 0, 1], &mut target).unwrap();
    assert_eq!(target, Session { id: 2, token: "keep".into(), retries: 3, active: true });
}

// -----------------------------------------------------------------------------
// Maps

#[derive(Reflect, Default, Debug, PartialEq)]
pub struct Index {
    pub by_id: HashMap<u32, String>,
}

#[derive(Reflect, Default, Debug, PartialEq)]
pub struct SortedIndex {
    pub by_id: BTreeMap<u32, String>,
}

#[test]
fn map_encoding_ignores_insertion_order() {
    let forward = Index { by_id: (0..300).map(|i| (i, i.to_string())).collect() };
    let backward = Index { by_id: (0..300).rev().map(|i| (i, i.to_string())).collect() };
    let sorted = SortedIndex { by_id: (0..300).map(|i| (i, i.to_string())).collect() };

    let bytes = lcs::encode(&forward).unwrap();
    assert_eq!(bytes, lcs::encode(&backward).unwrap());
    assert_eq!(bytes, lcs::encode(&sorted).unwrap());

    // Keys sort by their little-endian bytes: 256 (00 01 ..) comes before 1 (01 00 ..).
    assert_eq!(bytes[..4], [44, 1, 0, 0]);
    assert_eq!(bytes[4..8], [0, 0, 0, 0]);
    assert_eq!(bytes[13..17], [0, 1, 0, 0]);

    let decoded: Index = lcs::decode(&bytes).unwrap();
    assert_eq!(decoded, forward);
}

#[test]
fn unordered_map_keys_are_rejected() {
    let mut bytes = vec![2, 0, 0, 0];
    bytes.extend_from_slice(&[2, 0, 0, 0, 0, 0, 0, 0]);
    bytes.extend_from_slice(&[1, 0, 0, 0, 0, 0, 0, 0]);

    assert_eq!(
        lcs::decode::<SortedIndex>(&bytes).unwrap_err(),
        Error::InvalidEncoding(InvalidEncoding::MapKeyOrder)
    );
}

// -----------------------------------------------------------------------------
// Boxed items

#[derive(Reflect, Default, Debug, PartialEq)]
pub struct Boxed {
    pub bytes: Vec<Box<u8>>,
    pub fixed: [Box<u8>; 2],
}

#[derive(Reflect, Default, Debug, PartialEq)]
pub struct Unboxed {
    pub bytes: Vec<u8>,
    pub fixed: [u8; 2],
}

#[test]
fn boxed_items_encode_like_their_contents() {
    let boxed = Boxed {
        bytes: vec![Box::new(1), Box::new(2)],
        fixed: [Box::new(3), Box::new(4)],
    };
    let unboxed = Unboxed { bytes: vec![1, 2], fixed: [3, 4] };

    let bytes = lcs::encode(&boxed).unwrap();
    assert_eq!(bytes, [2, 0, 0, 0, 1, 2, 3, 4]);
    assert_eq!(bytes, lcs::encode(&unboxed).unwrap());

    assert_eq!(lcs::decode::<Boxed>(&bytes).unwrap(), boxed);
}

// -----------------------------------------------------------------------------
// Optional and malformed input

#[derive(Reflect, Default, Debug, PartialEq)]
pub struct Profile {
    #[lcs = "optional"]
    pub nickname: Option<String>,
    pub verified: bool,
}

#[test]
fn absent_optional_is_one_zero_byte() {
    let bytes = lcs::encode(&Profile { nickname: None, verified: true }).unwrap();
    assert_eq!(bytes, [0, 1]);
    assert_eq!(lcs::decode::<Profile>(&bytes).unwrap(), Profile { nickname: None, verified: true });
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(
        lcs::decode::<Profile>(&[2, 1]).unwrap_err(),
        Error::InvalidEncoding(InvalidEncoding::PresenceFlag(2))
    );
    assert_eq!(
        lcs::decode::<Profile>(&[0, 2]).unwrap_err(),
        Error::InvalidEncoding(InvalidEncoding::Bool(2))
    );
    assert_eq!(
        lcs::decode::<Profile>(&[1, 1, 0, 0, 0, 0xFF, 0]).unwrap_err(),
        Error::InvalidEncoding(InvalidEncoding::Utf8)
    );
    assert_eq!(
        lcs::decode::<Profile>(&[0, 1, 0]).unwrap_err(),
        Error::TrailingBytes { remaining: 1 }
    );
    assert!(matches!(
        lcs::decode::<Profile>(&[1, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap_err(),
        Error::Truncated { .. }
    ));
}

// -----------------------------------------------------------------------------
// Variants

pub enum Event {}

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
pub struct Joined {
    pub user: u32,
}

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
pub struct Left {
    pub user: u32,
    pub reason: String,
}

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
pub struct Kicked {
    pub user: u32,
}

impl VariantOf<Event> for Joined {}
impl VariantOf<Event> for Left {}
impl VariantOf<Event> for Kicked {}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(enum_types)]
pub struct Log {
    #[lcs = "enum=event"]
    pub events: Vec<Variant<Event>>,
    #[lcs = "optional,enum=event"]
    pub last: Option<Variant<Event>>,
}

impl EnumTypes for Log {
    fn enum_types() -> Vec<EnumVariant> {
        vec![
            EnumVariant::new::<Event, _>("event", 10, Joined::default()),
            EnumVariant::new::<Event, _>("event", 20, Left::default()),
        ]
    }
}

#[test]
fn variants_round_trip_by_index() {
    let log = Log {
        events: vec![
            Variant::new(Joined { user: 1 }),
            Variant::new(Left { user: 1, reason: "bye".into() }),
        ],
        last: Some(Variant::new(Joined { user: 2 })),
    };

    let bytes = lcs::encode(&log).unwrap();
    assert_eq!(bytes[..12], [2, 0, 0, 0, 10, 0, 0, 0, 1, 0, 0, 0]);
    assert_eq!(bytes[12..16], [20, 0, 0, 0]);

    let decoded: Log = lcs::decode(&bytes).unwrap();
    assert_eq!(decoded, log);
    assert!(decoded.events[1].is::<Left>());
}

#[test]
fn unregistered_variants_fail() {
    let log = Log { events: vec![Variant::new(Kicked { user: 3 })], last: None };
    assert!(matches!(
        lcs::encode(&log).unwrap_err(),
        Error::UnregisteredVariant { group: "event", detail: Unregistered::Type(_) }
    ));

    let bytes = [1, 0, 0, 0, 11, 0, 0, 0, 1, 0, 0, 0, 0];
    assert_eq!(
        lcs::decode::<Log>(&bytes).unwrap_err(),
        Error::UnregisteredVariant { group: "event", detail: Unregistered::Index(11) }
    );
}

// -----------------------------------------------------------------------------
// Configuration errors

#[derive(Reflect, Default)]
pub struct Untagged {
    pub value: Option<u8>,
}

#[derive(Reflect, Default)]
pub struct Misspelled {
    #[lcs = "optinal"]
    pub value: Option<u8>,
}

#[derive(Reflect, Default)]
pub struct Tagless {
    #[lcs = "enum=event"]
    pub event: Variant<Event>,
}

#[derive(Reflect, Default, Debug)]
pub struct Floating {
    pub ratio: f32,
}

#[derive(Reflect, Default, Debug)]
#[reflect(enum_types)]
pub struct Unreferenced {
    pub id: u8,
}

impl EnumTypes for Unreferenced {
    fn enum_types() -> Vec<EnumVariant> {
        vec![
            EnumVariant::new::<Event, _>("spare", 4, Joined::default()),
            EnumVariant::new::<Event, _>("spare", 4, Left::default()),
        ]
    }
}

#[test]
fn invalid_configurations_are_reported() {
    assert!(matches!(
        lcs::encode(&Untagged::default()).unwrap_err(),
        Error::Config(ConfigError::Directive { field: "value", .. })
    ));
    assert_eq!(
        lcs::descriptor_of::<Misspelled>().unwrap_err(),
        ConfigError::Tag {
            ty: core::any::type_name::<Misspelled>(),
            field: "value",
            source: TagError::Unknown("optinal"),
        }
    );
    assert!(matches!(
        lcs::descriptor_of::<Tagless>().unwrap_err(),
        ConfigError::MissingGroup { group: "event", .. }
    ));
    assert!(matches!(
        lcs::decode::<Floating>(&[0; 4]).unwrap_err(),
        Error::Config(ConfigError::Unsupported { field: "ratio", .. })
    ));

    // The registry is checked even when no field names the group.
    assert_eq!(
        lcs::descriptor_of::<Unreferenced>().unwrap_err(),
        ConfigError::DuplicateIndex {
            ty: core::any::type_name::<Unreferenced>(),
            group: "spare",
            index: 4,
        }
    );
    assert!(matches!(
        lcs::encode(&Unreferenced { id: 1 }).unwrap_err(),
        Error::Config(ConfigError::DuplicateIndex { .. })
    ));

    // Failures are cached and reported the same way every time.
    assert_eq!(
        lcs::descriptor_of::<Misspelled>().unwrap_err(),
        lcs::descriptor_of::<Misspelled>().unwrap_err()
    );
}

// -----------------------------------------------------------------------------
// Descriptor cache

#[derive(Reflect, Default)]
pub struct Contended {
    pub a: u64,
    #[lcs = "optional"]
    pub b: Option<Vec<u16>>,
    pub c: BTreeMap<u8, String>,
}

#[test]
fn concurrent_first_use_builds_one_descriptor() {
    const THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let descriptor = lcs::descriptor_of::<Contended>().unwrap();
                let bytes = lcs::encode(&Contended::default()).unwrap();
                (descriptor as *const _ as usize, bytes)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (address, bytes) in &results {
        assert_eq!(*address, results[0].0);
        assert_eq!(bytes, &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }
}

// -----------------------------------------------------------------------------
// Recursion and depth

#[derive(Reflect, Default, Debug, PartialEq)]
pub struct Comment {
    pub text: String,
    pub replies: Vec<Comment>,
}

fn thread_of(depth: usize) -> Comment {
    (0..depth).fold(Comment { text: "leaf".into(), replies: vec![] }, |child, i| Comment {
        text: i.to_string(),
        replies: vec![child],
    })
}

#[test]
fn recursive_types_round_trip() {
    let comment = Comment {
        text: "root".into(),
        replies: vec![thread_of(3), Comment::default()],
    };
    let bytes = lcs::encode(&comment).unwrap();
    assert_eq!(lcs::decode::<Comment>(&bytes).unwrap(), comment);
}

#[test]
fn depth_limit_applies_both_ways() {
    let deep = thread_of(20);

    let encoder = Encoder::with_options(EncodeOptions::new().with_max_depth(10));
    assert_eq!(
        encoder.encode(&deep).unwrap_err(),
        Error::DepthLimitExceeded { limit: 10 }
    );

    let bytes = lcs::encode(&deep).unwrap();
    let decoder = Decoder::with_options(DecodeOptions::new().with_max_depth(10));
    assert_eq!(
        decoder.decode::<Comment>(&bytes).unwrap_err(),
        Error::DepthLimitExceeded { limit: 10 }
    );
    assert_eq!(Decoder::new().decode::<Comment>(&bytes).unwrap(), deep);
}
