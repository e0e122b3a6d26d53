use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::any::TypeId;

use lcs_utils::TypeIdMap;

use super::{FieldLayout, Layout, TypeDescriptor, resolve};
use crate::codec::{ConfigError, Directive, DirectiveSet};
use crate::info::{StructInfo, TypeInfo};
use crate::registry::EnumRegistry;

// -----------------------------------------------------------------------------
// Shallow build

/// Builds the descriptor of one type.
///
/// Never resolves another descriptor: nested structs are left as
/// [`Layout::Nested`] for [`check`] and for use time.
pub(super) fn build(info: &'static TypeInfo) -> Result<TypeDescriptor, ConfigError> {
    let built = match info {
        TypeInfo::Struct(info) => build_struct(info),
        _ => {
            let mut cx = FieldContext::new(info.type_name(), "", None);
            cx.field_layout(info, &DirectiveSet::EMPTY)
                .map(|layout| (layout, None))
        }
    };

    match built {
        Ok((layout, registry)) => {
            let descriptor = TypeDescriptor::new(info, layout, registry);
            log::debug!(
                "described `{}` ({} exported fields)",
                info.type_name(),
                descriptor.fields().len(),
            );
            Ok(descriptor)
        }
        Err(err) => {
            log::debug!("cannot describe `{}`: {err}", info.type_name());
            Err(err)
        }
    }
}

fn build_struct(info: &StructInfo) -> Result<(Layout, Option<EnumRegistry>), ConfigError> {
    let ty = info.ty().name();

    let registry = info
        .enum_types()
        .map(|variants| EnumRegistry::new(info.ty(), variants))
        .transpose()?;

    for hidden in info.hidden_fields() {
        if let Some(tag) = hidden.tag().filter(|tag| !tag.trim().is_empty()) {
            return Err(ConfigError::HiddenDirective {
                ty,
                field: hidden.name(),
                tag,
            });
        }
    }

    let fields = info
        .iter()
        .map(|field| {
            let directives = DirectiveSet::parse(field.tag().unwrap_or_default()).map_err(
                |source| ConfigError::Tag {
                    ty,
                    field: field.name(),
                    source,
                },
            )?;
            let mut cx = FieldContext::new(ty, field.name(), registry.as_ref());
            let layout = cx.field_layout(field.type_info(), &directives)?;
            Ok(FieldLayout {
                name: field.name(),
                directives,
                layout,
            })
        })
        .collect::<Result<Box<[_]>, ConfigError>>()?;

    Ok((Layout::Struct(fields), registry))
}

/// Resolves the layout of one field, applying its directives.
struct FieldContext<'a> {
    ty: &'static str,
    field: &'static str,
    registry: Option<&'a EnumRegistry>,
    used: Directive,
}

impl<'a> FieldContext<'a> {
    fn new(ty: &'static str, field: &'static str, registry: Option<&'a EnumRegistry>) -> Self {
        Self {
            ty,
            field,
            registry,
            used: Directive::empty(),
        }
    }

    fn field_layout(
        &mut self,
        info: &'static TypeInfo,
        directives: &DirectiveSet,
    ) -> Result<Layout, ConfigError> {
        let layout = self.layout(info, directives)?;

        let unused = directives.flags().difference(self.used);
        if unused.contains(Directive::OPTIONAL) {
            return Err(self.directive_error("`optional` applies to `Option` only"));
        }
        if unused.contains(Directive::ENUM) {
            return Err(self.directive_error("`enum=` applies to `Variant` only"));
        }
        Ok(layout)
    }

    // Directives pass through collections down to the leaf; map keys
    // never take any.
    fn layout(
        &mut self,
        info: &'static TypeInfo,
        directives: &DirectiveSet,
    ) -> Result<Layout, ConfigError> {
        Ok(match info {
            TypeInfo::Scalar(info) => Layout::Scalar(info.kind()),
            TypeInfo::Text(_) => Layout::Text,
            // The raw byte forms need the item to be `u8` itself, not a
            // `Box<u8>` that shares its info.
            TypeInfo::List(info) => {
                let item = info.item_info();
                if info.item_ty().is::<u8>() {
                    Layout::Bytes
                } else {
                    Layout::Sequence(Box::new(self.layout(item, directives)?))
                }
            }
            TypeInfo::Array(info) => {
                let item = info.item_info();
                if info.item_ty().is::<u8>() {
                    Layout::ByteArray(info.len())
                } else {
                    Layout::Array {
                        len: info.len(),
                        item: Box::new(self.layout(item, directives)?),
                    }
                }
            }
            TypeInfo::Map(info) => Layout::Map {
                key: Box::new(self.layout(info.key_info(), &DirectiveSet::EMPTY)?),
                value: Box::new(self.layout(info.value_info(), directives)?),
            },
            TypeInfo::Optional(info) => {
                if !directives.contains(Directive::OPTIONAL) {
                    return Err(self.directive_error("an `Option` needs the `optional` directive"));
                }
                self.used |= Directive::OPTIONAL;
                Layout::Optional(Box::new(self.layout(info.some_info(), directives)?))
            }
            TypeInfo::Variant(info) => {
                let Some(group) = directives.group() else {
                    return Err(self.directive_error("a `Variant` needs an `enum=<group>` directive"));
                };
                self.used |= Directive::ENUM;

                let table = self
                    .registry
                    .and_then(|registry| registry.group(group))
                    .ok_or(ConfigError::MissingGroup {
                        ty: self.ty,
                        field: self.field,
                        group,
                    })?;
                if table.marker() != info.group() {
                    return Err(ConfigError::GroupMismatch {
                        ty: self.ty,
                        group,
                        expected: info.group().name(),
                        found: table.marker().name(),
                    });
                }
                Layout::Variant(Arc::clone(table))
            }
            TypeInfo::Struct(_) => Layout::Nested(info),
            TypeInfo::Opaque(info) => {
                return Err(ConfigError::Unsupported {
                    ty: self.ty,
                    field: self.field,
                    found: info.ty().name(),
                    reason: "it has no canonical wire form",
                });
            }
        })
    }

    fn directive_error(&self, reason: &'static str) -> ConfigError {
        ConfigError::Directive {
            ty: self.ty,
            field: self.field,
            reason,
        }
    }
}

// -----------------------------------------------------------------------------
// Validation

/// Validates everything reachable from `root`.
///
/// Resolves every nested and alternative descriptor, computes minimum
/// wire sizes (rejecting types that contain themselves directly), and
/// rejects collections of zero-sized items.
pub(super) fn check(root: &'static TypeDescriptor) -> Result<(), ConfigError> {
    let result = reachable(root).and_then(|descriptors| {
        let mut active = Vec::new();
        for &descriptor in &descriptors {
            min_size(descriptor, &mut active)?;
        }
        descriptors.into_iter().try_for_each(check_items)
    });

    if let Err(err) = &result {
        log::debug!("`{}` is not encodable: {err}", root.ty().name());
    }
    result
}

fn reachable(root: &'static TypeDescriptor) -> Result<Vec<&'static TypeDescriptor>, ConfigError> {
    let mut seen = TypeIdMap::new();
    let mut found = Vec::new();
    let mut pending = vec![root];

    while let Some(descriptor) = pending.pop() {
        if seen.insert(descriptor.ty().id(), ()).is_some() {
            continue;
        }
        found.push(descriptor);

        descriptor.layout.try_walk(&mut |layout: &Layout| -> Result<(), ConfigError> {
            match *layout {
                Layout::Nested(info) => pending.push(resolve(info)?),
                Layout::Variant(ref group) => {
                    for entry in group.entries() {
                        pending.push(resolve(entry.type_info())?);
                    }
                }
                _ => {}
            }
            Ok(())
        })?;
    }

    Ok(found)
}

fn min_size(
    descriptor: &'static TypeDescriptor,
    active: &mut Vec<TypeId>,
) -> Result<usize, ConfigError> {
    if let Some(size) = descriptor.min_size() {
        return Ok(size);
    }

    let type_id = descriptor.ty().id();
    if active.contains(&type_id) {
        return Err(ConfigError::InfiniteSize {
            ty: descriptor.ty().name(),
        });
    }

    active.push(type_id);
    let size = layout_min_size(&descriptor.layout, active);
    active.pop();

    let size = size?;
    descriptor.set_min_size(size);
    Ok(size)
}

pub(super) fn layout_min_size(layout: &Layout, active: &mut Vec<TypeId>) -> Result<usize, ConfigError> {
    Ok(match layout {
        Layout::Scalar(kind) => kind.width(),
        Layout::Text
        | Layout::Bytes
        | Layout::Sequence(_)
        | Layout::Map { .. }
        | Layout::Variant(_) => 4,
        Layout::ByteArray(len) => *len,
        Layout::Array { len: 0, .. } => 0,
        Layout::Array { len, item } => layout_min_size(item, active)?.saturating_mul(*len),
        Layout::Optional(_) => 1,
        Layout::Struct(fields) => fields.iter().try_fold(0_usize, |sum, field| {
            Ok(sum.saturating_add(layout_min_size(&field.layout, active)?))
        })?,
        Layout::Nested(info) => min_size(resolve(*info)?, active)?,
    })
}

// Only called once every reachable minimum size is known.
fn check_items(descriptor: &TypeDescriptor) -> Result<(), ConfigError> {
    let ty = descriptor.ty().name();
    let check_field = |field: &'static str, layout: &Layout| {
        layout.try_walk(&mut |layout: &Layout| -> Result<(), ConfigError> {
            let item_size = match layout {
                Layout::Sequence(item) => layout_min_size(item, &mut Vec::new())?,
                Layout::Map { key, value } => layout_min_size(key, &mut Vec::new())?
                    .saturating_add(layout_min_size(value, &mut Vec::new())?),
                _ => return Ok(()),
            };
            if item_size == 0 {
                return Err(ConfigError::ZeroSizedElement { ty, field });
            }
            Ok(())
        })
    };

    match &descriptor.layout {
        Layout::Struct(fields) => fields
            .iter()
            .try_for_each(|field| check_field(field.name, &field.layout)),
        layout => check_field("", layout),
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::codec::{ConfigError, Layout, TagError, descriptor_of};
    use crate::derive::Reflect;
    use crate::info::ScalarKind;
    use crate::ops::{Variant, VariantOf};
    use crate::registry::{EnumTypes, EnumVariant};

    #[derive(Reflect)]
    struct Flat {
        pub a: u16,
        pub b: Vec<u8>,
        pub c: [u8; 3],
        pub d: [u32; 2],
        pub e: String,
        hidden: f64,
    }

    #[test]
    fn flat_struct_layout() {
        let descriptor = descriptor_of::<Flat>().unwrap();
        let fields = descriptor.fields();
        assert_eq!(fields.len(), 5);
        assert!(matches!(fields[0].layout(), Layout::Scalar(ScalarKind::U16)));
        assert!(matches!(fields[1].layout(), Layout::Bytes));
        assert!(matches!(fields[2].layout(), Layout::ByteArray(3)));
        assert!(matches!(fields[3].layout(), Layout::Array { len: 2, .. }));
        assert!(matches!(fields[4].layout(), Layout::Text));
        assert_eq!(descriptor.min_size(), Some(2 + 4 + 3 + 8 + 4));
    }

    #[test]
    fn descriptors_are_shared() {
        let a = descriptor_of::<Flat>().unwrap();
        let b = descriptor_of::<Flat>().unwrap();
        assert!(core::ptr::eq(a, b));
    }

    #[derive(Reflect)]
    struct BoxedBytes {
        pub list: Vec<Box<u8>>,
        pub fixed: [Box<u8>; 2],
    }

    #[test]
    fn boxed_bytes_are_encoded_per_item() {
        let fields = descriptor_of::<BoxedBytes>().unwrap().fields();
        assert!(matches!(fields[0].layout(), Layout::Sequence(_)));
        assert!(matches!(fields[1].layout(), Layout::Array { len: 2, .. }));
    }

    #[derive(Reflect)]
    struct MissingOptional {
        pub value: Option<u8>,
    }

    #[derive(Reflect)]
    struct StrayOptional {
        #[lcs = "optional"]
        pub value: u8,
    }

    #[derive(Reflect)]
    struct BadTag {
        #[lcs = "optional,bogus"]
        pub value: Option<u8>,
    }

    #[derive(Reflect)]
    struct TaggedHidden {
        #[lcs = "optional"]
        value: Option<u8>,
    }

    #[test]
    fn directive_errors() {
        assert!(matches!(
            descriptor_of::<MissingOptional>(),
            Err(ConfigError::Directive { field: "value", .. })
        ));
        assert!(matches!(
            descriptor_of::<StrayOptional>(),
            Err(ConfigError::Directive { field: "value", .. })
        ));
        assert_eq!(
            descriptor_of::<BadTag>().unwrap_err(),
            ConfigError::Tag {
                ty: core::any::type_name::<BadTag>(),
                field: "value",
                source: TagError::Unknown("bogus"),
            }
        );
        assert!(matches!(
            descriptor_of::<TaggedHidden>(),
            Err(ConfigError::HiddenDirective { field: "value", tag: "optional", .. })
        ));
    }

    #[test]
    fn failures_are_cached() {
        let first = descriptor_of::<MissingOptional>().unwrap_err();
        let second = descriptor_of::<MissingOptional>().unwrap_err();
        assert_eq!(first, second);
    }

    #[derive(Reflect)]
    struct Floats {
        pub value: f32,
    }

    #[test]
    fn opaque_types_are_rejected() {
        assert!(matches!(
            descriptor_of::<Floats>(),
            Err(ConfigError::Unsupported { field: "value", found: "f32", .. })
        ));
        assert!(descriptor_of::<usize>().is_err());
    }

    #[derive(Reflect, Default)]
    struct Node {
        pub value: u8,
        #[lcs = "optional"]
        pub next: Option<Box<Node>>,
        pub children: Vec<Node>,
    }

    #[derive(Reflect, Default)]
    struct Even {
        #[lcs = "optional"]
        pub odd: Option<Box<Odd>>,
    }

    #[derive(Reflect, Default)]
    struct Odd {
        pub even: Even,
    }

    #[test]
    fn recursive_types() {
        let node = descriptor_of::<Node>().unwrap();
        assert_eq!(node.min_size(), Some(1 + 1 + 4));
        assert_eq!(descriptor_of::<Odd>().unwrap().min_size(), Some(1));
        assert_eq!(descriptor_of::<Even>().unwrap().min_size(), Some(1));
    }

    #[derive(Reflect)]
    struct Endless {
        pub next: Box<Endless>,
    }

    #[test]
    fn self_containing_types_are_rejected() {
        assert!(matches!(
            descriptor_of::<Endless>(),
            Err(ConfigError::InfiniteSize { .. })
        ));
    }

    #[derive(Reflect, Default)]
    struct Unit;

    #[derive(Reflect)]
    struct Units {
        pub units: Vec<Unit>,
    }

    #[derive(Reflect)]
    struct Keyed {
        pub map: BTreeMap<u8, Vec<u16>>,
    }

    #[test]
    fn collection_items_need_bytes() {
        assert!(matches!(
            descriptor_of::<Units>(),
            Err(ConfigError::ZeroSizedElement { field: "units", .. })
        ));
        let keyed = descriptor_of::<Keyed>().unwrap();
        assert!(matches!(keyed.fields()[0].layout(), Layout::Map { .. }));
    }

    enum Shape {}
    enum Color {}

    impl VariantOf<Shape> for u8 {}
    impl VariantOf<Shape> for String {}
    impl VariantOf<Color> for u16 {}

    #[derive(Reflect)]
    #[reflect(enum_types)]
    struct Canvas {
        #[lcs = "enum=shape"]
        pub shapes: Vec<Variant<Shape>>,
        #[lcs = "optional,enum=shape"]
        pub focus: Option<Variant<Shape>>,
    }

    impl EnumTypes for Canvas {
        fn enum_types() -> Vec<EnumVariant> {
            vec![
                EnumVariant::new::<Shape, _>("shape", 0, 0_u8),
                EnumVariant::new::<Shape, _>("shape", 1, String::new()),
            ]
        }
    }

    #[test]
    fn variant_fields_share_the_group() {
        let descriptor = descriptor_of::<Canvas>().unwrap();
        let fields = descriptor.fields();
        let Layout::Sequence(item) = fields[0].layout() else {
            panic!("expected a sequence");
        };
        let (Layout::Variant(a), Layout::Optional(focus)) = (&**item, fields[1].layout()) else {
            panic!("unexpected layouts");
        };
        let Layout::Variant(b) = &**focus else {
            panic!("expected a variant");
        };
        assert!(alloc::sync::Arc::ptr_eq(a, b));
        assert_eq!(a.entries().len(), 2);
    }

    #[derive(Reflect)]
    #[reflect(enum_types)]
    struct WrongGroup {
        #[lcs = "enum=paint"]
        pub shape: Variant<Shape>,
    }

    impl EnumTypes for WrongGroup {
        fn enum_types() -> Vec<EnumVariant> {
            vec![EnumVariant::new::<Color, _>("paint", 0, 0_u16)]
        }
    }

    #[derive(Reflect)]
    struct NoRegistry {
        #[lcs = "enum=shape"]
        pub shape: Variant<Shape>,
    }

    #[test]
    fn group_errors() {
        assert!(matches!(
            descriptor_of::<WrongGroup>(),
            Err(ConfigError::GroupMismatch { group: "paint", .. })
        ));
        assert!(matches!(
            descriptor_of::<NoRegistry>(),
            Err(ConfigError::MissingGroup { group: "shape", field: "shape", .. })
        ));
    }
}
