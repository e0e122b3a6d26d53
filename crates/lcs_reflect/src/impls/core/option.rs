use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{OptionalInfo, TypeInfo, Typed};
use crate::ops::Optional;
use crate::reflection::impl_reflect_cast_fn;

impl<T: Reflect + Typed + Default> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Optional(OptionalInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default> Reflect for Option<T> {
    impl_reflect_cast_fn!(Optional);
}

impl<T: Reflect + Typed + Default> Optional for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|v| v as &dyn Reflect)
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|v| v as &mut dyn Reflect)
    }

    #[inline]
    fn set_none(&mut self) {
        *self = None;
    }

    #[inline]
    fn insert_default(&mut self) -> &mut dyn Reflect {
        self.insert(T::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::Optional;

    #[test]
    fn presence_round_trip() {
        let mut value: Option<u32> = None;
        assert!(value.value().is_none());
        if let Some(v) = value.insert_default().downcast_mut::<u32>() {
            *v = 3;
        }
        assert_eq!(value, Some(3));
        value.set_none();
        assert_eq!(value, None);
    }
}
