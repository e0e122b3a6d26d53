use core::any::Any;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ArrayInfo, TypeInfo, Typed};
use crate::ops::Array;
use crate::reflection::impl_reflect_cast_fn;

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    impl_reflect_cast_fn!(Array);
}

impl<T: Reflect + Typed, const N: usize> Array for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn item(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }

    #[inline]
    fn item_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice()
            .get_mut(index)
            .map(|v| v as &mut dyn Reflect)
    }

    #[inline]
    fn as_bytes(&self) -> Option<&[u8]> {
        (self as &dyn Any)
            .downcast_ref::<[u8; N]>()
            .map(<[u8; N]>::as_slice)
    }

    #[inline]
    fn as_bytes_mut(&mut self) -> Option<&mut [u8]> {
        (self as &mut dyn Any)
            .downcast_mut::<[u8; N]>()
            .map(<[u8; N]>::as_mut_slice)
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::Array;

    #[test]
    fn byte_arrays_expose_bytes() {
        let mut bytes = [1_u8, 2, 3];
        assert_eq!(bytes.as_bytes(), Some(&[1_u8, 2, 3][..]));
        if let Some(raw) = bytes.as_bytes_mut() {
            raw[0] = 9;
        }
        assert_eq!(bytes, [9, 2, 3]);
        assert!([1_u16, 2].as_bytes().is_none());
    }

    #[test]
    fn items_by_index() {
        let values = [5_i32, 6];
        assert_eq!(Array::len(&values), 2);
        assert_eq!(values.item(1).unwrap().downcast_ref::<i32>(), Some(&6));
        assert!(values.item(2).is_none());
    }
}
