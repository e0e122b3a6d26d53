use alloc::vec::Vec;
use core::any::Any;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::List;
use crate::reflection::impl_reflect_cast_fn;

impl<T: Reflect + Typed + Default> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default> Reflect for Vec<T> {
    impl_reflect_cast_fn!(List);
}

impl<T: Reflect + Typed + Default> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
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
    fn clear(&mut self) {
        Vec::clear(self);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn push_default(&mut self) -> &mut dyn Reflect {
        self.push(T::default());
        let last = self.len() - 1;
        &mut self.as_mut_slice()[last]
    }

    #[inline]
    fn as_bytes(&self) -> Option<&[u8]> {
        (self as &dyn Any)
            .downcast_ref::<Vec<u8>>()
            .map(Vec::as_slice)
    }

    #[inline]
    fn bytes_mut(&mut self) -> Option<&mut Vec<u8>> {
        (self as &mut dyn Any).downcast_mut::<Vec<u8>>()
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::List;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn push_default_returns_new_item() {
        let mut list: Vec<String> = Vec::new();
        if let Some(s) = list.push_default().downcast_mut::<String>() {
            s.push_str("hi");
        }
        assert_eq!(list, ["hi"]);
        assert_eq!(List::len(&list), 1);
    }

    #[test]
    fn byte_vectors_expose_bytes() {
        let mut bytes = vec![1_u8, 2];
        assert_eq!(List::as_bytes(&bytes), Some(&[1_u8, 2][..]));
        if let Some(raw) = bytes.bytes_mut() {
            raw.push(3);
        }
        assert_eq!(bytes, [1, 2, 3]);
        assert!(List::as_bytes(&vec![1_u32]).is_none());
    }
}
