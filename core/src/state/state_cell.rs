//! This implementation is a fork from `std::cell::RefCell`, allowing us to
//! manage the borrow flag.
use std::{
  cell::{Cell, UnsafeCell},
  ops::{Deref, DerefMut},
  ptr::NonNull,
};

type BorrowFlag = isize;
const UNUSED: BorrowFlag = 0;

#[inline(always)]
fn is_reading(x: BorrowFlag) -> bool { x > UNUSED }

#[inline(always)]
fn is_writing(x: BorrowFlag) -> bool { x < UNUSED }

pub(crate) struct StateCell<W> {
  borrow_flag: Cell<BorrowFlag>,
  #[cfg(debug_assertions)]
  borrowed_at: Cell<Option<&'static std::panic::Location<'static>>>,
  data: UnsafeCell<W>,
}

impl<W> StateCell<W> {
  pub(crate) fn new(data: W) -> Self {
    StateCell {
      borrow_flag: Cell::new(UNUSED),
      #[cfg(debug_assertions)]
      borrowed_at: Cell::new(None),
      data: UnsafeCell::new(data),
    }
  }

  #[track_caller]
  pub(crate) fn read(&self) -> ReadRef<W> {
    let borrow = &self.borrow_flag;
    let b = borrow.get().wrapping_add(1);
    if !is_reading(b) {
      // The flag is untouched on failure, the live write borrow stays valid.
      // A write borrow is outstanding, so `borrowed_at` is `Some`.
      #[cfg(debug_assertions)]
      panic!("Already mutably borrowed: {:?}", self.borrowed_at.get().unwrap());
      #[cfg(not(debug_assertions))]
      panic!("Already mutably borrowed");
    }
    borrow.set(b);
    #[cfg(debug_assertions)]
    {
      // `borrowed_at` is always the *first* active borrow
      if b == 1 {
        self
          .borrowed_at
          .set(Some(std::panic::Location::caller()));
      }
    }

    // SAFETY: `BorrowRef` ensures that there is only immutable access
    // to the value while borrowed.
    let value = unsafe { NonNull::new_unchecked(self.data.get()) };
    ReadRef { value, borrow: BorrowRef { borrow } }
  }

  #[track_caller]
  pub(crate) fn write(&self) -> ValueMutRef<'_, W> {
    let borrow = &self.borrow_flag;
    if borrow.get() != UNUSED {
      #[cfg(debug_assertions)]
      panic!("Already borrowed at: {:?}", self.borrowed_at.get().unwrap());
      #[cfg(not(debug_assertions))]
      panic!("Already borrowed");
    }
    #[cfg(debug_assertions)]
    {
      self
        .borrowed_at
        .set(Some(std::panic::Location::caller()));
    }

    borrow.set(UNUSED - 1);
    // SAFETY: `BorrowRefMut` guarantees unique access while it is alive.
    let value = unsafe { NonNull::new_unchecked(self.data.get()) };
    ValueMutRef { value, borrow: BorrowRefMut { borrow } }
  }

  pub(crate) fn is_unused(&self) -> bool { self.borrow_flag.get() == UNUSED }

  pub(super) fn into_inner(self) -> W { self.data.into_inner() }
}

/// A read borrow of a state, released when dropped.
pub struct ReadRef<'a, T> {
  value: NonNull<T>,
  borrow: BorrowRef<'a>,
}

pub(crate) struct ValueMutRef<'a, T> {
  value: NonNull<T>,
  borrow: BorrowRefMut<'a>,
}

struct BorrowRef<'b> {
  borrow: &'b Cell<BorrowFlag>,
}

pub(crate) struct BorrowRefMut<'b> {
  borrow: &'b Cell<BorrowFlag>,
}

impl Drop for BorrowRefMut<'_> {
  #[inline]
  fn drop(&mut self) {
    let borrow = self.borrow.get();
    debug_assert!(is_writing(borrow));
    self.borrow.set(borrow + 1);
  }
}

impl Drop for BorrowRef<'_> {
  #[inline]
  fn drop(&mut self) {
    let borrow = self.borrow.get();
    debug_assert!(is_reading(borrow));
    self.borrow.set(borrow - 1);
  }
}

impl<'a, V> ReadRef<'a, V> {
  /// Make a new `ReadRef` by mapping the value of the current `ReadRef` to a
  /// part of it, keeping the same borrow.
  pub fn map<U>(r: ReadRef<'a, V>, f: impl FnOnce(&V) -> &U) -> ReadRef<'a, U> {
    // SAFETY: the borrow is still held by the returned `ReadRef`, so the
    // pointee outlives it.
    let value = NonNull::from(f(unsafe { r.value.as_ref() }));
    ReadRef { value, borrow: r.borrow }
  }
}

impl<T> Deref for ReadRef<'_, T> {
  type Target = T;
  #[inline]
  fn deref(&self) -> &Self::Target {
    // SAFETY: the borrow flag guarantees no write access while alive.
    unsafe { self.value.as_ref() }
  }
}

impl<T> Deref for ValueMutRef<'_, T> {
  type Target = T;
  #[inline]
  fn deref(&self) -> &Self::Target {
    // SAFETY: the borrow flag guarantees unique access while alive.
    unsafe { self.value.as_ref() }
  }
}

impl<T> DerefMut for ValueMutRef<'_, T> {
  #[inline]
  fn deref_mut(&mut self) -> &mut Self::Target {
    // SAFETY: the borrow flag guarantees unique access while alive.
    unsafe { self.value.as_mut() }
  }
}
