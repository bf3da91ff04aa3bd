use std::{
  cell::Cell,
  convert::Infallible,
  ops::{Deref, DerefMut},
  rc::Rc,
};

use bitflags::bitflags;
use rxrust::{ops::box_it::CloneableBoxOp, prelude::*};

use super::{
  StateReader, StateWatcher, StateWriter,
  state_cell::{ReadRef, StateCell, ValueMutRef},
};

/// Stateful object use to watch the modifies of the inner data.
pub struct Stateful<W> {
  data: Rc<StateCell<W>>,
  info: Rc<WriterInfo>,
}

/// A read-only handle to the data of a [`Stateful`].
pub struct Reader<W>(Rc<StateCell<W>>);

/// The notifier is a `RxRust` stream that emit notification when the state
/// changed.
#[derive(Default, Clone)]
pub struct Notifier(Subject<'static, ModifyScope, Infallible>);

bitflags! {
  #[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
  pub struct ModifyScope: u8 {
    /// state change only effect the data, transparent to the framework.
    const DATA  = 1 << 0;
    /// state change only effect the framework, transparent to data watchers.
    const FRAMEWORK = 1 << 1;
    /// state change effect both the data and the framework.
    const BOTH = Self::DATA.bits() | Self::FRAMEWORK.bits();
  }
}

pub(crate) struct WriterInfo {
  pub(crate) notifier: Notifier,
  /// The counter of the writer may be modified the data.
  pub(crate) writer_count: Cell<usize>,
}

/// A write borrow of a [`Stateful`]. Releasing it after a mutable access
/// notifies the watchers synchronously, once the borrow is already returned,
/// so a subscriber is free to read the state again.
pub struct WriteRef<'a, W> {
  value: Option<ValueMutRef<'a, W>>,
  modified: bool,
  modify_scope: ModifyScope,
  info: &'a WriterInfo,
}

impl<W: 'static> StateReader for Stateful<W> {
  type Value = W;
  type Reader = Reader<W>;

  #[inline]
  fn read(&self) -> ReadRef<W> { self.data.read() }

  #[inline]
  fn clone_reader(&self) -> Self::Reader { Reader(self.data.clone()) }

  fn try_into_value(self) -> Result<W, Self> {
    if Rc::strong_count(&self.data) == 1 {
      let data = self.data.clone();
      drop(self);
      // SAFETY: the strong count check guarantees unique access.
      let data = unsafe { Rc::try_unwrap(data).unwrap_unchecked() };
      Ok(data.into_inner())
    } else {
      Err(self)
    }
  }
}

impl<W: 'static> StateWatcher for Stateful<W> {
  #[inline]
  fn raw_modifies(&self) -> CloneableBoxOp<'static, ModifyScope, Infallible> {
    self.info.notifier.raw_modifies()
  }
}

impl<W: 'static> StateWriter for Stateful<W> {
  #[inline]
  fn write(&self) -> WriteRef<W> { self.write_ref(ModifyScope::BOTH) }

  #[inline]
  fn silent(&self) -> WriteRef<W> { self.write_ref(ModifyScope::DATA) }

  #[inline]
  fn shallow(&self) -> WriteRef<W> { self.write_ref(ModifyScope::FRAMEWORK) }

  #[inline]
  fn clone_writer(&self) -> Self { self.clone() }
}

impl<W: 'static> StateReader for Reader<W> {
  type Value = W;
  type Reader = Self;

  #[inline]
  fn read(&self) -> ReadRef<W> { self.0.read() }

  #[inline]
  fn clone_reader(&self) -> Self { Reader(self.0.clone()) }

  fn try_into_value(self) -> Result<W, Self> {
    match Rc::try_unwrap(self.0) {
      Ok(data) => Ok(data.into_inner()),
      Err(data) => Err(Reader(data)),
    }
  }
}

impl<W> Stateful<W> {
  pub fn new(data: W) -> Self {
    Self { data: Rc::new(StateCell::new(data)), info: Rc::new(WriterInfo::new()) }
  }

  /// Determines if two `Stateful` instances point to the same underlying
  /// data.
  #[inline]
  pub fn ptr_eq(this: &Self, other: &Self) -> bool {
    Rc::ptr_eq(&this.data, &other.data) && Rc::ptr_eq(&this.info, &other.info)
  }

  /// Convert to a reader if no other writer is alive.
  pub fn into_reader(self) -> Result<Reader<W>, Self> {
    if self.info.writer_count.get() == 1 { Ok(Reader(self.data.clone())) } else { Err(self) }
  }

  fn write_ref(&self, scope: ModifyScope) -> WriteRef<'_, W> {
    let value = Some(self.data.write());
    WriteRef { value, modified: false, modify_scope: scope, info: &self.info }
  }

  fn clone(&self) -> Self {
    self.info.inc_writer();
    Self { data: self.data.clone(), info: self.info.clone() }
  }
}

impl WriterInfo {
  pub(crate) fn new() -> Self {
    WriterInfo { writer_count: Cell::new(1), notifier: <_>::default() }
  }

  pub(crate) fn inc_writer(&self) { self.writer_count.set(self.writer_count.get() + 1); }

  pub(crate) fn dec_writer(&self) { self.writer_count.set(self.writer_count.get() - 1); }
}

impl<W> Drop for Stateful<W> {
  fn drop(&mut self) {
    self.info.dec_writer();
    // The state can never be mutated again once the last writer is gone,
    // close the stream so downstream observers complete.
    if self.info.writer_count.get() == 0 {
      let mut notifier = self.info.notifier.clone();
      notifier.unsubscribe();
    }
  }
}

impl Notifier {
  pub(crate) fn raw_modifies(&self) -> CloneableBoxOp<'static, ModifyScope, Infallible> {
    self.0.clone().box_it()
  }

  pub(crate) fn next(&self, scope: ModifyScope) { self.0.clone().next(scope) }

  pub(crate) fn unsubscribe(&mut self) { self.0.clone().unsubscribe(); }
}

impl<W> Deref for WriteRef<'_, W> {
  type Target = W;
  #[inline]
  fn deref(&self) -> &Self::Target {
    // SAFETY: `value` is `Some` until drop.
    unsafe { &**self.value.as_ref().unwrap_unchecked() }
  }
}

impl<W> DerefMut for WriteRef<'_, W> {
  #[inline]
  fn deref_mut(&mut self) -> &mut Self::Target {
    self.modified = true;
    // SAFETY: `value` is `Some` until drop.
    unsafe { &mut **self.value.as_mut().unwrap_unchecked() }
  }
}

impl<W> Drop for WriteRef<'_, W> {
  fn drop(&mut self) {
    // Return the borrow before notifying, subscribers may read the state.
    self.value.take();
    if self.modified {
      self.info.notifier.next(self.modify_scope);
    }
  }
}

impl<W: std::fmt::Debug> std::fmt::Debug for Stateful<W> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_tuple("Stateful")
      .field(&*self.data.read())
      .finish()
  }
}

impl<W: Default> Default for Stateful<W> {
  fn default() -> Self { Self::new(W::default()) }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use super::*;

  #[test]
  fn smoke() {
    let stateful = Stateful::new(1);
    {
      *stateful.write() += 1;
    }
    assert_eq!(*stateful.read(), 2);
  }

  #[test]
  fn change_notify() {
    let notified = Rc::new(RefCell::new(vec![]));
    let c_notified = notified.clone();
    let w = Stateful::new(0);
    w.raw_modifies()
      .subscribe(move |s| c_notified.borrow_mut().push(s));

    {
      let _ = &mut *w.write();
    }
    assert_eq!(notified.borrow().as_slice(), &[ModifyScope::BOTH]);

    {
      let _ = &mut *w.silent();
    }
    assert_eq!(notified.borrow().as_slice(), &[ModifyScope::BOTH, ModifyScope::DATA]);

    // a write access without a mutable deref notifies nothing.
    {
      let _ = w.write();
      let _ = w.silent();
    }
    assert_eq!(notified.borrow().as_slice(), &[ModifyScope::BOTH, ModifyScope::DATA]);
  }

  #[test]
  fn modifies_filters_framework_scope() {
    let notified = Rc::new(RefCell::new(vec![]));
    let c_notified = notified.clone();
    let w = Stateful::new(0);
    w.modifies()
      .subscribe(move |s| c_notified.borrow_mut().push(s));

    {
      *w.shallow() = 1;
    }
    assert!(notified.borrow().is_empty());

    {
      *w.write() = 2;
    }
    assert_eq!(notified.borrow().as_slice(), &[ModifyScope::BOTH]);
  }

  #[test]
  fn subscriber_can_read_during_notify() {
    let seen = Rc::new(RefCell::new(None));
    let c_seen = seen.clone();
    let w = Stateful::new(0);
    let reader = w.clone_reader();
    w.raw_modifies()
      .subscribe(move |_| *c_seen.borrow_mut() = Some(*reader.read()));

    *w.write() = 42;
    assert_eq!(*seen.borrow(), Some(42));
  }

  #[test]
  fn watcher_holds_no_write_access() {
    let cnt = Rc::new(RefCell::new(0));
    let c_cnt = cnt.clone();
    let w = Stateful::new(0);
    let watcher = w.clone_watcher();
    watcher
      .raw_modifies()
      .subscribe(move |_| *c_cnt.borrow_mut() += 1);

    *w.write() = 1;
    assert_eq!(*watcher.read(), 1);
    assert_eq!(*cnt.borrow(), 1);
  }

  #[test]
  fn writer_count() {
    let w = Stateful::new(());
    let w2 = w.clone_writer();
    let w = match w.into_reader() {
      Err(w) => w,
      Ok(_) => panic!("two writers alive, must not downgrade"),
    };
    drop(w2);
    assert!(w.into_reader().is_ok());
  }

  #[test]
  fn try_into_value() {
    let w = Stateful::new(1);
    let reader = w.clone_reader();
    let w = w.try_into_value().unwrap_err();
    drop(reader);
    assert_eq!(w.try_into_value().ok(), Some(1));
  }

  #[test]
  fn states_are_independent() {
    let a = Stateful::new(0);
    let b = Stateful::new(0);
    assert!(!Stateful::ptr_eq(&a, &b));

    *a.write() = 10;
    assert_eq!(*a.read(), 10);
    assert_eq!(*b.read(), 0);
  }
}
