use std::convert::Infallible;

use rxrust::ops::box_it::CloneableBoxOp;

use super::{ModifyScope, ReadRef, StateReader, StateWatcher};

/// A reader bundled with the modifies stream of its origin writer, so the
/// receiver can observe the state but never mutate it.
pub struct Watcher<R> {
  reader: R,
  modifies: CloneableBoxOp<'static, ModifyScope, Infallible>,
}

impl<R> Watcher<R> {
  pub fn new(reader: R, modifies: CloneableBoxOp<'static, ModifyScope, Infallible>) -> Self {
    Self { reader, modifies }
  }
}

impl<R: StateReader> StateReader for Watcher<R> {
  type Value = R::Value;
  type Reader = R::Reader;

  #[inline]
  fn read(&self) -> ReadRef<Self::Value> { self.reader.read() }

  #[inline]
  fn clone_reader(&self) -> Self::Reader { self.reader.clone_reader() }

  #[inline]
  fn try_into_value(self) -> Result<Self::Value, Self> {
    let Self { reader, modifies } = self;
    reader
      .try_into_value()
      .map_err(|reader| Self { reader, modifies })
  }
}

impl<R: StateReader> StateWatcher for Watcher<R> {
  #[inline]
  fn raw_modifies(&self) -> CloneableBoxOp<'static, ModifyScope, Infallible> {
    self.modifies.clone()
  }
}
