mod state_cell;
mod stateful;
mod watcher;
use std::convert::Infallible;

use rxrust::{
  ops::box_it::{BoxOp, CloneableBoxOp},
  prelude::{BoxIt, ObservableExt},
};
pub use state_cell::ReadRef;
pub use stateful::*;
pub use watcher::*;

/// Read access to a state. Every reader of the same state observes the one
/// value the owning writer holds, never a per-reader copy.
pub trait StateReader: 'static {
  /// The value type of this state.
  type Value;
  /// A reader that only provides read access to the same state.
  type Reader: StateReader<Value = Self::Value>;

  /// Borrow a read snapshot of the state.
  ///
  /// Panics if a write borrow is still alive.
  fn read(&self) -> ReadRef<Self::Value>;

  /// Clone a read-only handle to the same state.
  fn clone_reader(&self) -> Self::Reader;

  /// Try to unwrap the inner value, returning `self` back if other handles
  /// to the same state are still alive.
  fn try_into_value(self) -> Result<Self::Value, Self>
  where
    Self: Sized;
}

/// A reader that can also be subscribed for change notifications.
pub trait StateWatcher: StateReader {
  /// The raw stream of modifies, one item per released write access.
  fn raw_modifies(&self) -> CloneableBoxOp<'static, ModifyScope, Infallible>;

  /// The stream of data modifies, filtering out framework-only changes.
  fn modifies(&self) -> BoxOp<'static, ModifyScope, Infallible> {
    self
      .raw_modifies()
      .filter(|s| s.contains(ModifyScope::DATA))
      .box_it()
  }

  /// Bundle a reader with the modifies stream, so the receiver can observe
  /// the state but never mutate it.
  fn clone_watcher(&self) -> Watcher<Self::Reader> {
    Watcher::new(self.clone_reader(), self.raw_modifies())
  }
}

/// Full access to a state: read, watch and mutate.
pub trait StateWriter: StateWatcher {
  /// Borrow write access; when released it notifies with
  /// [`ModifyScope::BOTH`].
  fn write(&self) -> WriteRef<Self::Value>;

  /// Like [`StateWriter::write`], but the release only notifies data
  /// watchers, the frame stays clean.
  fn silent(&self) -> WriteRef<Self::Value>;

  /// Like [`StateWriter::write`], but the release only notifies the
  /// framework, transparent to data watchers.
  fn shallow(&self) -> WriteRef<Self::Value>;

  /// Clone a writer to the same state.
  fn clone_writer(&self) -> Self;
}
