//! Helpers for exercising widgets in a headless window, exposed behind the
//! `test-utils` feature and consumed from dev-dependencies.

use std::ops::{Deref, DerefMut};

use crate::{
  state::{Reader, StateWatcher, Stateful, Watcher},
  widget::Widget,
  window::{EventError, Window},
};

pub struct TestWindow(pub Window);

impl TestWindow {
  /// A window over `root`, not yet drawn, so callers can still
  /// [`Window::watch`] states before the first frame.
  pub fn new(root: impl Widget + 'static) -> Self { TestWindow(Window::new(root)) }

  /// All text runs of the current frame.
  pub fn texts(&self) -> Vec<String> {
    self
      .frame()
      .expect("no frame drawn yet")
      .texts()
      .iter()
      .map(|t| t.to_string())
      .collect()
  }

  /// What each control of the current frame displays, in tree order.
  pub fn control_texts(&self) -> Vec<String> {
    self
      .frame()
      .expect("no frame drawn yet")
      .control_texts()
  }

  /// Tap the `nth` control of the current frame and process the event to
  /// completion.
  pub fn tap(&mut self, nth: usize) -> Result<(), EventError> {
    let id = self
      .frame()
      .expect("no frame drawn yet")
      .controls()[nth];
    self.dispatch_tap(id)
  }
}

impl Deref for TestWindow {
  type Target = Window;
  fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for TestWindow {
  fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

/// Split a value into a watcher for the consumer side and a writer for the
/// producer side.
pub fn split_value<T: 'static>(v: T) -> (Watcher<Reader<T>>, Stateful<T>) {
  let writer = Stateful::new(v);
  (writer.clone_watcher(), writer)
}
