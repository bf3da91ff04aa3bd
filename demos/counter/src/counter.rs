use std::rc::Rc;

use loft::prelude::*;

/// The counter value. It starts at zero and has exactly one mutation,
/// increment by one; it saturates at `u64::MAX` instead of wrapping, so the
/// displayed value never jumps backwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Count(u64);

impl Count {
  pub fn increment(&mut self) { self.0 = self.0.saturating_add(1); }

  pub fn get(self) -> u64 { self.0 }
}

/// The owning container: holds the count and hands every display unit the
/// same value and the same increment callback, so they all update together.
pub struct Counters {
  count: Stateful<Count>,
  units: usize,
}

impl Counters {
  pub fn new(units: usize) -> Self { Self::from_state(Stateful::new(Count::default()), units) }

  /// Build a container over a count that lives even further up.
  pub fn from_state(count: Stateful<Count>, units: usize) -> Self { Counters { count, units } }

  pub fn count(&self) -> &Stateful<Count> { &self.count }
}

impl Widget for Counters {
  fn build(&self, ctx: &mut BuildCtx) -> SceneNode {
    let writer = self.count.clone_writer();
    let on_tap: Callback = Rc::new(move || writer.write().increment());
    let value = self.count.read().get();

    let mut col = Column::default().with_child(Text::new("Counters that update together"));
    for _ in 0..self.units {
      col = col.with_child(count_button(value, on_tap.clone()));
    }
    col.build(ctx)
  }
}

/// A display unit is a pure function of the current value and the shared
/// callback.
fn count_button(value: u64, on_tap: Callback) -> Button {
  Button::new(format!("Clicked {value} times"), on_tap)
}
