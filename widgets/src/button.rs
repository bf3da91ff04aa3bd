use loft_core::prelude::*;

/// A display unit: renders a label and routes its activation to a callback
/// given from above. The button owns no state; a container that wants N
/// buttons to stay in sync hands the same callback to each of them.
pub struct Button {
  pub label: String,
  pub on_tap: Callback,
}

impl Button {
  pub fn new(label: impl Into<String>, on_tap: Callback) -> Self {
    Button { label: label.into(), on_tap }
  }
}

impl Widget for Button {
  fn build(&self, ctx: &mut BuildCtx) -> SceneNode {
    let id = ctx.register_tap(self.on_tap.clone());
    SceneNode::control(id).with_child(SceneNode::text(self.label.clone()))
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::Cell, rc::Rc};

  use loft_core::test_helper::TestWindow;

  use super::*;

  #[test]
  fn tap_invokes_the_given_callback() {
    let taps = Rc::new(Cell::new(0));
    let c_taps = taps.clone();
    let mut wnd = TestWindow::new(Button::new("Click me", Rc::new(move || {
      c_taps.set(c_taps.get() + 1);
    })));
    wnd.draw_frame();
    assert_eq!(wnd.control_texts(), ["Click me"]);

    wnd.tap(0).unwrap();
    assert_eq!(taps.get(), 1);
  }
}
