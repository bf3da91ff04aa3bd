use loft_core::prelude::*;

/// A run of text. Pure display, owns nothing.
pub struct Text {
  pub text: String,
  pub color: Option<Color>,
}

impl Text {
  pub fn new(text: impl Into<String>) -> Self { Text { text: text.into(), color: None } }

  pub fn with_color(mut self, color: Color) -> Self {
    self.color = Some(color);
    self
  }
}

impl Widget for Text {
  fn build(&self, _: &mut BuildCtx) -> SceneNode {
    let node = SceneNode::text(self.text.clone());
    match self.color {
      Some(color) => node.with_color(color),
      None => node,
    }
  }
}

#[cfg(test)]
mod tests {
  use loft_core::test_helper::TestWindow;

  use super::*;
  use crate::layout::Row;

  #[test]
  fn plain_and_colored() {
    let mut wnd = TestWindow::new(
      Row::default()
        .with_child(Text::new("Hello there."))
        .with_child(Text::new("fruit").with_color(Color::MAGENTA)),
    );
    wnd.draw_frame();
    assert_eq!(wnd.texts(), ["Hello there.", "fruit"]);

    let frame = wnd.frame().unwrap();
    assert_eq!(frame.children[0].color, None);
    assert_eq!(frame.children[1].color, Some(Color::MAGENTA));
  }
}
