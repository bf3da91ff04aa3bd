use loft_core::prelude::*;

/// Lays its children out along the vertical axis.
#[derive(Default)]
pub struct Column {
  pub children: Vec<BoxWidget>,
}

/// Lays its children out along the horizontal axis.
#[derive(Default)]
pub struct Row {
  pub children: Vec<BoxWidget>,
}

impl Column {
  pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
    self.children.push(child.boxed());
    self
  }
}

impl Row {
  pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
    self.children.push(child.boxed());
    self
  }
}

fn build_flex(axis: Axis, children: &[BoxWidget], ctx: &mut BuildCtx) -> SceneNode {
  let mut node = SceneNode::flex(axis);
  for child in children {
    node = node.with_child(child.build(ctx));
  }
  node
}

impl Widget for Column {
  fn build(&self, ctx: &mut BuildCtx) -> SceneNode {
    build_flex(Axis::Vertical, &self.children, ctx)
  }
}

impl Widget for Row {
  fn build(&self, ctx: &mut BuildCtx) -> SceneNode {
    build_flex(Axis::Horizontal, &self.children, ctx)
  }
}

#[cfg(test)]
mod tests {
  use loft_core::test_helper::TestWindow;

  use super::*;
  use crate::text::Text;

  #[test]
  fn children_keep_declaration_order() {
    let mut wnd = TestWindow::new(
      Column::default()
        .with_child(Text::new("first"))
        .with_child(Row::default().with_child(Text::new("second")))
        .with_child(Text::new("third")),
    );
    wnd.draw_frame();
    assert_eq!(wnd.texts(), ["first", "second", "third"]);

    let frame = wnd.frame().unwrap();
    assert_eq!(frame.kind, NodeKind::Flex(Axis::Vertical));
    assert_eq!(frame.children[1].kind, NodeKind::Flex(Axis::Horizontal));
  }
}
