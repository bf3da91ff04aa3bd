use ahash::AHashSet;
use loft_core::prelude::*;

/// An ordered sequence of keyed rows. Rows are materialized in input order,
/// one per item; the list never sorts, filters or deduplicates. Keys are
/// expected to be unique within one list, they are what the window uses to
/// track row identity across frames.
pub struct Lists {
  pub items: Vec<ListItem>,
}

/// One row of a [`Lists`]: a stable key, a headline and a categorical color.
pub struct ListItem {
  pub key: Key,
  pub headline: String,
  pub color: Color,
}

impl ListItem {
  pub fn new(key: impl Into<Key>, headline: impl Into<String>, color: Color) -> Self {
    ListItem { key: key.into(), headline: headline.into(), color }
  }
}

impl Widget for ListItem {
  fn build(&self, _: &mut BuildCtx) -> SceneNode {
    SceneNode::text(self.headline.clone())
      .with_key(self.key.clone())
      .with_color(self.color)
  }
}

impl Widget for Lists {
  fn build(&self, ctx: &mut BuildCtx) -> SceneNode {
    let mut seen = AHashSet::new();
    for item in &self.items {
      if !seen.insert(&item.key) {
        log::warn!("duplicate key {:?} in list, row identity is ambiguous", item.key);
      }
    }

    let mut node = SceneNode::flex(Axis::Vertical);
    for item in &self.items {
      node = node.with_child(item.build(ctx));
    }
    node
  }
}

#[cfg(test)]
mod tests {
  use loft_core::test_helper::TestWindow;

  use super::*;

  fn grocery() -> Lists {
    Lists {
      items: vec![
        ListItem::new(1usize, "Cabbage", Color::DARK_GREEN),
        ListItem::new(2usize, "Garlic", Color::DARK_GREEN),
        ListItem::new(3usize, "Apple", Color::MAGENTA),
      ],
    }
  }

  #[test]
  fn rows_keep_input_order_and_keys() {
    let mut wnd = TestWindow::new(grocery());
    wnd.draw_frame();
    assert_eq!(wnd.texts(), ["Cabbage", "Garlic", "Apple"]);

    let keyed = wnd.frame().unwrap().keyed();
    let keys: Vec<_> = keyed.iter().map(|(k, _)| (*k).clone()).collect();
    assert_eq!(keys, [Key::Kusize(1), Key::Kusize(2), Key::Kusize(3)]);
  }

  #[test]
  fn duplicate_keys_still_render_in_order() {
    let mut wnd = TestWindow::new(Lists {
      items: vec![
        ListItem::new(1usize, "a", Color::BLACK),
        ListItem::new(1usize, "b", Color::BLACK),
      ],
    });
    wnd.draw_frame();
    assert_eq!(wnd.texts(), ["a", "b"]);
  }
}
