//! The scene tree is what a build pass produces: a plain value tree of text
//! runs, tappable controls and flex containers. It is rebuilt from scratch on
//! every frame, the window only keeps the last one for inspection and key
//! diffing.

use std::fmt;

use crate::key::Key;

/// Identifies a tappable control within the frame it was built in. Ids are
/// assigned per build pass and are not stable across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(pub(crate) u32);

/// A sRGB color, only used as a categorical style tag by the headless scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Color {
  pub const BLACK: Color = Color::new(0, 0, 0);
  pub const DARK_GREEN: Color = Color::new(0, 100, 0);
  pub const MAGENTA: Color = Color::new(255, 0, 255);
  pub const WHITE: Color = Color::new(255, 255, 255);

  pub const fn new(r: u8, g: u8, b: u8) -> Self { Color { r, g, b } }
}

/// The main axis a flex container lays its children along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
  #[default]
  Vertical,
  Horizontal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
  /// A container laying its children along an axis.
  Flex(Axis),
  /// A run of text.
  Text(String),
  /// A control whose activation routes to the registered handler.
  Control(HandlerId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
  pub kind: NodeKind,
  pub key: Option<Key>,
  pub color: Option<Color>,
  pub children: Vec<SceneNode>,
}

impl SceneNode {
  pub fn text(text: impl Into<String>) -> Self { Self::new(NodeKind::Text(text.into())) }

  pub fn control(id: HandlerId) -> Self { Self::new(NodeKind::Control(id)) }

  pub fn flex(axis: Axis) -> Self { Self::new(NodeKind::Flex(axis)) }

  fn new(kind: NodeKind) -> Self {
    SceneNode { kind, key: None, color: None, children: vec![] }
  }

  pub fn with_key(mut self, key: impl Into<Key>) -> Self {
    self.key = Some(key.into());
    self
  }

  pub fn with_color(mut self, color: Color) -> Self {
    self.color = Some(color);
    self
  }

  pub fn with_child(mut self, child: SceneNode) -> Self {
    self.children.push(child);
    self
  }

  /// Visit the tree depth-first, parents before children. The visited nodes
  /// borrow from `self`, so the closure may collect them.
  pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a SceneNode)) {
    f(self);
    for c in &self.children {
      c.visit(f);
    }
  }

  /// All text runs, in tree order.
  pub fn texts(&self) -> Vec<&str> {
    let mut texts = vec![];
    self.visit(&mut |n| {
      if let NodeKind::Text(t) = &n.kind {
        texts.push(t.as_str());
      }
    });
    texts
  }

  /// All control ids, in tree order.
  pub fn controls(&self) -> Vec<HandlerId> {
    let mut ids = vec![];
    self.visit(&mut |n| {
      if let NodeKind::Control(id) = n.kind {
        ids.push(id);
      }
    });
    ids
  }

  /// For every control, the concatenation of the text runs below it. This is
  /// "what each display unit currently shows".
  pub fn control_texts(&self) -> Vec<String> {
    let mut texts = vec![];
    self.visit(&mut |n| {
      if let NodeKind::Control(_) = n.kind {
        texts.push(n.texts().join(" "));
      }
    });
    texts
  }

  /// The keyed rows in tree order, with their categorical color.
  pub fn keyed(&self) -> Vec<(&Key, Option<Color>)> {
    let mut rows = vec![];
    self.visit(&mut |n| {
      if let Some(key) = &n.key {
        rows.push((key, n.color));
      }
    });
    rows
  }

  pub(crate) fn keys_in_order(&self) -> Vec<Key> {
    self
      .keyed()
      .into_iter()
      .map(|(k, _)| k.clone())
      .collect()
  }

  fn fmt_at(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    write!(f, "{:indent$}", "", indent = depth * 2)?;
    match &self.kind {
      NodeKind::Flex(axis) => write!(f, "Flex({axis:?})")?,
      NodeKind::Text(t) => write!(f, "Text {t:?}")?,
      NodeKind::Control(id) => write!(f, "Control #{}", id.0)?,
    }
    if let Some(key) = &self.key {
      write!(f, " key={key:?}")?;
    }
    if let Some(c) = &self.color {
      write!(f, " color=#{:02x}{:02x}{:02x}", c.r, c.g, c.b)?;
    }
    for child in &self.children {
      writeln!(f)?;
      child.fmt_at(f, depth + 1)?;
    }
    Ok(())
  }
}

impl fmt::Display for SceneNode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.fmt_at(f, 0) }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> SceneNode {
    SceneNode::flex(Axis::Vertical)
      .with_child(SceneNode::text("title"))
      .with_child(
        SceneNode::control(HandlerId(0)).with_child(SceneNode::text("press me")),
      )
      .with_child(
        SceneNode::text("apple")
          .with_key(3usize)
          .with_color(Color::MAGENTA),
      )
  }

  #[test]
  fn collect_in_tree_order() {
    let scene = sample();
    assert_eq!(scene.texts(), ["title", "press me", "apple"]);
    assert_eq!(scene.controls(), [HandlerId(0)]);
    assert_eq!(scene.control_texts(), ["press me"]);
    assert_eq!(scene.keyed(), [(&Key::Kusize(3), Some(Color::MAGENTA))]);
  }

  #[test]
  fn arbitrarily_deep_trees() {
    let mut node = SceneNode::text("leaf");
    for _ in 0..100 {
      node = SceneNode::flex(Axis::Vertical).with_child(node);
    }
    assert_eq!(node.texts(), ["leaf"]);
  }

  #[test]
  fn display_tree() {
    let fmt = sample().to_string();
    assert_eq!(
      fmt,
      "Flex(Vertical)\n  Text \"title\"\n  Control #0\n    Text \"press me\"\n  \
       Text \"apple\" key=Kusize(3) color=#ff00ff"
    );
  }
}
