//! Implements enums to store alternate widget subtrees, and delegate the
//! `Widget` trait to whichever variant was selected. A conditional render is
//! a variant chosen once per build pass from explicit inputs, never a
//! mutable shared binding.

use crate::{
  scene::SceneNode,
  widget::{BuildCtx, Widget},
};

macro_rules! impl_enum_widget {
  ($name:ident, $($var_ty:ident),+) => {
    pub enum $name<$($var_ty),+> {
      $($var_ty($var_ty)),+
    }

    impl<$($var_ty: Widget),+> Widget for $name<$($var_ty),+> {
      fn build(&self, ctx: &mut BuildCtx) -> SceneNode {
        match self {
          $($name::$var_ty(w) => w.build(ctx)),+
        }
      }
    }
  };
}

impl_enum_widget!(E2, A, B);
impl_enum_widget!(E3, A, B, C);

#[cfg(test)]
mod tests {
  use super::*;

  fn text_widget(s: &'static str) -> impl Widget { move |_: &mut BuildCtx| SceneNode::text(s) }

  #[test]
  fn delegates_to_variant() {
    let mut ctx = BuildCtx::new();
    let logged_in = true;
    let w = if logged_in { E2::A(text_widget("admin")) } else { E2::B(text_widget("login")) };
    assert_eq!(w.build(&mut ctx).texts(), ["admin"]);

    let pick = 3;
    let w = match pick {
      1 => E3::A(text_widget("one")),
      2 => E3::B(text_widget("two")),
      _ => E3::C(text_widget("three")),
    };
    assert_eq!(w.build(&mut ctx).texts(), ["three"]);
  }
}
