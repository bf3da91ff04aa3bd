use std::rc::Rc;

use ahash::AHashMap;

use crate::scene::{HandlerId, SceneNode};

/// The shared activation handler an owning container passes down to its
/// display units.
pub type Callback = Rc<dyn Fn()>;

pub type BoxWidget = Box<dyn Widget>;

/// Anything that can describe itself as a scene subtree for the current
/// frame. A widget reads its inputs at build time and owns no frame state;
/// state lives in [`Stateful`](crate::state::Stateful) containers above it.
pub trait Widget {
  fn build(&self, ctx: &mut BuildCtx) -> SceneNode;
}

/// The per-frame build context. Controls register their tap handler here and
/// receive the id their scene node carries; the window routes activation
/// events through this registry until the next frame replaces it.
pub struct BuildCtx {
  next_handler: u32,
  handlers: AHashMap<HandlerId, Callback>,
}

impl BuildCtx {
  pub(crate) fn new() -> Self { BuildCtx { next_handler: 0, handlers: AHashMap::new() } }

  /// Register a tap handler for the control being built.
  pub fn register_tap(&mut self, handler: Callback) -> HandlerId {
    let id = HandlerId(self.next_handler);
    self.next_handler += 1;
    self.handlers.insert(id, handler);
    id
  }

  pub(crate) fn into_handlers(self) -> AHashMap<HandlerId, Callback> { self.handlers }
}

impl<F: Fn(&mut BuildCtx) -> SceneNode> Widget for F {
  #[inline]
  fn build(&self, ctx: &mut BuildCtx) -> SceneNode { self(ctx) }
}

impl Widget for BoxWidget {
  #[inline]
  fn build(&self, ctx: &mut BuildCtx) -> SceneNode { (**self).build(ctx) }
}

/// Convenience to erase a widget's type when collecting children.
pub trait WidgetExt: Widget + Sized + 'static {
  fn boxed(self) -> BoxWidget { Box::new(self) }
}

impl<T: Widget + Sized + 'static> WidgetExt for T {}
