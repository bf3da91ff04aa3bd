//! The window is the rendering-layer collaborator the widgets rely on: it
//! re-invokes the root widget with current values whenever watched state
//! changes, and it routes activation events to their handlers, one event at
//! a time, in order, never duplicated. An event binds to the handler of the
//! frame it was emitted against, a rebuild in between cannot reroute it.

use std::{
  cell::{Cell, RefCell},
  collections::VecDeque,
  rc::Rc,
};

use ahash::AHashMap;
use rxrust::prelude::*;
use thiserror::Error;

use crate::{
  key::{KeyDiff, diff_keys},
  scene::{HandlerId, SceneNode},
  state::{ModifyScope, StateWatcher},
  widget::{BoxWidget, BuildCtx, Callback, Widget, WidgetExt},
};

/// A user-triggered input routed to a handler of the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
  Tap(HandlerId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
  /// The activation named a control the frame it was emitted against does
  /// not have.
  #[error("no control registered for {0:?} in the current frame")]
  UnknownHandler(HandlerId),
}

/// An activation with the handler it resolved to when it was emitted.
struct QueuedEvent {
  event: Activation,
  handler: Option<Callback>,
}

pub struct Window {
  root: BoxWidget,
  title: Option<String>,
  frame: Option<SceneNode>,
  handlers: AHashMap<HandlerId, Callback>,
  dirty: Rc<Cell<bool>>,
  queue: RefCell<VecDeque<QueuedEvent>>,
  stats: KeyDiff,
}

impl Window {
  pub fn new(root: impl Widget + 'static) -> Self {
    Window {
      root: root.boxed(),
      title: None,
      frame: None,
      handlers: AHashMap::new(),
      dirty: Rc::new(Cell::new(true)),
      queue: RefCell::new(VecDeque::new()),
      stats: KeyDiff::default(),
    }
  }

  pub fn with_title(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }

  pub fn title(&self) -> Option<&str> { self.title.as_deref() }

  /// Mark the window dirty whenever the watched state reports a change the
  /// framework must see. Silent writes stay invisible here.
  pub fn watch(&self, w: &impl StateWatcher) {
    let dirty = self.dirty.clone();
    let _ = w.raw_modifies().subscribe(move |s| {
      if s.contains(ModifyScope::FRAMEWORK) {
        dirty.set(true);
      }
    });
  }

  pub fn need_draw(&self) -> bool { self.dirty.get() || self.frame.is_none() }

  /// Rebuild the scene from the root widget if anything changed since the
  /// last frame. The handlers of the previous frame are replaced wholesale.
  pub fn draw_frame(&mut self) {
    if !self.need_draw() {
      return;
    }
    let mut ctx = BuildCtx::new();
    let scene = self.root.build(&mut ctx);
    self.handlers = ctx.into_handlers();

    let prev_keys = self
      .frame
      .as_ref()
      .map(|f| f.keys_in_order())
      .unwrap_or_default();
    self.stats = diff_keys(&prev_keys, &scene.keys_in_order());
    log::debug!(
      "frame drawn: {} controls, keys +{} ={} -{}",
      self.handlers.len(),
      self.stats.entered,
      self.stats.reused,
      self.stats.left
    );

    self.frame = Some(scene);
    self.dirty.set(false);
  }

  /// The last drawn frame.
  pub fn frame(&self) -> Option<&SceneNode> { self.frame.as_ref() }

  /// The key diff of the last drawn frame against the one before it.
  pub fn frame_stats(&self) -> KeyDiff { self.stats }

  /// Queue an activation event, bound to the matching handler of the current
  /// frame. Events are processed strictly in emission order by
  /// [`Window::run_until_stalled`].
  pub fn emit(&self, event: Activation) {
    let Activation::Tap(id) = event;
    let handler = self.handlers.get(&id).cloned();
    self
      .queue
      .borrow_mut()
      .push_back(QueuedEvent { event, handler });
  }

  /// Process queued activations one at a time, each to completion: the
  /// handler runs, then the frame is redrawn, and only then is the next
  /// event looked at.
  pub fn run_until_stalled(&mut self) -> Result<(), EventError> {
    loop {
      let event = self.queue.borrow_mut().pop_front();
      match event {
        Some(e) => self.process(e)?,
        None => return Ok(()),
      }
    }
  }

  /// Emit a tap on `id` and process the queue.
  pub fn dispatch_tap(&mut self, id: HandlerId) -> Result<(), EventError> {
    self.emit(Activation::Tap(id));
    self.run_until_stalled()
  }

  fn process(&mut self, event: QueuedEvent) -> Result<(), EventError> {
    let QueuedEvent { event: Activation::Tap(id), handler } = event;
    let handler = handler.ok_or(EventError::UnknownHandler(id))?;
    handler();
    self.draw_frame();
    Ok(())
  }
}
