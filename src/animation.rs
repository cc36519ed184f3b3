// src/animation.rs
// Display-refresh loop that keeps the electrons moving

use crate::state::AppState;
use gdk4::FrameClock;
use gtk4::glib;
use gtk4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
  Idle,
  Running,
}

/// Cancels one scheduled tick loop.
pub trait TickHandle {
  fn cancel(self: Box<Self>);
}

/// Something that calls `tick(now_ms)` once per display refresh until the
/// returned handle is cancelled.
pub trait FrameScheduler {
  fn schedule(&self, tick: Box<dyn FnMut(f64)>) -> Box<dyn TickHandle>;
}

// --- GTK frame clock ---

impl TickHandle for gtk4::TickCallbackId {
  fn cancel(self: Box<Self>) {
    (*self).remove();
  }
}

/// Ticks on the frame clock of a widget (normally the drawing area).
pub struct WidgetScheduler<W: IsA<gtk4::Widget>>(pub W);

impl<W: IsA<gtk4::Widget>> FrameScheduler for WidgetScheduler<W> {
  fn schedule(&self, tick: Box<dyn FnMut(f64)>) -> Box<dyn TickHandle> {
    let tick = RefCell::new(tick);
    let id = self.0.add_tick_callback(move |_, clock: &FrameClock| {
      // frame_time is monotonic microseconds
      (tick.borrow_mut())(clock.frame_time() as f64 / 1000.0);
      glib::ControlFlow::Continue
    });
    Box::new(id)
  }
}

// --- Driver ---

/// Owns the single live animation loop. The loop never stops on its own;
/// while the atom has no electrons ticks only advance the clock.
pub struct AnimationDriver {
  handle: Option<Box<dyn TickHandle>>,
}

impl AnimationDriver {
  pub fn new() -> Self {
    Self { handle: None }
  }

  pub fn state(&self) -> LoopState {
    if self.handle.is_some() {
      LoopState::Running
    } else {
      LoopState::Idle
    }
  }

  /// Starts the loop, cancelling any loop started earlier so at most one runs.
  /// `redraw` is called after the state's clock has been advanced.
  pub fn start<F>(&mut self, scheduler: &dyn FrameScheduler, state: Rc<RefCell<AppState>>, mut redraw: F)
  where
    F: FnMut() + 'static,
  {
    self.stop();

    let tick = move |now_ms: f64| {
      // Redraws queued by button presses read this clock too
      let animate = {
        let mut st = state.borrow_mut();
        st.clock_ms = now_ms;
        st.atom.electrons > 0
      };
      if animate {
        redraw();
      }
    };

    self.handle = Some(scheduler.schedule(Box::new(tick)));
    log::debug!("Animation loop started");
  }

  pub fn stop(&mut self) {
    if let Some(handle) = self.handle.take() {
      handle.cancel();
      log::debug!("Animation loop cancelled");
    }
  }
}

impl Default for AnimationDriver {
  fn default() -> Self {
    Self::new()
  }
}

impl Drop for AnimationDriver {
  fn drop(&mut self) {
    self.stop();
  }
}
