// src/panels/sidebar.rs

use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Button, Entry, Frame, Label, Orientation, Separator};

use crate::state::{AppState, ParticleType};
use std::cell::RefCell;
use std::rc::Rc;

/// Counter buttons, read-out and the element-guess entry.
pub struct Sidebar {
  pub container: GtkBox,
  readout: Label,
  label_entry: Entry,
}

impl Sidebar {
  /// `on_change` runs after every state mutation (read-out refresh + redraw).
  pub fn new(state: Rc<RefCell<AppState>>, on_change: Rc<dyn Fn()>) -> Self {
    let container = GtkBox::new(Orientation::Vertical, 10);
    container.set_width_request(220);
    container.set_margin_start(10);
    container.set_margin_end(10);
    container.set_margin_top(10);
    container.set_margin_bottom(10);

    let title = Label::new(Some("<b>Build an Atom</b>"));
    title.set_use_markup(true);
    title.set_halign(Align::Start);
    container.append(&title);

    // ============================================================
    // SECTION 1: COUNTERS
    // ============================================================
    for (kind, caption) in [
      (ParticleType::Proton, "Protons"),
      (ParticleType::Neutron, "Neutrons"),
      (ParticleType::Electron, "Electrons"),
    ] {
      let row = GtkBox::new(Orientation::Horizontal, 6);
      let name = Label::new(Some(caption));
      name.set_hexpand(true);
      name.set_xalign(0.0);

      let remove_btn = Button::with_label("−");
      let s = state.clone();
      let cb = on_change.clone();
      remove_btn.connect_clicked(move |_| {
        let changed = s.borrow_mut().remove_particle(kind);
        if changed {
          cb();
        }
      });

      let add_btn = Button::with_label("+");
      let s = state.clone();
      let cb = on_change.clone();
      add_btn.connect_clicked(move |_| {
        s.borrow_mut().add_particle(kind);
        cb();
      });

      row.append(&name);
      row.append(&remove_btn);
      row.append(&add_btn);
      container.append(&row);
    }

    container.append(&Separator::new(Orientation::Horizontal));

    // ============================================================
    // SECTION 2: READ-OUT
    // ============================================================
    let frame = Frame::new(Some("Atom"));
    let readout = Label::new(None);
    readout.set_xalign(0.0);
    readout.set_margin_top(8);
    readout.set_margin_bottom(8);
    readout.set_margin_start(8);
    readout.set_margin_end(8);
    frame.set_child(Some(&readout));
    container.append(&frame);

    // ============================================================
    // SECTION 3: GUESS & EXPORT
    // ============================================================
    let guess_label = Label::new(Some("Element guess:"));
    guess_label.set_halign(Align::Start);
    container.append(&guess_label);

    let label_entry = Entry::new();
    label_entry.set_placeholder_text(Some("e.g. Na+"));
    let s = state.clone();
    label_entry.connect_changed(move |entry| {
      s.borrow_mut().label = entry.text().to_string();
    });
    container.append(&label_entry);

    let export_btn = Button::with_label("Download Image");
    export_btn.set_action_name(Some("app.export"));
    container.append(&export_btn);

    let reset_btn = Button::with_label("Reset");
    reset_btn.set_action_name(Some("app.reset"));
    container.append(&reset_btn);

    Self {
      container,
      readout,
      label_entry,
    }
  }

  /// Takes plain values so no `AppState` borrow is held while the entry's
  /// `changed` handler fires.
  pub fn update(&self, summary: &str, label: &str) {
    self.readout.set_text(summary);
    if self.label_entry.text().as_str() != label {
      self.label_entry.set_text(label);
    }
  }
}
