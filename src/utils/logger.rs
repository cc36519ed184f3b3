// src/utils/logger.rs

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

/// Mirrors `log` records into the console pane under the canvas.
struct ConsoleLogger;

/// (tag name, foreground colour) per level
const TAGS: [(&str, &str); 4] = [
  ("error", "#ff4444"),
  ("warn", "#ffbb33"),
  ("info", "#33b5e5"),
  ("debug", "#aaaaaa"),
];

pub fn init(view: &TextView) -> Result<(), SetLoggerError> {
  let buffer = view.buffer();
  let tag_table = buffer.tag_table();

  for (name, colour) in TAGS {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", colour);
      if name == "error" {
        tag.set_property("weight", 700);
      }
      tag_table.add(&tag);
    }
  }

  let _ = LOG_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

fn tag_for(level: Level) -> &'static str {
  match level {
    Level::Error => "error",
    Level::Warn => "warn",
    Level::Info => "info",
    Level::Debug | Level::Trace => "debug",
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= Level::Debug
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let tag_name = tag_for(record.level());
    let msg = format!("[{}] {}\n", record.level(), record.args());

    glib::MainContext::default().spawn_local(async move {
      let Some(view) = LOG_VIEW.get().and_then(|w| w.upgrade()) else {
        return;
      };
      let buffer = view.buffer();
      let mut end = buffer.end_iter();
      buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

      // Auto-scroll
      let mark = buffer.create_mark(None, &buffer.end_iter(), false);
      view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
      buffer.delete_mark(&mark);
    });
  }

  fn flush(&self) {}
}
