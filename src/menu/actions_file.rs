use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea, FileChooserAction, FileChooserNative, FileFilter, ResponseType};
use std::cell::RefCell;
use std::rc::Rc;
use crate::rendering::{export_png, save_png};
use crate::state::AppState;

pub fn setup(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    drawing_area: &DrawingArea,
    on_change: Rc<dyn Fn()>,
) {

    // --- EXPORT ACTION ---
    let export_action = gtk4::gio::SimpleAction::new("export", None);
    let win_weak = window.downgrade();
    let state_weak = Rc::downgrade(&state);
    let da_weak = drawing_area.downgrade();

    export_action.connect_activate(move |_, _| {
        let win = match win_weak.upgrade() { Some(w) => w, None => return };
        let st_rc = match state_weak.upgrade() { Some(s) => s, None => return };

        // Rendered up front so the image matches what was on screen at click time
        let image = match export_png(&st_rc.borrow()) {
            Ok(img) => img,
            Err(e) => {
                log::error!("Export failed: {}", e);
                return;
            }
        };

        let dialog = FileChooserNative::new(Some("Download Atom Image"), Some(&win), FileChooserAction::Save, Some("Save"), Some("Cancel"));
        let filter_png = FileFilter::new();
        filter_png.set_name(Some("PNG Image (*.png)"));
        filter_png.add_pattern("*.png");
        dialog.add_filter(&filter_png);
        dialog.set_current_name(&image.filename);

        let da_inner = da_weak.clone();
        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    if let Err(e) = save_png(&image, &path) {
                        log::error!("Export failed: {}", e);
                    }
                }
            }
            d.destroy();

            // Back to the live, animated frame
            if let Some(da) = da_inner.upgrade() {
                da.queue_draw();
            }
        });
        dialog.show();
    });
    app.add_action(&export_action);


    // --- RESET ACTION ---
    let reset_action = gtk4::gio::SimpleAction::new("reset", None);
    let state_weak_r = Rc::downgrade(&state);
    reset_action.connect_activate(move |_, _| {
        if let Some(st) = state_weak_r.upgrade() {
            st.borrow_mut().reset();
            on_change();
        }
    });
    app.add_action(&reset_action);


    // --- QUIT ACTION ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let app_weak = app.downgrade();
    quit_action.connect_activate(move |_, _| {
        if let Some(app) = app_weak.upgrade() {
            app.quit();
        }
    });
    app.add_action(&quit_action);
}
