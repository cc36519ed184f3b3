use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea, Orientation, Frame, ScrolledWindow, TextView};
use gtk4::Box as GtkBox;
use std::cell::RefCell;
use std::rc::Rc;

pub mod animation;
pub mod config;
pub mod layout;
pub mod menu;
pub mod model;
pub mod panels;
pub mod rendering;
pub mod state;
pub mod utils;

use animation::{AnimationDriver, LoopState, WidgetScheduler};
use panels::Sidebar;
use rendering::AtomRenderer;
use state::AppState;

fn main() {
    let app = Application::builder()
        .application_id("org.mavensgroup.atomview")
        .build();

    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &Application) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title("AtomView - Build an Atom")
        .default_width(1100)
        .default_height(900)
        .build();

    // Console first, so config loading below is already logged into it
    let console_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    if let Err(e) = utils::logger::init(&console_view) {
        eprintln!("Logger already installed: {}", e);
    }

    let mut initial_state = AppState::new();
    initial_state.load_config();
    let state = Rc::new(RefCell::new(initial_state));

    // 1. TOP LEVEL: Vertical Box (Menu on top, Main Content below)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // 2. MAIN CONTENT: Horizontal Box (Sidebar | Right_Panel)
    let main_hbox = GtkBox::new(Orientation::Horizontal, 0);

    // --- Right Panel (Drawing + Console) ---
    let right_vbox = GtkBox::new(Orientation::Vertical, 0);
    right_vbox.set_hexpand(true);

    let drawing_area = DrawingArea::new();
    drawing_area.set_vexpand(true);

    let info_frame = Frame::new(None);
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(120)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));

    right_vbox.append(&drawing_area);
    right_vbox.append(&info_frame);

    // --- Left Panel (Sidebar) ---
    // The sidebar needs the refresh callback and the callback needs the
    // sidebar, so it is filled in once both exist.
    let sidebar_slot: Rc<RefCell<Option<Rc<Sidebar>>>> = Rc::new(RefCell::new(None));
    let on_change: Rc<dyn Fn()> = {
        let s = state.clone();
        let slot = sidebar_slot.clone();
        let da = drawing_area.clone();
        Rc::new(move || {
            let (summary, label) = {
                let st = s.borrow();
                (st.summary(), st.label.clone())
            };
            if let Some(sidebar) = slot.borrow().as_ref() {
                sidebar.update(&summary, &label);
            }
            da.queue_draw();
        })
    };
    let sidebar = Rc::new(Sidebar::new(state.clone(), on_change.clone()));
    *sidebar_slot.borrow_mut() = Some(sidebar.clone());

    main_hbox.append(&sidebar.container);
    main_hbox.append(&right_vbox);

    // 3. Menu Bar
    let menu_bar = menu::build_menu_and_actions(app, &window, state.clone(), &drawing_area, on_change.clone());

    root_vbox.append(&menu_bar);
    root_vbox.append(&main_hbox);

    // Drawing Function
    let s = state.clone();
    drawing_area.set_draw_func(move |_, cr, w, h| {
        let st = s.borrow();
        let renderer = AtomRenderer::new(&st.config.style, st.nucleus_seed);
        if let Err(e) = renderer.draw(cr, w as f64, h as f64, &st.atom, st.clock_ms, false) {
            log::error!("Frame render failed: {}", e);
        }
    });

    // Animation loop, restarted cleanly (cancel-then-start)
    let driver = Rc::new(RefCell::new(AnimationDriver::new()));
    {
        let da = drawing_area.clone();
        driver.borrow_mut().start(
            &WidgetScheduler(drawing_area.clone()),
            state.clone(),
            move || da.queue_draw(),
        );
    }
    window.connect_close_request(move |_| {
        if driver.borrow().state() == LoopState::Running {
            driver.borrow_mut().stop();
        }
        gtk4::glib::Propagation::Proceed
    });

    on_change();
    log::info!("Ready. Add protons, neutrons and electrons to build an atom.");
    window.present();
}
