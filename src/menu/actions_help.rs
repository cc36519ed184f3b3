use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, AboutDialog, License};

pub fn setup(app: &Application, window: &ApplicationWindow) {

    // --- ABOUT ACTION ---
    let about_action = gtk4::gio::SimpleAction::new("help_about", None);
    let win_weak = window.downgrade();

    about_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            let dialog = AboutDialog::builder()
                .transient_for(&win)
                .modal(true)
                .program_name("AtomView")
                .version(env!("CARGO_PKG_VERSION"))
                .comments("Build an atom from protons, neutrons and electrons, watch its shells spin, export a labelled snapshot.")
                .license_type(License::MitX11)
                .logo_icon_name("applications-science")
                .build();

            dialog.present();
        }
    });
    app.add_action(&about_action);
}
