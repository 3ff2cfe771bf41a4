use fltk::{app, prelude::*};

use simple_pad::app::{Controller, EditorSettings, Message};
use simple_pad::ui::host::{FltkHost, FltkView};
use simple_pad::ui::main_window::build_main_window;
use simple_pad::ui::menu::build_menu;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = EditorSettings::load();
    log::info!("Starting {} {}", settings.app_name, env!("CARGO_PKG_VERSION"));

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&settings, &sender);
    build_menu(&mut widgets.menu, &sender);
    widgets.wind.show();

    let view = FltkView::new(widgets.wind.clone(), widgets.text_editor.clone(), widgets.buffer.clone());
    let host = FltkHost::new(sender, &settings);
    let mut controller = Controller::new(view, host, settings);

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            controller.dispatch(msg);
        }
    }

    log::info!("Window closed");
}
