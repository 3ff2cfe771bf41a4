use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::{AboutKind, about_panel};

const LINE_HEIGHT: i32 = 20;

/// Show one of the About panels as a modal window.
pub fn show_about_dialog(kind: AboutKind, app_name: &str) {
    let panel = about_panel(kind, app_name);
    let body_height = LINE_HEIGHT * panel.lines.len().max(1) as i32;
    let height = 40 + 10 + body_height + 10 + 35 + 40;

    let mut dialog = Window::default()
        .with_size(360, height)
        .with_label(&panel.title)
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 340, height - 20, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(10);

    let mut heading = Frame::default();
    heading.set_label(&panel.heading);
    heading.set_label_size(20);
    heading.set_label_font(Font::HelveticaBold);
    flex.fixed(&heading, 40);

    let mut body = Frame::default();
    body.set_label(&panel.lines.join("\n"));
    body.set_label_size(12);
    body.set_label_color(Color::from_rgb(80, 80, 80));
    body.set_align(Align::Center | Align::Inside);
    flex.fixed(&body, body_height);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
