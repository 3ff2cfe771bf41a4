use fltk::{
    app::{self, Sender},
    enums::Event,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::domain::{Document, EditorSettings, Message};

pub const MENU_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
}

pub fn build_main_window(settings: &EditorSettings, sender: &Sender<Message>) -> MainWidgets {
    let (w, h) = (settings.window_width, settings.window_height);
    let title = Document::new().title(&settings.app_name);
    let mut wind = Window::new(100, 100, w, h, None);
    wind.set_label(&title);
    wind.set_xclass(&settings.app_name);

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let mut buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.set_text_size(settings.font_size);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Every insert or delete, typed or programmatic, is reported; the
    // controller ignores reports that leave the text unchanged.
    let s = *sender;
    buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
        if inserted > 0 || deleted > 0 {
            s.send(Message::TextEdited);
        }
    });

    // Window manager close goes through the same path as File/Close.
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::FileClose);
        }
    });

    MainWidgets {
        wind,
        menu,
        text_editor,
        buffer,
    }
}
