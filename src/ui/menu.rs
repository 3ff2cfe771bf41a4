use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save...", Shortcut::Ctrl | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Close", Shortcut::Ctrl | Key::F4, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileClose) });

    // Edit
    menu.add("Edit/Clear", Shortcut::Ctrl | 'k', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditClear) });

    // Search
    menu.add("Search/Quick Find...", Shortcut::Ctrl | 'f', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowFind) });
    menu.add("Search/Find Next", Shortcut::None | Key::F3, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FindAgain) });

    // About
    menu.add("About/About Me", Shortcut::None | Key::F1, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::AboutMe) });
    menu.add("About/About Software", Shortcut::None | Key::F2, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::AboutSoftware) });
}
