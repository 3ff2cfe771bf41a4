use fltk::{
    app::Sender,
    button::{Button, CheckButton},
    enums::{Align, CallbackTrigger},
    frame::Frame,
    input::Input,
    prelude::*,
    window::Window,
};

use crate::app::domain::Message;
use crate::app::services::find::FindQuery;

/// Non-modal find window. Searches are sent back to the main loop as
/// [`Message::Find`]; the controller reports the outcome with `set_status`.
pub struct FindPanel {
    window: Window,
    input: Input,
    case_check: CheckButton,
    status: Frame,
}

impl FindPanel {
    pub fn new(sender: Sender<Message>, match_case: bool) -> Self {
        let mut window = Window::default()
            .with_size(400, 150)
            .with_label("Quick Find");

        Frame::default().with_pos(20, 20).with_size(80, 30).with_label("Find what:");
        let mut input = Input::default().with_pos(110, 20).with_size(270, 30);

        let mut case_check = CheckButton::default()
            .with_pos(110, 55).with_size(200, 25).with_label("Match case");
        case_check.set_checked(match_case);

        let mut status = Frame::default().with_pos(20, 85).with_size(360, 20);
        status.set_align(Align::Left | Align::Inside);
        status.set_label_size(12);

        let mut find_btn = Button::default()
            .with_pos(200, 110).with_size(90, 30).with_label("Find Next");
        let mut close_btn = Button::default()
            .with_pos(300, 110).with_size(90, 30).with_label("Close");

        window.end();
        window.make_resizable(false);

        let send_query = {
            let input = input.clone();
            let case_check = case_check.clone();
            let mut status = status.clone();
            move || {
                let term = input.value();
                if term.is_empty() {
                    status.set_label("Please enter text to find");
                    status.redraw_label();
                    return;
                }
                sender.send(Message::Find(FindQuery::new(term, case_check.is_checked())));
            }
        };

        let mut on_button = send_query.clone();
        find_btn.set_callback(move |_| on_button());

        let mut on_enter = send_query;
        input.set_trigger(CallbackTrigger::EnterKeyAlways);
        input.set_callback(move |_| on_enter());

        let mut dialog_close = window.clone();
        close_btn.set_callback(move |_| {
            dialog_close.hide();
        });

        Self {
            window,
            input,
            case_check,
            status,
        }
    }

    /// Bring the panel up, seeded with the previous search.
    pub fn show(&mut self, last: Option<&FindQuery>) {
        if let Some(query) = last {
            self.input.set_value(&query.term);
            self.case_check.set_checked(query.case_sensitive);
        }
        self.set_status("");
        self.window.show();
        let _ = self.input.take_focus();
    }

    pub fn is_shown(&self) -> bool {
        self.window.shown()
    }

    pub fn set_status(&mut self, status: &str) {
        self.status.set_label(status);
        self.window.redraw();
    }

    pub fn hide(&mut self) {
        self.window.hide();
    }
}
