use fltk::text::TextBuffer;

/// Copy the buffer's text, freeing the C string FLTK hands back.
///
/// `TextBuffer::text()` copies the malloc'd string from `Fl_Text_Buffer_text`
/// but never frees it. The controller reads the buffer after every edit, so
/// that would leak a full copy of the document per keystroke.
///
/// The copy ends at the first NUL, which is why files containing NUL are
/// refused on load.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf` is a live fltk-rs buffer, so its inner pointer is valid.
    // Fl_Text_Buffer_text returns a NUL-terminated malloc'd copy (or null),
    // which is copied into Rust memory before being released with free().
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}
