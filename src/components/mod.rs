pub mod calendar_panel;
pub mod picker;
pub mod popover;
pub mod select;
pub mod slot_form;
pub mod status_bar;
pub mod time_panel;
pub mod toast;

pub use picker::DateTimePicker;
pub use slot_form::SlotForm;
pub use status_bar::StatusBar;
pub use toast::ToastView;
