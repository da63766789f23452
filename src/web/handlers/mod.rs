// Request handlers
//
// - pages.rs: home, catalog pages with filter fragments, not-found
// - chat.rs: chat page and the two-step turn (submit, reply)
// - forms.rs: crop advisor and disease detection forms

pub mod chat;
pub mod forms;
pub mod pages;

pub use pages::shell_for;
