//! UI screens.

mod app;
mod membership_screen;

pub use app::App;
pub use membership_screen::{MembershipAction, MembershipScreen};
