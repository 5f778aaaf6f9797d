mod input;
mod toast;

pub use input::TextInput;
pub use toast::Toast;
