mod login;
mod logout;
mod preview;
mod status;
mod sync;

pub use login::run_login;
pub use logout::run_logout;
pub use preview::run_preview;
pub use status::run_status;
pub use sync::run_sync;
