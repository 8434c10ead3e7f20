pub mod display_name;
pub mod email;
pub mod password;
pub mod user_role;

pub use display_name::DisplayName;
pub use email::Email;
pub use password::Password;
pub use user_role::UserRole;
