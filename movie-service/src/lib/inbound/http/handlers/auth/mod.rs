pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod user_info;

pub use sign_in::sign_in;
pub use sign_out::sign_out;
pub use sign_up::sign_up;
pub use user_info::user_info;
