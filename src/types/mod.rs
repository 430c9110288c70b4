mod chat;
mod mood;
mod self_care;
mod user;

pub use chat::*;
pub use mood::*;
pub use self_care::*;
pub use user::*;
