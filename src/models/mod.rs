pub mod chat;
pub mod gratitude;
pub mod message;
pub mod mood;
pub mod user;

pub use chat::ChatSession;
pub use gratitude::GratitudeEntry;
pub use message::{ChatMessage, Role};
pub use mood::{MoodEntry, MoodScore, MoodStats};
pub use user::Profile;
