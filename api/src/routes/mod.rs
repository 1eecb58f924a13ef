pub mod health;
pub mod interview;
pub mod knowledge;
pub mod sessions;
