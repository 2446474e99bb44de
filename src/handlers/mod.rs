pub mod audios;
pub mod health;
