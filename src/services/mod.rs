pub mod ai;
pub mod chat;
pub mod dialogue;
pub mod humanizer;
pub mod rules;
pub mod voice;
