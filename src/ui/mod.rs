pub mod app;
pub mod events;
pub mod footer;
pub mod gesture;
pub mod header;
pub mod indicator;
pub mod input;
pub mod layout;
pub mod link;
pub mod listeners;
pub mod mvi;
pub mod pager;
pub mod render;
pub mod runtime;
pub mod slide_view;
pub mod store;
pub mod terminal_guard;
pub mod theme;
