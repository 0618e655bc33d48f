//! Desktop front-end built on egui/eframe.

mod app;
mod board_view;
mod theme;

pub use app::PenteApp;
