pub mod data;
pub mod model;
pub mod session;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use session::QuizSession;
