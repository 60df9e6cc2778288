pub mod composer;
pub mod controller;
pub mod list_view;
pub mod service;
pub mod tui;

pub use composer::TaskComposer;
pub use controller::AppController;
pub use list_view::TaskListView;
pub use service::TaskServiceMessage;
pub use tui::run;
