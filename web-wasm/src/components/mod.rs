pub mod header;
pub mod search_input;
pub mod app_card;
pub mod apps_grid;
pub mod pagination;
pub mod app_modal;
pub mod status;
