//! App Catalog Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod utils;
pub mod storage;
pub mod state;

pub use types::App;
pub use error::{Error, Result};
pub use utils::{
    calculate_max_page, create_apps_by_id_index, filter_apps_by_search, get_apps_from_storage,
    paginate_apps, update_last_selected_apps, write_apps_to_storage, DEFAULT_PAGE_SIZE,
    DEFAULT_RECENT_LIMIT, LAST_SELECTED_APPS_KEY,
};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use state::{CatalogState, PageControls};
