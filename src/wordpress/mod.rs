mod categories;
mod endpoints;
mod fetch;
mod model;
mod posts;

pub use categories::{list_categories, parse_categories};
pub use endpoints::{DEFAULT_BASE_URL, Endpoints};
pub use fetch::fetch_text;
pub use model::{Article, Category, CategoryRecord, PostRecord, Rendered};
pub use posts::{PAGE_SIZE, is_last_page, list_posts, parse_posts};
