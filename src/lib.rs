pub mod core;
pub mod linking;
pub mod quality;
pub mod store;
pub mod text;

// --- Primary core exports ---
pub use crate::core::types;
pub use crate::core::types::*;
pub use crate::core::AppState;

// --- Public analysis contract ---
pub use crate::linking::analyze::{analyze_internal_links, analyze_links_for_domain};
pub use crate::linking::batch::batch_add_internal_links;
pub use crate::linking::inject::inject_internal_links;
pub use crate::linking::{find_related_posts, find_related_via_store};
pub use crate::quality::batch::batch_analyze_quality;
pub use crate::quality::keywords::analyze_keyword_density;
pub use crate::quality::{analyze_content_quality, get_quality_message};
pub use crate::store::{MemoryRepository, PostRepository, StoreError};
