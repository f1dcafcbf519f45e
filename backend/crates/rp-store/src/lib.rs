pub mod error;
pub mod memory_profile_store;
pub mod profile_row;
pub mod profile_store;
pub mod supabase_profile_store;

pub use error::{Result as StoreResult, StoreError};
pub use memory_profile_store::MemoryProfileStore;
pub use profile_row::ProfileRow;
pub use profile_store::ProfileStore;
pub use supabase_profile_store::{DEFAULT_PROFILE_TABLE, SupabaseProfileStore};
