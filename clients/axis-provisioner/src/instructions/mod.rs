pub mod create_mint;
pub mod initialize_pool;
pub mod mint_supply;
pub mod register_metadata;

pub use create_mint::*;
pub use initialize_pool::*;
pub use mint_supply::*;
pub use register_metadata::*;
