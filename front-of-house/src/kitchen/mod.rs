//! Chef view: parties by table and the dish catalog
//!
//! ```text
//! KitchenBoard ── parties + DeletedParties
//!   ├── tables(filter) → table_view → Vec<TableTicket>   (by table number)
//!   └── dishes()       → dish_view  → Vec<DishSummary>   (by dish, then variation)
//! ```

pub mod board;
pub mod deleted;
pub mod dishes;
pub mod filter;
pub mod normalize;
pub mod tables;

pub use board::KitchenBoard;
pub use deleted::DeletedParties;
pub use dishes::{DishOccurrence, DishSummary, DishVariation, dish_view};
pub use filter::PartyFilter;
pub use normalize::{STANDARD_VARIATION, normalize_dish_name, variation_key};
pub use tables::{TableTicket, table_view};
