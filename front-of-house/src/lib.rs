//! French Laudure front-of-house dashboard
//!
//! Derived views over two static datasets loaded once at startup:
//!
//! - **Reservations** (`reservations`): per-date list, day summary, calendar pages
//! - **Priority** (`priority`): "Same Day" ranking of reservations
//! - **Kitchen** (`kitchen`): chef view by table and by dish, with soft delete
//! - **Manifest** (`manifest`): kitchen party manifest derived from diners
//! - **Insights** (`insights`): reservation card summary and tags
//!
//! # Module layout
//!
//! ```text
//! front-of-house/src/
//! ├── core/          # configuration, environment setup
//! ├── dataset/       # JSON loading and validation
//! ├── insights/      # insight summary and tags
//! ├── kitchen/       # table view, dish view, kitchen board
//! ├── manifest/      # party manifest derivation, seating
//! ├── priority/      # scoring rules and ranking
//! ├── reservations/  # per-date list, calendar
//! ├── utils/         # logging, text helpers
//! └── money.rs       # decimal price sums
//! ```
//!
//! Every view function is pure: same input, same output.

pub mod core;
pub mod dataset;
pub mod insights;
pub mod kitchen;
pub mod manifest;
pub mod money;
pub mod priority;
pub mod reservations;
pub mod utils;

// Re-export public types
pub use core::{Config, setup_environment};
pub use dataset::Dataset;
pub use kitchen::{DeletedParties, KitchenBoard, PartyFilter, dish_view, table_view};
pub use manifest::build_manifest;
pub use priority::{rank_reservations, rank_reservations_on};
pub use shared::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
