//! Domain layer for dishboard.
//!
//! This module contains the record types shown on the dashboard screens, their
//! closed status/category enumerations, exact money arithmetic and the crate's
//! error type. Nothing here knows about filtering or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`money`]: Cent-exact amounts with half-up rounding
//! - [`inventory`], [`menu`], [`order`], [`staff`], [`table`]: one record type each
//!
//! # Examples
//!
//! ```
//! use dishboard::domain::{LineItem, OrderRecord, OrderStatus};
//!
//! let order = OrderRecord::new(
//!     "1",
//!     5,
//!     vec![LineItem::new("Butter Chicken", 2, 299.99), LineItem::new("Naan", 4, 49.99)],
//!     OrderStatus::New,
//!     0,
//! );
//! assert_eq!(order.total().to_string(), "799.94");
//! ```

pub mod error;
pub mod inventory;
pub mod menu;
pub mod money;
pub mod order;
pub mod staff;
pub mod table;

pub use error::{DishboardError, Result};
pub use inventory::{InventoryRecord, INVENTORY_CATEGORIES};
pub use menu::{MenuCategory, MenuRecord};
pub use money::Money;
pub use order::{LineItem, OrderRecord, OrderStatus};
pub use staff::{StaffRecord, StaffStatus};
pub use table::{TableRecord, TableStatus};
