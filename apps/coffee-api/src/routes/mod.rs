//! HTTP handlers, one module per route family.
//!
//! | Path | Methods |
//! |---|---|
//! | `/inventory`, `/inventory/{id}` | GET POST / GET PUT DELETE |
//! | `/menu`, `/menu/{id}` | GET POST / GET PUT DELETE |
//! | `/orders`, `/orders/{id}` | GET POST / GET PUT DELETE |
//! | `/orders/{id}/close` | POST |
//! | `/reports/total-sales`, `/reports/popular-items` | GET |
//! | `/admin/reset` | DELETE |
//! | `/health` | GET |

pub mod admin;
pub mod health;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod reports;
