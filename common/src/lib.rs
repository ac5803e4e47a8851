//! Recipe Browser Common Library
//!
//! Web(WASM)とネイティブホストで共有される型・状態機械

pub mod config;
pub mod error;
pub mod model;
pub mod ingredients;
pub mod search;
pub mod overlay;
pub mod keyboard;

pub use error::{Error, Result};
pub use model::{IngredientSlot, Recipe, SearchResponse, parse_search_response};
pub use ingredients::extract_ingredients;
pub use search::{SearchController, SearchOutcome, SearchTicket, StalePolicy};
pub use overlay::{FocusAnchor, OverlayState, Transition};
pub use keyboard::{Key, KeyAction, dispatch_key};
