pub mod header;
pub mod search_bar;
pub mod loading_indicator;
pub mod ingredient_list;
pub mod recipe_card;
pub mod recipe_grid;
pub mod recipe_overlay;
