//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as ArrowLeft, LuInfo as Alert, LuMinus as Minus, LuMoon as Moon,
        LuPlus as Plus, LuRotateCw as Retry, LuSearch as Search, LuShoppingBag as Bag,
        LuShoppingCart as Cart, LuSlidersHorizontal as Filter, LuStar as Star, LuSun as Sun,
        LuTrash2 as Trash,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Retry, BsArrowLeft as ArrowLeft, BsBag as Bag, BsCart3 as Cart,
        BsDashLg as Minus, BsFunnel as Filter, BsInfoCircle as Alert, BsMoon as Moon,
        BsPlusLg as Plus, BsSearch as Search, BsStarFill as Star, BsSun as Sun, BsTrash as Trash,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ALERT, Alert);
themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(BAG, Bag);
themed_icon!(CART, Cart);
themed_icon!(FILTER, Filter);
themed_icon!(MINUS, Minus);
themed_icon!(MOON, Moon);
themed_icon!(PLUS, Plus);
themed_icon!(RETRY, Retry);
themed_icon!(SEARCH, Search);
themed_icon!(STAR, Star);
themed_icon!(SUN, Sun);
themed_icon!(TRASH, Trash);
