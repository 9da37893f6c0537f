//! Reusable UI components.
//!
//! DESIGN
//! ======
//! Components render from props and report user intent through callbacks;
//! store access stays in the pages that own a synchronizer.

pub mod card_image;
pub mod favorite_card;
pub mod nav_bar;
pub mod product_card;
