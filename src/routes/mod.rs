pub mod daily_plan;
pub mod health;
pub mod image;
pub mod search;
