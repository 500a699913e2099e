pub mod date_utils;
pub mod money_utils;
