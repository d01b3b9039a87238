pub mod baby_stats;
pub mod category;
pub mod feed_type;
pub mod records;
