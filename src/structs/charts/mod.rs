pub mod daily_series;
pub mod weekly_bar_data;
pub mod category_slice;
pub mod progress_data;
