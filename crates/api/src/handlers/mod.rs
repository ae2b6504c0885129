pub mod product_times;
pub mod work_orders;
