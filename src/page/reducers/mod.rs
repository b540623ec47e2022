pub mod filters;
pub mod panels;
pub mod sort;

pub use filters::reduce_filters;
pub use panels::reduce_panels;
pub use sort::reduce_sort;
