mod bubble;

pub use bubble::{
    bubble_sort, bubble_sort_by, bubble_sort_by_key, bubble_sort_stats, bubble_sorted,
    is_sorted, try_bubble_sort, SortStats,
};
