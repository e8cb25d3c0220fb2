pub mod rectangle_count;
