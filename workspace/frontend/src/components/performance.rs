mod view;

pub use view::PerformanceView;
