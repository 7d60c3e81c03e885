mod timeseries;

pub use timeseries::TimeSeriesPlot;
