/// Presentation layer: stateless widgets over projected row data.
pub mod charts;
pub mod kpi;
pub mod panels;
pub mod table;
