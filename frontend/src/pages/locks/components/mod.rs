pub mod kpis;
pub mod table;
