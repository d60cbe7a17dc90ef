pub mod transport_report;
