pub mod csv_log;
