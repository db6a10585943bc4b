mod reporting;
mod timeouts;
