//! Integration tests for Quote-Harvest

mod crawl_tests;
