use super::*;

mod error_test;
