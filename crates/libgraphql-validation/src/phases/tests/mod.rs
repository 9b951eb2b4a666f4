mod parse_tests;
mod validation_result_tests;
