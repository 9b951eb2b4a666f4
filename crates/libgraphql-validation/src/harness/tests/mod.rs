mod expectation_tests;
mod test_rules;
