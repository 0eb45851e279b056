mod minify_tests;
mod pipeline_tests;
mod validator_tests;
