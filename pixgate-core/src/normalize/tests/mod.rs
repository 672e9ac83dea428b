mod params_tests;
mod pipeline_tests;
mod suffix_tests;
