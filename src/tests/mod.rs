mod geocoder_tests;
mod utils;
