pub mod domain;
pub mod ports;
pub mod property_use_cases;
pub mod services;
