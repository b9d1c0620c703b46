pub mod domain;
pub mod enquiry_use_cases;
pub mod ports;
pub mod services;
