pub mod insights_service;
