pub mod linkedin_services;
