//! Company profile - domain model.

mod company_model;

pub use company_model::CompanyInfo;
