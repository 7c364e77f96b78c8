mod dashboard;
pub use dashboard::Dashboard;

mod data;
pub use data::VaccinationData;
