pub mod assets;
pub mod common_areas;
pub mod dashboard;
pub mod financial;
pub mod maintenance;
pub mod preventive;
pub mod reservations;
pub mod suppliers;

pub use assets::Assets;
pub use common_areas::CommonAreas;
pub use dashboard::Dashboard;
pub use financial::Financial;
pub use maintenance::Maintenance;
pub use preventive::Preventive;
pub use reservations::Reservations;
pub use suppliers::Suppliers;
