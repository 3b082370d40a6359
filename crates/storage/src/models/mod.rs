pub mod athlete;
pub mod category;
pub mod training_center;

pub use athlete::Athlete;
pub use category::Category;
pub use training_center::TrainingCenter;
