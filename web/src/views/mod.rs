pub mod about;
pub mod brands;
pub mod community;
pub mod home;
pub mod not_found;
pub mod talent;

pub use about::AboutPage;
pub use brands::BrandsPage;
pub use community::CommunityPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use talent::TalentPage;
