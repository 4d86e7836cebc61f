mod landing;
pub use landing::Landing;

mod terms;
pub use terms::Terms;
