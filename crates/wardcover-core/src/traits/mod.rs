mod cover_model;

pub use cover_model::ICoverModel;
