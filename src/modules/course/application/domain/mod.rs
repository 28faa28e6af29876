pub mod entities;
pub mod lessons;
pub mod video;
