pub mod export;
pub mod quiz;
pub mod tutor;
