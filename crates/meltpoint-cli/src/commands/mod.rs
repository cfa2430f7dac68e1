pub mod batch;
pub mod calc;
pub mod polymerases;
pub mod template;
