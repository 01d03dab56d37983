pub mod call;
pub mod class;
pub mod join;
pub mod normalize;
