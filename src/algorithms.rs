pub mod fan;

#[doc(inline)]
pub use fan::fan_mesh;
