#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use flypath_geom as geom;

#[doc(inline)]
pub use flypath_traj as traj;
