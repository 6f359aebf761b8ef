// Authentication support
// Bearer tokens are issued elsewhere; this crate only verifies them

pub mod jwt;
